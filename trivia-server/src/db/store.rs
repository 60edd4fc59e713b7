//! Store abstraction shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question, QuizFilter, SearchTerm};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Question and category storage.
///
/// Every method is a single independent read or write.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by type.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All questions ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Insert a question and return its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<i32, StoreError>;

    /// Delete a question by id.
    ///
    /// Returns `StoreError::NotFound` when no row was removed.
    async fn delete_question(&self, id: i32) -> Result<(), StoreError>;

    /// Questions whose text contains the term, ignoring case.
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError>;

    /// Questions whose category text equals `category`.
    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StoreError>;

    /// Questions allowed by `filter` whose id is not in `previous`.
    async fn quiz_candidates(
        &self,
        filter: &QuizFilter,
        previous: &[i32],
    ) -> Result<Vec<Question>, StoreError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
