//! In-memory store
//!
//! Same ordering and matching rules as the PostgreSQL store. Used by the
//! endpoint tests and by `trivia serve --store memory`.
//!
//! Failure mode can be switched on to make every call return
//! `StoreError::Unavailable`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Question, QuizFilter, SearchTerm};

/// Categories seeded by `InMemoryStore::with_default_categories`
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: BTreeMap<i32, Question>,
    next_category_id: i32,
    next_question_id: i32,
}

impl Tables {
    fn next_question_id(&mut self) -> i32 {
        self.next_question_id += 1;
        self.next_question_id
    }

    fn next_category_id(&mut self) -> i32 {
        self.next_category_id += 1;
        self.next_category_id
    }
}

/// Store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the six standard trivia categories (ids 1..=6).
    pub async fn with_default_categories() -> Self {
        let store = Self::new();
        for kind in DEFAULT_CATEGORIES {
            store.add_category(kind).await;
        }
        store
    }

    /// Add a category and return its id.
    pub async fn add_category(&self, kind: &str) -> i32 {
        let mut tables = self.tables.write().await;
        let id = tables.next_category_id();
        tables.categories.push(Category::new(id, kind));
        id
    }

    /// Make every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store set to fail".into()));
        }
        Ok(())
    }

    async fn select<F>(&self, keep: F) -> Result<Vec<Question>, StoreError>
    where
        F: Fn(&Question) -> bool + Send,
    {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.values().filter(|&q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.select(|_| true).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i32, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id();
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                difficulty: question.difficulty,
                category: question.category,
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        self.check()?;
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        self.select(|q| term.matches(&q.question)).await
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StoreError> {
        self.select(|q| q.category == category).await
    }

    async fn quiz_candidates(
        &self,
        filter: &QuizFilter,
        previous: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        self.select(|q| filter.accepts(q) && !previous.contains(&q.id))
            .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
