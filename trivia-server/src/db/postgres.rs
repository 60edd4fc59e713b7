//! PostgreSQL store
//!
//! Expects the trivia schema to exist already:
//!
//! ```sql
//! CREATE TABLE categories (id SERIAL PRIMARY KEY, type TEXT);
//! CREATE TABLE questions (
//!     id SERIAL PRIMARY KEY,
//!     question TEXT,
//!     answer TEXT,
//!     difficulty INTEGER,
//!     category TEXT
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Question, QuizFilter, SearchTerm};

/// Store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY type",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(&question.category)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "question inserted");
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(term.pattern())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn quiz_candidates(
        &self,
        filter: &QuizFilter,
        previous: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE NOT (id = ANY($1))
              AND ($2::text IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(previous)
        .bind(filter.category())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        PgStore::new(pool)
    }

    fn new_question(text: &str, category: &str) -> NewQuestion {
        NewQuestion {
            question: text.to_owned(),
            answer: "answer".to_owned(),
            difficulty: 1,
            category: category.to_owned(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete() {
        let store = store().await;
        let id = store
            .insert_question(new_question("inserted by pg test?", "1"))
            .await
            .expect("insert failed");

        store.delete_question(id).await.expect("delete failed");

        let remaining = store.list_questions().await.expect("list failed");
        assert!(remaining.iter().all(|q| q.id != id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_is_not_found() {
        let store = store().await;
        let err = store.delete_question(i32::MAX).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn quiz_candidates_skip_previous() {
        let store = store().await;
        let first = store
            .insert_question(new_question("pg quiz one?", "999"))
            .await
            .expect("insert failed");
        let second = store
            .insert_question(new_question("pg quiz two?", "999"))
            .await
            .expect("insert failed");

        let filter = QuizFilter::Category("999".into());
        let candidates = store
            .quiz_candidates(&filter, &[first])
            .await
            .expect("query failed");

        assert!(candidates.iter().all(|q| q.id != first));
        assert!(candidates.iter().any(|q| q.id == second));

        store.delete_question(first).await.expect("cleanup failed");
        store.delete_question(second).await.expect("cleanup failed");
    }
}
