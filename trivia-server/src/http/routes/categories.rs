//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiPath;
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, QuestionResponse};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions of one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: u64,
}

/// GET /categories - all categories as `{id: type}`
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::unprocessable)?;

    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{category_id}/questions - questions filed under a category
///
/// The category column is text, so the id is compared by its decimal form.
/// An id with no questions is an empty list, not a 404.
async fn questions_for_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<u64>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions: Vec<QuestionResponse> = state
        .store
        .questions_in_category(&category_id.to_string())
        .await
        .map_err(ApiError::not_found)?
        .into_iter()
        .map(QuestionResponse::from)
        .collect();

    tracing::debug!(category_id, count = questions.len(), "category questions");

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(questions_for_category))
}
