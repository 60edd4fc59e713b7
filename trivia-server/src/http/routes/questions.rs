//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiPath};
use crate::http::server::AppState;
use crate::models::{
    category_map, paginate, CategoryMap, CreateQuestionRequest, PageParams, QuestionResponse,
    SearchRequest,
};

/// One page of questions
#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Delete response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: u64,
}

/// Create response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

/// GET /questions?page=N - ten questions per page, ordered by id
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let questions = state
        .store
        .list_questions()
        .await
        .map_err(ApiError::unprocessable)?;
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::unprocessable)?;

    let page = params.page();
    let page_items: Vec<QuestionResponse> = paginate(page, &questions);
    if page_items.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {} is empty ({} questions)",
            page,
            questions.len()
        )));
    }

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_items,
        total_questions: questions.len(),
        categories: category_map(&categories),
    }))
}

/// DELETE /questions/{question_id}
///
/// A missing question is a 422, not a 404. So is an id too large for the
/// store's integer column.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiPath(question_id): ApiPath<u64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = i32::try_from(question_id).map_err(ApiError::unprocessable)?;

    state
        .store
        .delete_question(id)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// POST /questions - create a question from all four fields
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = req.into_new_question().map_err(ApiError::unprocessable)?;

    let id = state
        .store
        .insert_question(question)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(id, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// POST /questions/search - case-insensitive substring search, unpaginated
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req.into_term().map_err(ApiError::not_found)?;

    let questions: Vec<QuestionResponse> = state
        .store
        .search_questions(&term)
        .await
        .map_err(ApiError::unprocessable)?
        .into_iter()
        .map(QuestionResponse::from)
        .collect();

    tracing::debug!(term = term.as_str(), count = questions.len(), "search");

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}
