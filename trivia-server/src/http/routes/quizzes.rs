//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{choose_question, QuestionResponse, QuizRequest};

/// Next quiz question, `null` once the category is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionResponse>,
}

/// POST /quizzes - a random question not in `previous_questions`
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (filter, previous) = req.into_parts().map_err(ApiError::unprocessable)?;

    let candidates = state
        .store
        .quiz_candidates(&filter, &previous)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::debug!(
        category = filter.category().unwrap_or("all"),
        candidates = candidates.len(),
        "quiz draw"
    );

    let question = choose_question(candidates, &mut rand::thread_rng());

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(QuestionResponse::from),
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
