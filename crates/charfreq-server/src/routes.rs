//! HTTP routes and handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, Method},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use charfreq_core::{FrequencyRecord, TallyOptions};
use charfreq_orchestration::TallyTask;

use crate::content::read_bundled;
use crate::error::AppError;
use crate::presentation::animation::AnimationScript;
use crate::presentation::tutorial;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FrequenciesResponse {
    pub frequencies: Vec<FrequencyRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    pub content: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(tutorial_handler))
        .route("/api/file-content", get(file_content_handler))
        .route("/api/process-file", get(process_file_handler))
        .route("/api/process-text", post(process_text_handler))
        .route("/api/animations/{method}", get(animation_handler))
        .layer(cors)
        .with_state(state)
}

/// The rendered tutorial page.
pub async fn tutorial_handler() -> Html<String> {
    Html(tutorial::render_page())
}

/// The stored sample text, from the document store or the bundled file.
pub async fn file_content_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ContentResponse>, AppError> {
    let content = state.source.fetch().await?;
    Ok(Json(ContentResponse { content }))
}

/// Server-side frequency computation over the bundled file.
pub async fn process_file_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FrequenciesResponse>, AppError> {
    let text = read_bundled(&state.config.content_file).await?;
    let report = TallyTask::spawn(text, TallyOptions::default())
        .wait()
        .await?;
    Ok(Json(FrequenciesResponse {
        frequencies: report.records,
    }))
}

/// Frequency computation over caller-supplied text (the upload path).
pub async fn process_text_handler(
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<FrequenciesResponse>, AppError> {
    let report = TallyTask::spawn(request.content, TallyOptions::default())
        .wait()
        .await?;
    Ok(Json(FrequenciesResponse {
        frequencies: report.records,
    }))
}

/// The animation script for one UML method.
pub async fn animation_handler(
    Path(method): Path<String>,
) -> Result<Json<AnimationScript>, AppError> {
    AnimationScript::for_method(&method)
        .map(Json)
        .ok_or(AppError::UnknownAnimation(method))
}
