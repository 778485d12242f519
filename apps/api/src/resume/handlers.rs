//! Axum route handlers for rendering and validating résumés.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::loader::{load_from_file, parse_body, Document};
use crate::resume::render::{render_index, render_resume};
use crate::resume::validation::validate_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Validates, then renders. Rejected documents never reach the renderer.
fn validate_and_render(doc: &Document, origin: &str) -> Result<Html<String>, AppError> {
    let errors = validate_resume(doc);
    if !errors.is_empty() {
        warn!(origin, error_count = errors.len(), "Resume rejected");
        return Err(AppError::Validation(errors));
    }

    info!(origin, "Rendering resume");
    Ok(Html(render_resume(doc)))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.default_src))
}

/// GET /render?src=resume.json
///
/// Loads the document from a file under the configured document root.
/// A missing `src` falls back to the configured default; an empty one is rejected.
/// Repeated `src` parameters resolve to the first one.
pub async fn handle_render_file(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let src = params
        .into_iter()
        .find_map(|(key, value)| (key == "src").then_some(value))
        .unwrap_or_else(|| state.config.default_src.clone());

    let doc = load_from_file(&state.config.document_root, &src).await?;
    validate_and_render(&doc, &src)
}

/// POST /render
///
/// The body is parsed as JSON whatever its content type.
pub async fn handle_render_body(body: Bytes) -> Result<Html<String>, AppError> {
    let doc = parse_body(&body)?;
    validate_and_render(&doc, "request body")
}

/// POST /validate
///
/// Reports validation results as JSON without rendering.
/// Always 200 for a well-formed object; loader failures keep their own status.
pub async fn handle_validate(body: Bytes) -> Result<Json<ValidateResponse>, AppError> {
    let doc = parse_body(&body)?;
    let errors = validate_resume(&doc);

    Ok(Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    }))
}
