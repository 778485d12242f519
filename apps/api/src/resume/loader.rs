//! Turns a request body or a file under the document root into a [`Document`].
//!
//! Only the top-level shape is checked here; everything nested is the validator's job.

use std::path::{Component, Path};

use serde_json::{Map, Value};

use crate::errors::AppError;

/// A résumé record: string keys to arbitrary JSON values, passed through to rendering as-is.
pub type Document = Map<String, Value>;

/// Parses a request body as JSON regardless of the declared content type.
pub fn parse_body(body: &[u8]) -> Result<Document, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(AppError::BadRequest(
            "JSON body must be an object".to_string(),
        )),
    }
}

/// Reads `src`, relative to `root`, as a JSON document.
pub async fn load_from_file(root: &Path, src: &str) -> Result<Document, AppError> {
    if src.is_empty() {
        return Err(AppError::BadRequest("Missing ?src path to JSON".to_string()));
    }

    let relative = Path::new(src);
    if !relative.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
        return Err(AppError::BadRequest(format!(
            "Path must stay inside the document root: {src}"
        )));
    }

    let path = root.join(relative);
    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(AppError::NotFound(format!("File not found: {src}")));
    }

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::BadRequest(format!("Unable to read {src}: {e}")))?;

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON in {src}: {e}")))?;

    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(AppError::BadRequest(format!(
            "Top-level JSON in {src} must be an object"
        ))),
    }
}
