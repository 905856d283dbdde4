//! Download of evaluation artifacts from the configured test run.

use std::io::ErrorKind;
use std::path::Path;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, header},
    response::Response,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::AppState;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct DownloadParams {
    pub file: Option<String>,
    pub algorithm: Option<String>,
}

/// A bare file name: non-empty, no parent references, no separators.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

/// Content type by (case-insensitive) extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).to_ascii_lowercase().as_str() {
        ".csv" => "text/csv",
        ".md" => "text/markdown",
        ".json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Extension including the leading dot, or empty. A leading dot alone
/// (`.env`) does not start an extension.
fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[index..],
        _ => "",
    }
}

/// Whitespace runs become `-`, letters are lowercased and anything outside
/// `[a-z0-9._-]` is dropped so the value is safe inside a quoted header.
pub fn algorithm_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

/// Name offered to the browser: `<base>-<slug><ext>` when an algorithm is
/// given, the requested name otherwise.
pub fn download_file_name(file_name: &str, algorithm: Option<&str>) -> String {
    match algorithm.filter(|name| !name.trim().is_empty()) {
        Some(algorithm) => {
            let ext = extension_of(file_name);
            let base = &file_name[..file_name.len() - ext.len()];
            format!(
                "{}-{}{}",
                strip_quotes(base),
                algorithm_slug(algorithm),
                strip_quotes(&ext.to_ascii_lowercase())
            )
        }
        None => strip_quotes(file_name),
    }
}

fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

pub async fn download_handler(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> AppResult<Response> {
    let file_name = params
        .file
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::bad_request("File parameter is required"))?;

    if !is_safe_file_name(&file_name) {
        return Err(AppError::bad_request("Invalid file name"));
    }

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        download_file_name(&file_name, params.algorithm.as_deref())
    ))
    .map_err(|_| AppError::bad_request("Invalid file name"))?;

    let path = state.results().test_run_path().join(&file_name);
    let bytes = read_artifact(&path).await?;
    info!(path = %path.display(), bytes = bytes.len(), "serving download");

    Response::builder()
        .header(header::CONTENT_TYPE, content_type_for(&file_name))
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(bytes))
        .map_err(|err| AppError::internal(err.to_string()))
}

async fn read_artifact(path: &Path) -> AppResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::not_found("File not found"),
        _ => {
            error!(path = %path.display(), error = %err, "failed to read download");
            AppError::internal("Internal server error")
        }
    })
}
