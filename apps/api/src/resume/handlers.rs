//! Axum route handlers for the resume header API.

use axum::{extract::rejection::JsonRejection, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::resume::header::{HeaderInput, ResumeHeader};
use crate::resume::platforms::{platform_table, PlatformEntry};

/// GET /api/resume/platforms
///
/// Returns the social platform table in picker order.
pub async fn handle_list_platforms() -> Json<Vec<PlatformEntry>> {
    Json(platform_table())
}

/// POST /api/resume/header
///
/// Normalizes a header submitted by the resume editor and echoes it back.
/// Any invalid link, unknown platform id, or malformed body fails the whole
/// request with 400.
pub async fn handle_build_header(
    payload: Result<Json<HeaderInput>, JsonRejection>,
) -> Result<Json<ResumeHeader>, AppError> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let header = ResumeHeader::try_from(input)?;

    debug!(
        "Resume header for '{}' ({}) with {} links",
        header.name(),
        header.position(),
        header.links().len()
    );
    for link in header.links() {
        debug!("  {:?}: {}", link.platform(), link.url());
    }

    Ok(Json(header))
}
