//! Axum route handlers for the PDF rendering API.
//!
//! Layout and serialization are CPU-bound, so each handler runs them inside
//! `tokio::task::spawn_blocking` and returns the finished bytes with download
//! headers. Empty input is not an error: the renderers produce a minimal
//! one-page document.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::layout::page::LayoutDocument;
use crate::layout::pdf;
use crate::models::profile::UserProfile;
use crate::models::resume::StructuredResume;
use crate::render::{cover_letter, resume_markdown, resume_structured};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StructuredResumeRequest {
    pub profile: UserProfile,
    pub resume: StructuredResume,
    pub filename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkdownRequest {
    pub content: String,
    pub filename: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pdf/resume
///
/// Renders a structured resume to PDF.
pub async fn handle_structured_resume(
    Json(request): Json<StructuredResumeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let filename = request.filename.unwrap_or_else(|| "resume.pdf".to_string());

    let bytes = render_blocking(move || {
        resume_structured::build(&request.profile, &request.resume)
    })
    .await?;

    Ok(pdf_response(bytes, &filename, "structured resume"))
}

/// POST /api/v1/pdf/resume/markdown
///
/// Renders a markdown resume (Harvard serif style) to PDF.
pub async fn handle_markdown_resume(
    State(state): State<AppState>,
    Json(request): Json<MarkdownRequest>,
) -> Result<impl IntoResponse, AppError> {
    let filename = request.filename.unwrap_or_else(|| "Resume.pdf".to_string());
    let threshold = state.config.contact_line_threshold;
    let page_size = state.config.page_size;

    let bytes = render_blocking(move || {
        resume_markdown::build(&request.content, threshold, page_size)
    })
    .await?;

    Ok(pdf_response(bytes, &filename, "markdown resume"))
}

/// POST /api/v1/pdf/cover-letter
///
/// Renders a markdown cover letter to PDF.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<MarkdownRequest>,
) -> Result<impl IntoResponse, AppError> {
    let filename = request
        .filename
        .unwrap_or_else(|| "CoverLetter.pdf".to_string());
    let page_size = state.config.page_size;

    let bytes = render_blocking(move || cover_letter::build(&request.content, page_size)).await?;

    Ok(pdf_response(bytes, &filename, "cover letter"))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Runs layout and serialization on the blocking pool.
async fn render_blocking<F>(build: F) -> Result<(usize, Bytes), AppError>
where
    F: FnOnce() -> LayoutDocument + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || {
        let doc = build();
        let pages = doc.pages.len();
        pdf::serialize(&doc).map(|bytes| (pages, Bytes::from(bytes)))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?;

    result.map_err(|e| AppError::Render(e.to_string()))
}

fn pdf_response((pages, bytes): (usize, Bytes), filename: &str, kind: &str) -> impl IntoResponse {
    info!(pages, bytes = bytes.len(), filename, "Rendered {kind}");
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
}
