use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use flightquote_export::pdf::{CONTENT_TYPE, SUGGESTED_FILENAME};

use crate::error::ApiError;
use crate::extract::QuotationRequest;
use crate::state::AppState;

/// Render the posted quotation and return it as a PDF download.
pub async fn generate_pdf(
    State(state): State<AppState>,
    request: QuotationRequest,
) -> Result<Response, ApiError> {
    let theme = request.theme.unwrap_or(state.theme);
    let quotation = request.quotation;
    let assets = Arc::clone(&state.assets);

    // Layout is CPU-bound and synchronous.
    let bytes = tokio::task::spawn_blocking(move || {
        flightquote_export::pdf::generate_pdf(&quotation, &theme.styles(), &assets)
    })
    .await??;

    let headers = [
        (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={SUGGESTED_FILENAME}"),
        ),
    ];
    Ok((headers, bytes).into_response())
}
