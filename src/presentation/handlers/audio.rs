use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::ScratchStoreError;
use crate::domain::ScratchFileName;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const NOT_FOUND_MESSAGE: &str = "Audio file not found";

/// Serves synthesized audio. Only names the service generates are looked up,
/// so the path parameter cannot address anything else in the scratch store.
#[tracing::instrument(skip(state))]
pub async fn audio_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let Ok(name) = ScratchFileName::parse(&filename) else {
        tracing::debug!("Rejected malformed audio file name");
        return error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE);
    };

    match state.scratch_store.fetch(&name.path()).await {
        Ok(data) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, name.format().mime_type())],
            data,
        )
            .into_response(),
        Err(ScratchStoreError::NotFound(_)) => {
            tracing::debug!("Audio file not found");
            error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio file");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
