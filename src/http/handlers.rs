use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::engine::MusicNotationEngine;
use crate::service::{TransposeRequest, TransposeResponse, TransposeService};

use super::error::HttpError;

pub const WELCOME_BANNER: &str = "Welcome to TransposeX Backend!";

pub async fn welcome() -> &'static str {
    WELCOME_BANNER
}

pub async fn transpose<E: MusicNotationEngine>(
    State(service): State<Arc<TransposeService<E>>>,
    payload: Result<Json<TransposeRequest>, JsonRejection>,
) -> Result<Json<TransposeResponse>, HttpError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected transpose body");
        HttpError::from(rejection)
    })?;

    tracing::info!(
        xml_bytes = request.xml.as_ref().map_or(0, String::len),
        interval = ?request.interval,
        "received transpose request"
    );

    // The pipeline is CPU-bound and may touch scratch files
    let result = tokio::task::spawn_blocking(move || service.handle(request))
        .await
        .map_err(|error| {
            tracing::error!(error = %error, "transpose task aborted");
            HttpError::Internal {
                message: format!("Transposition task failed: {}", error),
            }
        })?;

    match result {
        Ok(response) => {
            tracing::info!(
                transposed_bytes = response.transposed_xml.len(),
                "transpose request completed"
            );
            Ok(Json(response))
        }
        Err(error) => {
            tracing::error!(error = %error, kind = ?error.kind(), "transpose request failed");
            Err(error.into())
        }
    }
}
