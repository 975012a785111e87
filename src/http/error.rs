use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::service::{ErrorKind, TransposeError};

/// Error responses, always rendered as `{ "error": message }`
#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String },
    /// Body rejected before reaching the service, with axum's own status
    Rejected { status: StatusCode, message: String },
    Internal { message: String },
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::Rejected { status, .. } => *status,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::BadRequest { message }
            | HttpError::Rejected { message, .. }
            | HttpError::Internal { message } => message,
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

impl From<TransposeError> for HttpError {
    fn from(error: TransposeError) -> Self {
        let message = error.to_string();
        match error.kind() {
            ErrorKind::MissingField | ErrorKind::InvalidInterval => HttpError::BadRequest { message },
            ErrorKind::EngineFailure => HttpError::Internal { message },
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON of the wrong shape is a bad request like any other
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => HttpError::BadRequest {
                message: rejection.body_text(),
            },
            _ => HttpError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            },
        }
    }
}
