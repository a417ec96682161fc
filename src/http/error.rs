//! Error → HTTP response mapping
//!
//! Errors are always answered with a plain-text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::CadastroError;

impl CadastroError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CadastroError::NotFound(_) | CadastroError::EmptyResultSet => StatusCode::NOT_FOUND,
            CadastroError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CadastroError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
