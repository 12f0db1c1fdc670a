use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::upstream::UpstreamError;

/// Standard error response format for all API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Raw upstream body, present only when the upstream itself answered with an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error taxonomy shared by all three proxy handlers.
///
/// Every variant resolves at the handler boundary into a JSON body and a
/// status code; nothing propagates past the HTTP response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query parameter is missing or empty
    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("API key not configured")]
    ApiKeyNotConfigured,

    #[error("Failed to connect to the {0} service")]
    UpstreamUnreachable(&'static str),

    /// The upstream answered with a non-200 status; mirrored to the client
    /// together with the raw upstream body
    #[error("Error from the {service} service")]
    Upstream {
        service: &'static str,
        status: u16,
        details: String,
    },

    #[error("Failed to parse the {0} response")]
    ParseFailure(&'static str),

    #[error("Failed to read the {0} response")]
    ReadFailure(&'static str),
}

impl ApiError {
    /// Attach a handler-specific service label to an upstream failure
    pub fn from_upstream(service: &'static str, err: UpstreamError) -> Self {
        match err {
            UpstreamError::ApiKeyNotConfigured => Self::ApiKeyNotConfigured,
            UpstreamError::Unreachable(_) => Self::UpstreamUnreachable(service),
            UpstreamError::Status { status, body } => Self::Upstream {
                service,
                status,
                details: body,
            },
            UpstreamError::Read(_) => Self::ReadFailure(service),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::ParseFailure(_) | Self::ReadFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::error!(error = %message, status = %status, "API error");

        let details = match self {
            ApiError::Upstream { details, .. } => Some(details),
            _ => None,
        };

        (
            status,
            Json(ErrorResponse {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}
