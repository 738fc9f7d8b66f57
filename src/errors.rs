use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Failure of a single booking API call.
///
/// Each call owns its outcome, so concurrent calls through one client never
/// overwrite each other's error.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The request never produced a response (connection refused, DNS, ...).
    Transport(String),
    /// The API answered with a non-success status.
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Server-provided `detail`, or the operation's generic message.
        detail: String,
    },
    /// A success response whose body did not match the expected shape.
    Decode(String),
}

impl BookingError {
    /// Text suitable for showing next to the form that triggered the call.
    pub fn message(&self) -> &str {
        match self {
            BookingError::Transport(msg) => msg,
            BookingError::Api { detail, .. } => detail,
            BookingError::Decode(msg) => msg,
        }
    }

    /// HTTP status of the failed call, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BookingError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BookingError::Decode(err.to_string())
        } else {
            BookingError::Transport(err.to_string())
        }
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Bad request error (invalid input).
    BadRequest(String),
    /// Error interacting with the booking API.
    ExternalApiError(BookingError),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::ExternalApiError(e) => write!(f, "Booking API error: {}", e),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Maps each variant to a status code and a JSON `{"error": ...}` body.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalApiError(e) => {
                tracing::error!("Booking API error: {}", e);
                // Client errors from the booking API are the caller's to fix.
                match e.status() {
                    Some(code) if (400..500).contains(&code) => (
                        StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST),
                        e.message().to_string(),
                    ),
                    _ => (StatusCode::BAD_GATEWAY, "Booking service error".to_string()),
                }
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::ExternalApiError(err)
    }
}
