//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the SlotBook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error envelope across the
//! entire API.
//!
//! Every error response uses the same body shape as success responses:
//! `{ "success": false, "message": "..." }`, where the message is the bare
//! user-facing text without the internal error-category prefix.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific [`BookingError`] instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```
/// use axum::response::IntoResponse;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::errors::BookingError;
///
/// let error = AppError(BookingError::Conflict(
///     "This slot is already booked".to_string(),
/// ));
/// let response = error.into_response();
/// assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the user-facing message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the user-facing message and format as JSON
        let message = self.0.message().to_string();
        let body = Json(json!({ "success": false, "message": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, BookingError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Reports reaching a handler boundary without an assigned category are
/// treated as internal errors; their cause is preserved for logging but the
/// response carries only the generic message.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Internal(err.into()))
    }
}

/// Maps a BookingError to an HTTP response
///
/// # Example
///
/// ```
/// use slotbook_api::middleware::error_handling::map_error;
/// use slotbook_core::errors::BookingError;
///
/// let response = map_error(BookingError::Validation(
///     "Date and time are required".to_string(),
/// ));
/// assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
/// ```
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
