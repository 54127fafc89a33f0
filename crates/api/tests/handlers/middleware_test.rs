use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use slotbook_api::middleware::error_handling::{map_error, AppError};
use slotbook_core::errors::BookingError;

#[tokio::test]
async fn test_error_handling_validation() {
    let error = BookingError::Validation("Date and time are required".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = BookingError::Conflict("This slot is already booked".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_storage() {
    let error = BookingError::Storage("Failed to book slot".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_report_conversion() {
    let error: AppError = eyre::eyre!("unexpected failure").into();

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_body_is_the_wire_envelope() {
    let response = map_error(BookingError::Conflict(
        "This slot is already booked".to_string(),
    ));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value: serde_json::Value = serde_json::from_slice(&body).expect("Body is not JSON");

    assert_eq!(
        value,
        serde_json::json!({ "success": false, "message": "This slot is already booked" })
    );
}

#[tokio::test]
async fn test_internal_error_body_hides_the_cause() {
    let response = map_error(BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "connection reset by peer",
    ))));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value: serde_json::Value = serde_json::from_slice(&body).expect("Body is not JSON");

    assert_eq!(
        value,
        serde_json::json!({ "success": false, "message": "Internal server error" })
    );
}
