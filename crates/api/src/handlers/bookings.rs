use axum::{extract::State, Json};
use slotbook_core::{
    errors::BookingError,
    models::booking::{BookSlotRequest, BookingResponse},
    slots::{day_start, parse_calendar_date},
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // Both fields must be present and non-empty
    let (date, time) = match (payload.date.as_deref(), payload.time.as_deref()) {
        (Some(date), Some(time)) if !date.is_empty() && !time.is_empty() => (date, time),
        _ => {
            return Err(AppError(BookingError::Validation(
                "Date and time are required".to_string(),
            )));
        }
    };

    let date = parse_calendar_date(date).ok_or_else(|| {
        BookingError::Validation("Invalid date format (expected YYYY-MM-DD)".to_string())
    })?;

    // Conditional write: the store reports an already-taken slot as None
    // instead of creating a second record
    let created = state
        .store
        .create_booking(day_start(date), time)
        .await
        .map_err(|err| {
            tracing::error!("Failed to create booking for {} {}: {}", date, time, err);
            BookingError::Storage("Failed to book slot".to_string())
        })?;

    match created {
        Some(_) => Ok(Json(BookingResponse {
            success: true,
            message: "Slot booked successfully".to_string(),
        })),
        None => Err(AppError(BookingError::Conflict(
            "This slot is already booked".to_string(),
        ))),
    }
}
