//! # Availability Handlers
//!
//! Computes which half-hour slots remain bookable on a given calendar date.
//!
//! The computation is a set subtraction: generate the canonical slot list,
//! fetch every booking whose stored day-start timestamp falls inside the
//! requested date's window, then drop the booked labels while keeping the
//! canonical order. Labels outside the canonical set never appear in the
//! output, whatever the store contains.

use axum::{
    extract::{Path, State},
    Json,
};
use slotbook_core::{
    errors::BookingError,
    models::booking::AvailableSlotsResponse,
    slots::{canonical_slots, day_end, day_start, parse_calendar_date},
};
use std::{collections::HashSet, sync::Arc};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the open slots for a date.
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/:date
/// ```
///
/// `date` must be a `YYYY-MM-DD` string; anything else is rejected as a
/// validation error. Storage failures are logged with their cause and
/// surfaced as a generic fetch failure, so the caller never sees
/// driver-level detail.
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let date = parse_calendar_date(&date).ok_or_else(|| {
        BookingError::Validation("Invalid date format (expected YYYY-MM-DD)".to_string())
    })?;

    let bookings = state
        .store
        .get_bookings_by_date_range(day_start(date), day_end(date))
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch bookings for {}: {}", date, err);
            BookingError::Storage("Failed to fetch available slots".to_string())
        })?;

    let booked: HashSet<String> = bookings.into_iter().map(|b| b.slot_time).collect();
    let slots = canonical_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect();

    Ok(Json(AvailableSlotsResponse {
        success: true,
        slots,
    }))
}
