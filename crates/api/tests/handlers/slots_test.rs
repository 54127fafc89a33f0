use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::errors::BookingError;
use slotbook_core::models::booking::BookSlotRequest;
use slotbook_core::slots::{canonical_slots, day_start, parse_calendar_date};
use slotbook_db::mock::store::MockBookingStore;
use slotbook_db::store::BookingStore;
use std::sync::Arc;

use crate::test_utils::{state_with_store, TestContext};
use slotbook_api::handlers::bookings::book_slot;
use slotbook_api::handlers::slots::get_available_slots;

#[tokio::test]
async fn test_get_available_slots_empty_day_returns_all() {
    let ctx = TestContext::new();

    let Json(response) = get_available_slots(State(ctx.build_state()), Path("2025-03-10".to_string()))
        .await
        .expect("Expected slots for an empty day");

    assert!(response.success);
    assert_eq!(response.slots, canonical_slots());
}

#[tokio::test]
async fn test_get_available_slots_excludes_booked_in_canonical_order() {
    let ctx = TestContext::new();
    let date = parse_calendar_date("2025-03-10").unwrap();
    ctx.store.create_booking(day_start(date), "09:00").await.unwrap();
    ctx.store.create_booking(day_start(date), "12:30").await.unwrap();

    let Json(response) = get_available_slots(State(ctx.build_state()), Path("2025-03-10".to_string()))
        .await
        .expect("Expected slots for a partially booked day");

    let expected: Vec<String> = canonical_slots()
        .into_iter()
        .filter(|slot| slot != "09:00" && slot != "12:30")
        .collect();
    assert_eq!(response.slots, expected);
    assert_eq!(response.slots.len(), 14);
}

#[tokio::test]
async fn test_get_available_slots_ignores_bookings_on_other_days() {
    let ctx = TestContext::new();
    let monday = parse_calendar_date("2025-03-10").unwrap();
    ctx.store.create_booking(day_start(monday), "09:00").await.unwrap();

    let Json(response) = get_available_slots(State(ctx.build_state()), Path("2025-03-11".to_string()))
        .await
        .expect("Expected slots for the unbooked day");

    assert_eq!(response.slots.len(), 16);
}

#[tokio::test]
async fn test_booked_slot_disappears_from_availability() {
    let ctx = TestContext::new();
    let request = BookSlotRequest {
        date: Some("2025-03-10".to_string()),
        time: Some("10:30".to_string()),
    };

    let Json(booked) = book_slot(State(ctx.build_state()), Json(request))
        .await
        .expect("Expected booking to succeed");
    assert!(booked.success);

    let Json(response) = get_available_slots(State(ctx.build_state()), Path("2025-03-10".to_string()))
        .await
        .expect("Expected slots after booking");

    assert_eq!(response.slots.len(), 15);
    assert!(!response.slots.contains(&"10:30".to_string()));
}

#[rstest]
#[case("not-a-date")]
#[case("2025-3-10")]
#[case("+262142-12-31")]
#[tokio::test]
async fn test_get_available_slots_invalid_date(#[case] date: &str) {
    let ctx = TestContext::new();

    let result = get_available_slots(State(ctx.build_state()), Path(date.to_string())).await;

    match result.unwrap_err().0 {
        BookingError::Validation(message) => {
            assert_eq!(message, "Invalid date format (expected YYYY-MM-DD)")
        }
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_get_available_slots_storage_failure() {
    let mut mock = MockBookingStore::new();
    mock.expect_get_bookings_by_date_range()
        .returning(|_, _| Err(eyre::eyre!("connection refused")));

    let state = state_with_store(Arc::new(mock));
    let result = get_available_slots(State(state), Path("2025-03-10".to_string())).await;

    match result.unwrap_err().0 {
        BookingError::Storage(message) => assert_eq!(message, "Failed to fetch available slots"),
        e => panic!("Expected Storage error, got: {:?}", e),
    }
}
