use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::DbBooking;
use crate::store::BookingStore;

// Mock store for failure injection in tests
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn create_booking(
            &self,
            slot_date: DateTime<Utc>,
            slot_time: &str,
        ) -> eyre::Result<Option<DbBooking>>;

        async fn get_bookings_by_date_range(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBooking>>;

        async fn get_booking_by_slot(
            &self,
            slot_date: DateTime<Utc>,
            slot_time: &str,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}

/// In-memory [`BookingStore`] with the same conflict semantics as the
/// Postgres implementation: one booking per `(slot_date, slot_time)` pair,
/// duplicates answered with `None`.
pub struct InMemoryBookingStore {
    bookings: Mutex<Vec<DbBooking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create_booking(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> eyre::Result<Option<DbBooking>> {
        let mut bookings = self.bookings.lock().expect("bookings lock poisoned");

        let taken = bookings
            .iter()
            .any(|b| b.slot_date == slot_date && b.slot_time == slot_time);
        if taken {
            return Ok(None);
        }

        let booking = DbBooking {
            id: Uuid::new_v4(),
            slot_date,
            slot_time: slot_time.to_string(),
            booked_at: Utc::now(),
        };
        bookings.push(booking.clone());

        Ok(Some(booking))
    }

    async fn get_bookings_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> eyre::Result<Vec<DbBooking>> {
        let bookings = self.bookings.lock().expect("bookings lock poisoned");

        let mut matching: Vec<DbBooking> = bookings
            .iter()
            .filter(|b| b.slot_date >= start && b.slot_date <= end)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.slot_time.cmp(&b.slot_time));

        Ok(matching)
    }

    async fn get_booking_by_slot(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> eyre::Result<Option<DbBooking>> {
        let bookings = self.bookings.lock().expect("bookings lock poisoned");

        Ok(bookings
            .iter()
            .find(|b| b.slot_date == slot_date && b.slot_time == slot_time)
            .cloned())
    }
}
