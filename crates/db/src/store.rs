use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use crate::models::DbBooking;
use crate::repositories::booking;
use crate::DbPool;

/// Storage client for the bookings collection.
///
/// Handlers receive this as an injected dependency instead of a raw pool, so
/// the HTTP layer can run against [`crate::mock::store::InMemoryBookingStore`]
/// in tests and against [`PgBookingStore`] in production.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Atomically books the slot if it is free. `None` means the slot was
    /// already taken.
    async fn create_booking(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> Result<Option<DbBooking>>;

    /// All bookings whose `slot_date` falls inside the inclusive range,
    /// ordered by slot label.
    async fn get_bookings_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DbBooking>>;

    /// Exact-slot lookup by the `(slot_date, slot_time)` composite key.
    async fn get_booking_by_slot(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> Result<Option<DbBooking>>;
}

/// [`BookingStore`] backed by PostgreSQL through the repository functions.
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn create_booking(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> Result<Option<DbBooking>> {
        booking::create_booking(&self.pool, slot_date, slot_time).await
    }

    async fn get_bookings_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DbBooking>> {
        booking::get_bookings_by_date_range(&self.pool, start, end).await
    }

    async fn get_booking_by_slot(
        &self,
        slot_date: DateTime<Utc>,
        slot_time: &str,
    ) -> Result<Option<DbBooking>> {
        booking::get_booking_by_slot(&self.pool, slot_date, slot_time).await
    }
}
