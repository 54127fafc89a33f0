use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted slot reservation. `slot_date` always holds the day-start
/// timestamp of the booked calendar day, never an intra-day time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub slot_date: DateTime<Utc>,
    pub slot_time: String,
    pub booked_at: DateTime<Utc>,
}
