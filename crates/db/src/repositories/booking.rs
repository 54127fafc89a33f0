use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbBooking;

/// Inserts a booking for the given slot, unless that slot is already taken.
///
/// Creation and the duplicate check are a single conditional insert against
/// the `(slot_date, slot_time)` unique key, so two concurrent calls for the
/// same slot can never both succeed. Returns `None` when the slot was
/// already booked. `booked_at` is left to the database clock.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    slot_date: DateTime<Utc>,
    slot_time: &str,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating booking: id={}, slot_date={}, slot_time={}",
        id, slot_date, slot_time
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, slot_date, slot_time)
        VALUES ($1, $2, $3)
        ON CONFLICT (slot_date, slot_time) DO NOTHING
        RETURNING id, slot_date, slot_time, booked_at
        "#,
    )
    .bind(id)
    .bind(slot_date)
    .bind(slot_time)
    .fetch_optional(pool)
    .await?;

    if booking.is_some() {
        tracing::debug!("Booking created: id={}", id);
    } else {
        tracing::debug!(
            "Slot already booked: slot_date={}, slot_time={}",
            slot_date, slot_time
        );
    }

    Ok(booking)
}

pub async fn get_bookings_by_date_range(
    pool: &Pool<Postgres>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<DbBooking>> {
    tracing::debug!("Getting bookings in range: start={}, end={}", start, end);

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, slot_date, slot_time, booked_at
        FROM bookings
        WHERE slot_date >= $1 AND slot_date <= $2
        ORDER BY slot_time
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} bookings in range", bookings.len());
    Ok(bookings)
}

pub async fn get_booking_by_slot(
    pool: &Pool<Postgres>,
    slot_date: DateTime<Utc>,
    slot_time: &str,
) -> Result<Option<DbBooking>> {
    tracing::debug!(
        "Getting booking by slot: slot_date={}, slot_time={}",
        slot_date, slot_time
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, slot_date, slot_time, booked_at
        FROM bookings
        WHERE slot_date = $1 AND slot_time = $2
        "#,
    )
    .bind(slot_date)
    .bind(slot_time)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
