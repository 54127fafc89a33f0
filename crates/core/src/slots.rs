//! # Slot Computation
//!
//! Canonical half-hour slot generation and calendar-day helpers used by both
//! the availability and booking flows.
//!
//! A bookable day runs from 09:00 to 17:00 and divides into 16 half-hour
//! slots, each labelled by its start time ("09:00" through "16:30"). Labels
//! are plain strings on the wire and in storage; the list produced by
//! [`canonical_slots`] is the single source of truth for which labels exist
//! and in which order they are reported.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// First bookable hour of the day (inclusive).
pub const OPENING_HOUR: u32 = 9;

/// Hour at which booking closes (exclusive).
pub const CLOSING_HOUR: u32 = 17;

/// Number of half-hour slots between [`OPENING_HOUR`] and [`CLOSING_HOUR`].
pub const SLOTS_PER_DAY: usize = ((CLOSING_HOUR - OPENING_HOUR) * 2) as usize;

/// Generates the canonical ordered list of slot labels for a day.
///
/// Every day has the same 16 slots: two per hour from 09:00 up to but not
/// including 17:00, in chronological order. The availability endpoint
/// preserves this order when it filters out booked labels.
pub fn canonical_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(SLOTS_PER_DAY);
    for hour in OPENING_HOUR..CLOSING_HOUR {
        slots.push(format!("{:02}:00", hour));
        slots.push(format!("{:02}:30", hour));
    }
    slots
}

/// Parses a `YYYY-MM-DD` calendar date string.
///
/// Returns `None` for anything that is not a real calendar date in the
/// zero-padded four-digit-year form, so callers can reject bad input up
/// front instead of issuing queries over a nonsense time range. chrono's
/// `%Y` would also parse sign-prefixed extended years ("+262142-12-31")
/// whose day windows overflow the datetime range; those are malformed
/// input here like any other.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    // Ten characters starting with a digit; an unsigned %Y year is capped
    // at four digits, so together with full-consumption parsing this pins
    // the exact YYYY-MM-DD shape
    if input.len() != 10 || !input.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// UTC timestamp at 00:00:00 of the given date.
///
/// Bookings store their calendar day as this day-start timestamp, so it is
/// both the lower bound of the availability range query and the exact value
/// written when a slot is booked.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// UTC timestamp at 23:59:59 of the given date.
///
/// The day window is inclusive on both ends; paired with [`day_start`] it
/// covers every booking stored for the date.
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    day_start(date) + Duration::days(1) - Duration::seconds(1)
}
