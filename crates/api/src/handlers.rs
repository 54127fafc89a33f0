pub mod bookings;
pub mod slots;
