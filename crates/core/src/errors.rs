use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// User-facing message for the HTTP error body, without the category
    /// prefix that the `Display` form carries.
    pub fn message(&self) -> &str {
        match self {
            BookingError::Validation(message)
            | BookingError::Conflict(message)
            | BookingError::Storage(message) => message,
            BookingError::Internal(_) => "Internal server error",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
