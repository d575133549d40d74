use std::fmt;

use thiserror::Error;

/// Errors raised while reading from the climate database
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Database file does not exist
    #[error("Database not found: {0}")]
    NotFound(String),

    /// Could not open or borrow a connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query failed or returned rows of an unexpected shape
    #[error("Query error: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Connection(err.to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Which end of a date range a path segment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Start => f.write_str("start"),
            DateBound::End => f.write_str("end"),
        }
    }
}

/// Errors surfaced by the HTTP API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Path segment is not a real `mmddyyyy` calendar date (maps to HTTP 400)
    #[error("Invalid {bound} date format: {value}. Use mmddyyyy.")]
    InvalidDate { bound: DateBound, value: String },

    /// Backing store failed (maps to HTTP 500)
    #[error(transparent)]
    Store(#[from] StoreError),
}
