//! Error types for the holiday calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving holidays or
//! talking to the holiday store.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the holiday calendar engine.
///
/// All operations in the engine return this error type. None of them
/// recover locally; failures always reach the caller.
///
/// # Example
///
/// ```
/// use holiday_calendar::error::CalendarError;
///
/// let error = CalendarError::NotFound { id: 42 };
/// assert_eq!(error.to_string(), "Holiday not found: 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A stored holiday record has an unrecognized recurrence kind or an
    /// out-of-range month, day or Easter offset.
    #[error("Invalid holiday definition {id}: {message}")]
    InvalidDefinition {
        /// The ID of the offending definition.
        id: i64,
        /// A description of what made the definition invalid.
        message: String,
    },

    /// The holiday store could not be reached or returned an error.
    #[error("Holiday store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// A single-record lookup found no matching record.
    #[error("Holiday not found: {id}")]
    NotFound {
        /// The ID that was looked up.
        id: i64,
    },

    /// The requested year cannot be represented as a calendar date.
    #[error("Year out of range: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// Day arithmetic left the representable date range.
    #[error("Adding {days} days to {date} is out of range")]
    DateOutOfRange {
        /// The starting date.
        date: NaiveDate,
        /// The number of days that was added.
        days: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl CalendarError {
    /// Builds a [`CalendarError::InvalidDefinition`] for the given record.
    pub fn invalid_definition(id: i64, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            id,
            message: message.into(),
        }
    }

    /// Builds a [`CalendarError::StoreUnavailable`] from any displayable cause.
    pub fn store_unavailable(cause: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable {
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
