//! Configuration types for holiday calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::HolidayDefinition;

/// Metadata about a holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Short code for the calendar (e.g., "CO").
    pub code: String,
    /// The human-readable name of the calendar.
    pub name: String,
    /// The country the calendar applies to.
    pub country: String,
    /// The legal source of the holidays.
    pub source: String,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday definitions, in the order they should be stored.
    pub holidays: Vec<HolidayDefinition>,
}

/// The complete calendar configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Calendar metadata.
    metadata: CalendarMetadata,
    /// Holiday definitions in file order.
    holidays: Vec<HolidayDefinition>,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    pub fn new(metadata: CalendarMetadata, holidays: Vec<HolidayDefinition>) -> Self {
        Self { metadata, holidays }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns all holiday definitions.
    pub fn holidays(&self) -> &[HolidayDefinition] {
        &self.holidays
    }
}
