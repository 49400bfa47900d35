//! Core data models for the holiday calendar engine.
//!
//! This module contains the stored holiday definition, the validated
//! recurrence rule and the resolved holiday returned by queries.

mod holiday_definition;
mod holiday_rule;
mod resolved_holiday;

pub use holiday_definition::{HolidayDefinition, RecurrenceKind};
pub use holiday_rule::{HolidayRule, MAX_EASTER_OFFSET_DAYS};
pub use resolved_holiday::ResolvedHoliday;
