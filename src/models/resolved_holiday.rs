//! Resolved holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A holiday pinned to a concrete date in one year.
///
/// Produced fresh by every query and never persisted.
///
/// # Example
///
/// ```
/// use holiday_calendar::models::ResolvedHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = ResolvedHoliday {
///     name: "Navidad".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
/// };
/// assert!(holiday.falls_on(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    /// Name copied from the source definition.
    pub name: String,
    /// Calendar date for the requested year.
    pub date: NaiveDate,
}

impl ResolvedHoliday {
    /// Returns true if this holiday falls on `date`.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
