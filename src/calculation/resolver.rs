//! Holiday resolution.
//!
//! Turns a holiday rule and a year into a concrete calendar date. Every
//! function here is pure: the same rule and year always give the same date.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{HolidayDefinition, HolidayRule, ResolvedHoliday};

use super::day_shift::{add_days, next_monday_on_or_after};
use super::easter::compute_easter_sunday;

/// Resolves a validated rule to its date in `year`.
///
/// | Rule | Date |
/// |---|---|
/// | `FixedDate` | `(year, month, day)` |
/// | `FixedDateObservedMonday` | next Monday on or after `(year, month, day)` |
/// | `EasterRelative` | Easter Sunday + offset |
/// | `EasterRelativeObservedMonday` | next Monday on or after Easter Sunday + offset |
///
/// # Errors
///
/// - [`CalendarError::InvalidYear`] if `year` cannot hold a calendar date
/// - [`CalendarError::InvalidDefinition`] carrying `id` if a fixed date does
///   not exist in `year` (February 29 in a common year)
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::resolve_rule;
/// use holiday_calendar::models::HolidayRule;
/// use chrono::NaiveDate;
///
/// let ascension = HolidayRule::EasterRelativeObservedMonday { offset_days: 39 };
/// assert_eq!(
///     resolve_rule(0, &ascension, 2025).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
/// );
/// ```
pub fn resolve_rule(id: i64, rule: &HolidayRule, year: i32) -> CalendarResult<NaiveDate> {
    match *rule {
        HolidayRule::FixedDate { month, day } => fixed_date(id, year, month, day),
        HolidayRule::FixedDateObservedMonday { month, day } => {
            next_monday_on_or_after(fixed_date(id, year, month, day)?)
        }
        HolidayRule::EasterRelative { offset_days } => easter_relative(year, offset_days),
        HolidayRule::EasterRelativeObservedMonday { offset_days } => {
            next_monday_on_or_after(easter_relative(year, offset_days)?)
        }
    }
}

/// Resolves a stored definition to a [`ResolvedHoliday`] in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDefinition`] if the definition has an
/// unrecognized kind, is missing a field its kind needs, or names a date
/// that does not exist in `year`. Returns [`CalendarError::InvalidYear`]
/// if `year` itself is out of range.
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::resolve;
/// use holiday_calendar::models::{HolidayDefinition, RecurrenceKind};
/// use chrono::NaiveDate;
///
/// let navidad = HolidayDefinition::fixed(1, "Navidad", RecurrenceKind::FixedDate, 12, 25);
/// let holiday = resolve(&navidad, 2024).unwrap();
/// assert_eq!(holiday.name, "Navidad");
/// assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// ```
pub fn resolve(definition: &HolidayDefinition, year: i32) -> CalendarResult<ResolvedHoliday> {
    let rule = HolidayRule::try_from(definition)?;
    let date = resolve_rule(definition.id, &rule, year)?;

    Ok(ResolvedHoliday {
        name: definition.name.clone(),
        date,
    })
}

fn fixed_date(id: i64, year: i32, month: u32, day: u32) -> CalendarResult<NaiveDate> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(CalendarError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::invalid_definition(
            id,
            format!("{:02}-{:02} does not exist in {}", month, day, year),
        )
    })
}

fn easter_relative(year: i32, offset_days: i32) -> CalendarResult<NaiveDate> {
    add_days(compute_easter_sunday(year)?, i64::from(offset_days))
}
