//! Validated recurrence rules.
//!
//! A [`HolidayRule`] carries only the fields its kind needs, so a rule
//! with a month on an Easter-relative holiday cannot be built.

use crate::error::{CalendarError, CalendarResult};

use super::holiday_definition::{HolidayDefinition, RecurrenceKind};

/// Largest Easter offset accepted, in either direction.
pub const MAX_EASTER_OFFSET_DAYS: i32 = 365;

/// The date rule of a holiday, one variant per recurrence kind.
///
/// # Example
///
/// ```
/// use holiday_calendar::models::{HolidayDefinition, HolidayRule, RecurrenceKind};
///
/// let definition = HolidayDefinition::fixed(1, "Navidad", RecurrenceKind::FixedDate, 12, 25);
/// let rule = HolidayRule::try_from(&definition).unwrap();
/// assert_eq!(rule, HolidayRule::FixedDate { month: 12, day: 25 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// Same month and day every year.
    FixedDate {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// Same month and day, moved to the next Monday unless already one.
    FixedDateObservedMonday {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// Easter Sunday plus a signed number of days.
    EasterRelative {
        /// Days to add to Easter Sunday.
        offset_days: i32,
    },
    /// Easter Sunday plus an offset, moved to the next Monday unless already one.
    EasterRelativeObservedMonday {
        /// Days to add to Easter Sunday.
        offset_days: i32,
    },
}

impl HolidayRule {
    /// Returns the recurrence kind of this rule.
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            HolidayRule::FixedDate { .. } => RecurrenceKind::FixedDate,
            HolidayRule::FixedDateObservedMonday { .. } => RecurrenceKind::FixedDateObservedMonday,
            HolidayRule::EasterRelative { .. } => RecurrenceKind::EasterRelative,
            HolidayRule::EasterRelativeObservedMonday { .. } => {
                RecurrenceKind::EasterRelativeObservedMonday
            }
        }
    }
}

impl TryFrom<&HolidayDefinition> for HolidayRule {
    type Error = CalendarError;

    fn try_from(definition: &HolidayDefinition) -> CalendarResult<Self> {
        let id = definition.id;
        let kind = definition.recurrence_kind().ok_or_else(|| {
            CalendarError::invalid_definition(
                id,
                format!("unknown recurrence kind {}", definition.kind),
            )
        })?;

        match kind {
            RecurrenceKind::FixedDate => {
                let (month, day) = month_and_day(definition)?;
                Ok(HolidayRule::FixedDate { month, day })
            }
            RecurrenceKind::FixedDateObservedMonday => {
                let (month, day) = month_and_day(definition)?;
                Ok(HolidayRule::FixedDateObservedMonday { month, day })
            }
            RecurrenceKind::EasterRelative => Ok(HolidayRule::EasterRelative {
                offset_days: easter_offset(definition)?,
            }),
            RecurrenceKind::EasterRelativeObservedMonday => {
                Ok(HolidayRule::EasterRelativeObservedMonday {
                    offset_days: easter_offset(definition)?,
                })
            }
        }
    }
}

/// Longest possible length of a month, counting February as 29 days.
fn max_day_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn month_and_day(definition: &HolidayDefinition) -> CalendarResult<(u32, u32)> {
    let id = definition.id;
    let month = definition
        .month
        .ok_or_else(|| CalendarError::invalid_definition(id, "missing month"))?;
    let day = definition
        .day
        .ok_or_else(|| CalendarError::invalid_definition(id, "missing day"))?;

    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_definition(
            id,
            format!("month {} out of range", month),
        ));
    }
    if !(1..=max_day_in_month(month)).contains(&day) {
        return Err(CalendarError::invalid_definition(
            id,
            format!("day {} out of range for month {}", day, month),
        ));
    }

    Ok((month, day))
}

fn easter_offset(definition: &HolidayDefinition) -> CalendarResult<i32> {
    let id = definition.id;
    let offset = definition
        .easter_offset_days
        .ok_or_else(|| CalendarError::invalid_definition(id, "missing Easter offset"))?;

    if !(-MAX_EASTER_OFFSET_DAYS..=MAX_EASTER_OFFSET_DAYS).contains(&offset) {
        return Err(CalendarError::invalid_definition(
            id,
            format!("Easter offset {} out of range", offset),
        ));
    }

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: i32, month: Option<u32>, day: Option<u32>, offset: Option<i32>) -> HolidayDefinition {
        HolidayDefinition {
            id: 10,
            name: "Test".to_string(),
            kind,
            month,
            day,
            easter_offset_days: offset,
        }
    }

    fn assert_invalid(definition: &HolidayDefinition, expected_message: &str) {
        match HolidayRule::try_from(definition) {
            Err(CalendarError::InvalidDefinition { id, message }) => {
                assert_eq!(id, 10);
                assert_eq!(message, expected_message);
            }
            other => panic!("Expected InvalidDefinition, got {:?}", other),
        }
    }

    #[test]
    fn test_each_kind_builds_matching_rule() {
        assert_eq!(
            HolidayRule::try_from(&raw(1, Some(1), Some(1), None)).unwrap(),
            HolidayRule::FixedDate { month: 1, day: 1 }
        );
        assert_eq!(
            HolidayRule::try_from(&raw(2, Some(1), Some(6), None)).unwrap(),
            HolidayRule::FixedDateObservedMonday { month: 1, day: 6 }
        );
        assert_eq!(
            HolidayRule::try_from(&raw(3, None, None, Some(-2))).unwrap(),
            HolidayRule::EasterRelative { offset_days: -2 }
        );
        assert_eq!(
            HolidayRule::try_from(&raw(4, None, None, Some(39))).unwrap(),
            HolidayRule::EasterRelativeObservedMonday { offset_days: 39 }
        );
    }

    #[test]
    fn test_fields_of_other_kinds_are_ignored() {
        let rule = HolidayRule::try_from(&raw(3, Some(12), Some(25), Some(0))).unwrap();
        assert_eq!(rule, HolidayRule::EasterRelative { offset_days: 0 });
    }

    #[test]
    fn test_unknown_kind_is_invalid() {
        assert_invalid(&raw(9, Some(12), Some(25), None), "unknown recurrence kind 9");
    }

    #[test]
    fn test_missing_month_is_invalid() {
        assert_invalid(&raw(1, None, Some(25), None), "missing month");
    }

    #[test]
    fn test_missing_day_is_invalid() {
        assert_invalid(&raw(2, Some(12), None, None), "missing day");
    }

    #[test]
    fn test_month_thirteen_is_invalid() {
        assert_invalid(&raw(1, Some(13), Some(1), None), "month 13 out of range");
    }

    #[test]
    fn test_april_31_is_invalid() {
        assert_invalid(&raw(1, Some(4), Some(31), None), "day 31 out of range for month 4");
    }

    #[test]
    fn test_february_29_is_accepted() {
        let rule = HolidayRule::try_from(&raw(1, Some(2), Some(29), None)).unwrap();
        assert_eq!(rule, HolidayRule::FixedDate { month: 2, day: 29 });
    }

    #[test]
    fn test_day_zero_is_invalid() {
        assert_invalid(&raw(1, Some(5), Some(0), None), "day 0 out of range for month 5");
    }

    #[test]
    fn test_missing_offset_is_invalid() {
        assert_invalid(&raw(4, None, None, None), "missing Easter offset");
    }

    #[test]
    fn test_offset_beyond_a_year_is_invalid() {
        assert_invalid(&raw(3, None, None, Some(400)), "Easter offset 400 out of range");
        assert_invalid(&raw(3, None, None, Some(-366)), "Easter offset -366 out of range");
    }

    #[test]
    fn test_rule_reports_kind() {
        let rule = HolidayRule::EasterRelativeObservedMonday { offset_days: 60 };
        assert_eq!(rule.kind(), RecurrenceKind::EasterRelativeObservedMonday);
    }
}
