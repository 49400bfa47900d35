//! Day arithmetic and the observed-Monday rule.
//!
//! These helpers move a calendar date by whole days. They never panic:
//! leaving the representable date range is reported as
//! [`CalendarError::DateOutOfRange`].

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

/// Adds `days` (possibly negative) to `date`, rolling over months and years.
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::add_days;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
/// assert_eq!(add_days(date, 3).unwrap(), NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
/// assert_eq!(add_days(date, -30).unwrap(), NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
/// ```
pub fn add_days(date: NaiveDate, days: i64) -> CalendarResult<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };

    shifted.ok_or(CalendarError::DateOutOfRange { date, days })
}

/// Returns `date` if it is a Monday, otherwise the following Monday.
///
/// The shift is `(Monday - weekday + 7) mod 7` days, so it is always
/// between 0 and 6.
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::next_monday_on_or_after;
/// use chrono::NaiveDate;
///
/// // 2025-01-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(next_monday_on_or_after(monday).unwrap(), monday);
///
/// // 2025-03-19 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2025, 3, 19).unwrap();
/// assert_eq!(
///     next_monday_on_or_after(wednesday).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()
/// );
/// ```
pub fn next_monday_on_or_after(date: NaiveDate) -> CalendarResult<NaiveDate> {
    let days_until_monday = (7 - date.weekday().num_days_from_monday()) % 7;
    add_days(date, i64::from(days_until_monday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_zero_days_is_identity() {
        let date = make_date("2025-06-15");
        assert_eq!(add_days(date, 0).unwrap(), date);
    }

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(
            add_days(make_date("2025-04-20"), 43).unwrap(),
            make_date("2025-06-02")
        );
    }

    #[test]
    fn test_add_days_crosses_leap_day() {
        assert_eq!(
            add_days(make_date("2024-02-28"), 1).unwrap(),
            make_date("2024-02-29")
        );
        assert_eq!(
            add_days(make_date("2025-02-28"), 1).unwrap(),
            make_date("2025-03-01")
        );
    }

    #[test]
    fn test_subtract_days_crosses_year() {
        assert_eq!(
            add_days(make_date("2025-01-02"), -3).unwrap(),
            make_date("2024-12-30")
        );
    }

    #[test]
    fn test_add_days_past_max_date_is_out_of_range() {
        let result = add_days(NaiveDate::MAX, 1);
        assert_eq!(
            result,
            Err(CalendarError::DateOutOfRange {
                date: NaiveDate::MAX,
                days: 1
            })
        );
    }

    #[test]
    fn test_subtract_days_before_min_date_is_out_of_range() {
        assert!(add_days(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn test_monday_is_unchanged() {
        let monday = make_date("2025-01-06");
        assert_eq!(next_monday_on_or_after(monday).unwrap(), monday);
    }

    #[test]
    fn test_tuesday_moves_six_days() {
        // 2025-11-11 is a Tuesday
        assert_eq!(
            next_monday_on_or_after(make_date("2025-11-11")).unwrap(),
            make_date("2025-11-17")
        );
    }

    #[test]
    fn test_sunday_moves_one_day() {
        // 2025-06-29 is a Sunday
        assert_eq!(
            next_monday_on_or_after(make_date("2025-06-29")).unwrap(),
            make_date("2025-06-30")
        );
    }

    #[test]
    fn test_saturday_moves_across_month() {
        // 2025-05-31 is a Saturday
        assert_eq!(
            next_monday_on_or_after(make_date("2025-05-31")).unwrap(),
            make_date("2025-06-02")
        );
    }

    #[test]
    fn test_late_december_moves_into_next_year() {
        // 2025-12-31 is a Wednesday
        assert_eq!(
            next_monday_on_or_after(make_date("2025-12-31")).unwrap(),
            make_date("2026-01-05")
        );
    }

    proptest! {
        #[test]
        fn prop_next_monday_is_nearest_monday(days_from_epoch in 0i64..80_000) {
            let date = add_days(make_date("1900-01-01"), days_from_epoch).unwrap();
            let monday = next_monday_on_or_after(date).unwrap();
            let shift = (monday - date).num_days();

            prop_assert_eq!(monday.weekday(), Weekday::Mon);
            prop_assert!((0..=6).contains(&shift));
            if date.weekday() == Weekday::Mon {
                prop_assert_eq!(monday, date);
            }
        }

        #[test]
        fn prop_add_days_is_reversible(days_from_epoch in 0i64..80_000, n in -1000i64..1000) {
            let date = add_days(make_date("1900-01-01"), days_from_epoch).unwrap();
            let shifted = add_days(date, n).unwrap();

            prop_assert_eq!((shifted - date).num_days(), n);
            prop_assert_eq!(add_days(shifted, -n).unwrap(), date);
        }
    }
}
