//! Easter date computation.
//!
//! Movable feasts are anchored on Easter Sunday. This module computes it
//! with Gauss's algorithm, using the century constants for 1900-2099.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};

/// Gauss's `M` constant for the Gregorian years 1900-2099.
const GAUSS_M: i32 = 24;

/// Gauss's `N` constant for the Gregorian years 1900-2099.
const GAUSS_N: i32 = 5;

/// Computes the date of Western Easter Sunday for `year`.
///
/// Uses Gauss's algorithm:
///
/// ```text
/// a = year mod 19
/// b = year mod 4
/// c = year mod 7
/// d = (19a + M) mod 30
/// e = (2b + 4c + 6d + N) mod 7
/// Easter = March (22 + d + e), rolling into April past the 31st
/// ```
///
/// with the two exceptions of the method: `d = 29, e = 6` gives April 19,
/// and `d = 28, e = 6, a > 10` gives April 18. The constants are exact for
/// 1900-2099; other years get the same formula.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` cannot be represented
/// as a [`NaiveDate`].
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::compute_easter_sunday;
/// use chrono::NaiveDate;
///
/// let easter = compute_easter_sunday(2025).unwrap();
/// assert_eq!(easter, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn compute_easter_sunday(year: i32) -> CalendarResult<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let d = (19 * a + GAUSS_M) % 30;
    let e = (2 * b + 4 * c + 6 * d + GAUSS_N) % 7;

    let (month, day) = if d == 29 && e == 6 {
        (4, 19)
    } else if d == 28 && e == 6 && a > 10 {
        (4, 18)
    } else {
        let march_day = 22 + d + e;
        if march_day > 31 {
            (4, march_day - 31)
        } else {
            (3, march_day)
        }
    };

    // month and day are within 3..=4 and 1..=31 by construction
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(CalendarError::InvalidYear { year })
}

/// Returns the start of Holy Week (Palm Sunday) for `year`.
///
/// Palm Sunday is the Sunday before Easter Sunday.
///
/// # Example
///
/// ```
/// use holiday_calendar::calculation::holy_week_start;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     holy_week_start(2025).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 13).unwrap()
/// );
/// ```
pub fn holy_week_start(year: i32) -> CalendarResult<NaiveDate> {
    let easter = compute_easter_sunday(year)?;
    super::day_shift::add_days(easter, -7)
}
