//! Holiday definition model and recurrence kinds.
//!
//! A [`HolidayDefinition`] is the record as the holiday store keeps it:
//! a numeric kind code plus the optional fields each kind may use.

use serde::{Deserialize, Serialize};

/// The classification that decides which date rule applies to a holiday.
///
/// Each kind has a stable numeric code, which is what the store persists.
///
/// # Example
///
/// ```
/// use holiday_calendar::models::RecurrenceKind;
///
/// assert_eq!(RecurrenceKind::from_code(2), Some(RecurrenceKind::FixedDateObservedMonday));
/// assert_eq!(RecurrenceKind::EasterRelative.code(), 3);
/// assert_eq!(RecurrenceKind::from_code(9), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceKind {
    /// Same month and day every year.
    FixedDate,
    /// Same month and day, observed on the next Monday.
    FixedDateObservedMonday,
    /// A fixed number of days from Easter Sunday.
    EasterRelative,
    /// A fixed number of days from Easter Sunday, observed on the next Monday.
    EasterRelativeObservedMonday,
}

impl RecurrenceKind {
    /// All recurrence kinds, in code order.
    pub const ALL: [RecurrenceKind; 4] = [
        RecurrenceKind::FixedDate,
        RecurrenceKind::FixedDateObservedMonday,
        RecurrenceKind::EasterRelative,
        RecurrenceKind::EasterRelativeObservedMonday,
    ];

    /// Returns the stored code for this kind.
    pub fn code(self) -> i32 {
        match self {
            RecurrenceKind::FixedDate => 1,
            RecurrenceKind::FixedDateObservedMonday => 2,
            RecurrenceKind::EasterRelative => 3,
            RecurrenceKind::EasterRelativeObservedMonday => 4,
        }
    }

    /// Looks up a kind by its stored code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Returns true for kinds that move to the next Monday.
    pub fn is_observed_monday(self) -> bool {
        matches!(
            self,
            RecurrenceKind::FixedDateObservedMonday | RecurrenceKind::EasterRelativeObservedMonday
        )
    }
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceKind::FixedDate => write!(f, "Fixed date"),
            RecurrenceKind::FixedDateObservedMonday => write!(f, "Fixed date, observed Monday"),
            RecurrenceKind::EasterRelative => write!(f, "Easter relative"),
            RecurrenceKind::EasterRelativeObservedMonday => {
                write!(f, "Easter relative, observed Monday")
            }
        }
    }
}

/// A holiday as stored by the holiday store.
///
/// The record is not validated on write. Fields that do not apply to
/// `kind` are ignored, and a record that cannot be resolved is reported
/// as [`crate::error::CalendarError::InvalidDefinition`] at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDefinition {
    /// Unique identifier.
    pub id: i64,
    /// Display label.
    pub name: String,
    /// Stored recurrence-kind code (see [`RecurrenceKind::code`]).
    pub kind: i32,
    /// Month for fixed kinds (1-12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Day of month for fixed kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Days to add to Easter Sunday for Easter-relative kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easter_offset_days: Option<i32>,
}

impl HolidayDefinition {
    /// Creates a fixed-kind definition.
    pub fn fixed(id: i64, name: impl Into<String>, kind: RecurrenceKind, month: u32, day: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.code(),
            month: Some(month),
            day: Some(day),
            easter_offset_days: None,
        }
    }

    /// Creates an Easter-relative definition.
    pub fn easter_relative(
        id: i64,
        name: impl Into<String>,
        kind: RecurrenceKind,
        offset_days: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.code(),
            month: None,
            day: None,
            easter_offset_days: Some(offset_days),
        }
    }

    /// Returns the recurrence kind, or `None` for an unrecognized code.
    pub fn recurrence_kind(&self) -> Option<RecurrenceKind> {
        RecurrenceKind::from_code(self.kind)
    }
}
