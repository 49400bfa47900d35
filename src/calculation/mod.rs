//! Date-resolution logic for the holiday calendar engine.
//!
//! This module contains the pure functions that turn a holiday rule and a
//! year into a calendar date: the Easter computation, day arithmetic, the
//! observed-Monday shift and the dispatch over recurrence kinds.

mod day_shift;
mod easter;
mod resolver;

pub use day_shift::{add_days, next_monday_on_or_after};
pub use easter::{compute_easter_sunday, holy_week_start};
pub use resolver::{resolve, resolve_rule};
