//! Configuration loading for the holiday calendar engine.
//!
//! This module loads a holiday calendar (metadata and holiday definitions)
//! from YAML files. A loaded calendar can seed an
//! [`InMemoryHolidayStore`](crate::store::InMemoryHolidayStore).
//!
//! # Example
//!
//! ```no_run
//! use holiday_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/colombia").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, CalendarMetadata, HolidaysConfig};
