//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday
//! calendars from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};
use crate::models::HolidayDefinition;

use super::types::{CalendarConfig, CalendarMetadata, HolidaysConfig};

/// Loads and provides access to a holiday calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/colombia/
/// ├── calendar.yaml   # Calendar metadata
/// └── holidays.yaml   # Holiday definitions
/// ```
///
/// Definitions are loaded as stored records; they are not resolved or
/// validated against their recurrence kind here. Holiday ids must be
/// unique within the file.
///
/// # Example
///
/// ```no_run
/// use holiday_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/colombia").unwrap();
/// println!("Loaded calendar: {}", loader.calendar().name);
/// println!("{} holidays", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::ConfigNotFound`] if a required file is missing
    /// - [`CalendarError::ConfigParseError`] if a file contains invalid YAML,
    ///   a required field is missing, or two holidays share an id
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();

        let calendar_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&calendar_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_config = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;
        Self::check_unique_ids(&holidays_path, &holidays_config.holidays)?;

        let config = CalendarConfig::new(metadata, holidays_config.holidays);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_unique_ids(path: &Path, holidays: &[HolidayDefinition]) -> CalendarResult<()> {
        let mut seen = HashSet::new();
        match holidays.iter().find(|h| !seen.insert(h.id)) {
            Some(duplicate) => Err(CalendarError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("duplicate holiday id {}", duplicate.id),
            }),
            None => Ok(()),
        }
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        self.config.metadata()
    }

    /// Returns the holiday definitions in file order.
    pub fn holidays(&self) -> &[HolidayDefinition] {
        self.config.holidays()
    }
}
