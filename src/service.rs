//! Holiday query service.
//!
//! [`HolidayQueryService`] runs the resolver over the definitions held by a
//! [`HolidayStore`] to build a year's holiday calendar and to answer
//! whether a given date is a holiday. It also passes CRUD calls through
//! to the store unchanged.

use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::resolve;
use crate::error::CalendarResult;
use crate::models::{HolidayDefinition, ResolvedHoliday};
use crate::store::HolidayStore;

/// Answers holiday queries against an injected store.
///
/// Nothing is cached: every query fetches the definitions again and
/// resolves them from scratch.
///
/// # Example
///
/// ```
/// use holiday_calendar::models::{HolidayDefinition, RecurrenceKind};
/// use holiday_calendar::service::HolidayQueryService;
/// use holiday_calendar::store::InMemoryHolidayStore;
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryHolidayStore::from_definitions(vec![
///     HolidayDefinition::fixed(1, "Navidad", RecurrenceKind::FixedDate, 12, 25),
/// ]);
/// let service = HolidayQueryService::new(store);
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert!(service.is_holiday(christmas).await.unwrap());
/// # }
/// ```
#[derive(Debug)]
pub struct HolidayQueryService<S> {
    store: Arc<S>,
}

impl<S> Clone for HolidayQueryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: HolidayStore> HolidayQueryService<S> {
    /// Creates a service that owns `store`.
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Creates a service over a store shared with other owners.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves every stored holiday for `year`, in store order.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::StoreUnavailable`](crate::error::CalendarError::StoreUnavailable)
    ///   if the store cannot be read
    /// - [`CalendarError::InvalidDefinition`](crate::error::CalendarError::InvalidDefinition)
    ///   if any single definition cannot be resolved; the listing is
    ///   all-or-nothing
    pub async fn list_for_year(&self, year: i32) -> CalendarResult<Vec<ResolvedHoliday>> {
        let query_id = Uuid::new_v4();
        let start_time = Instant::now();

        let definitions = self.store.fetch_all().await.inspect_err(|err| {
            warn!(query_id = %query_id, year, error = %err, "Failed to fetch holidays");
        })?;

        let holidays = definitions
            .iter()
            .map(|definition| {
                resolve(definition, year).inspect_err(|err| {
                    warn!(
                        query_id = %query_id,
                        definition_id = definition.id,
                        year,
                        error = %err,
                        "Holiday resolution failed"
                    );
                })
            })
            .collect::<CalendarResult<Vec<_>>>()?;

        info!(
            query_id = %query_id,
            year,
            holidays_count = holidays.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Resolved holidays for year"
        );

        Ok(holidays)
    }

    /// Returns true if `date` is one of the holidays of its year.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`list_for_year`](Self::list_for_year).
    pub async fn is_holiday(&self, date: NaiveDate) -> CalendarResult<bool> {
        let holidays = self.list_for_year(date.year()).await?;
        let is_holiday = holidays.iter().any(|holiday| holiday.falls_on(date));

        debug!(date = %date, is_holiday, "Checked holiday");
        Ok(is_holiday)
    }

    /// Returns true if the calendar day of `datetime` is a holiday.
    ///
    /// The time of day is ignored.
    pub async fn is_holiday_at(&self, datetime: NaiveDateTime) -> CalendarResult<bool> {
        self.is_holiday(datetime.date()).await
    }

    /// Fetches one stored definition.
    pub async fn get(&self, id: i64) -> CalendarResult<HolidayDefinition> {
        self.store.fetch_by_id(id).await
    }

    /// Fetches every stored definition.
    pub async fn list_all(&self) -> CalendarResult<Vec<HolidayDefinition>> {
        self.store.fetch_all().await
    }

    /// Searches stored definitions by name.
    pub async fn search(&self, text: &str) -> CalendarResult<Vec<HolidayDefinition>> {
        self.store.search(text).await
    }

    /// Stores a new definition.
    pub async fn add(&self, definition: HolidayDefinition) -> CalendarResult<HolidayDefinition> {
        self.store.create(definition).await
    }

    /// Replaces a stored definition.
    pub async fn update(&self, definition: HolidayDefinition) -> CalendarResult<HolidayDefinition> {
        self.store.update(definition).await
    }

    /// Deletes a stored definition. Returns true if one was removed.
    pub async fn delete(&self, id: i64) -> CalendarResult<bool> {
        self.store.delete(id).await
    }
}
