//! In-memory holiday store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::ConfigLoader;
use crate::error::{CalendarError, CalendarResult};
use crate::models::HolidayDefinition;

use super::HolidayStore;

#[derive(Debug)]
struct Records {
    holidays: BTreeMap<i64, HolidayDefinition>,
    /// `None` once an id of `i64::MAX` has been handed out or seeded.
    next_id: Option<i64>,
}

/// Holiday store kept in process memory.
///
/// Records iterate in ascending id order. New records get the next free
/// id, so iteration order is also insertion order.
///
/// # Example
///
/// ```
/// use holiday_calendar::models::{HolidayDefinition, RecurrenceKind};
/// use holiday_calendar::store::{HolidayStore, InMemoryHolidayStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryHolidayStore::new();
/// let navidad = HolidayDefinition::fixed(0, "Navidad", RecurrenceKind::FixedDate, 12, 25);
/// let stored = store.create(navidad).await.unwrap();
/// assert_eq!(stored.id, 1);
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryHolidayStore {
    records: RwLock<Records>,
}

impl Default for InMemoryHolidayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHolidayStore {
    /// Creates an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                holidays: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Creates a store holding `definitions`, keeping their ids.
    ///
    /// A later definition replaces an earlier one with the same id. If the
    /// highest seeded id is `i64::MAX`, the store still serves reads and
    /// updates but [`create`](HolidayStore::create) fails.
    pub fn from_definitions(definitions: impl IntoIterator<Item = HolidayDefinition>) -> Self {
        let holidays: BTreeMap<i64, HolidayDefinition> = definitions
            .into_iter()
            .map(|definition| (definition.id, definition))
            .collect();
        let next_id = match holidays.keys().next_back() {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };

        Self {
            records: RwLock::new(Records { holidays, next_id }),
        }
    }

    /// Creates a store seeded with the holidays of a loaded calendar.
    pub fn from_config(loader: &ConfigLoader) -> Self {
        Self::from_definitions(loader.holidays().iter().cloned())
    }
}

#[async_trait]
impl HolidayStore for InMemoryHolidayStore {
    async fn fetch_by_id(&self, id: i64) -> CalendarResult<HolidayDefinition> {
        let records = self.records.read().await;
        records
            .holidays
            .get(&id)
            .cloned()
            .ok_or(CalendarError::NotFound { id })
    }

    async fn fetch_all(&self) -> CalendarResult<Vec<HolidayDefinition>> {
        let records = self.records.read().await;
        Ok(records.holidays.values().cloned().collect())
    }

    async fn search(&self, text: &str) -> CalendarResult<Vec<HolidayDefinition>> {
        let needle = text.to_lowercase();
        let records = self.records.read().await;

        Ok(records
            .holidays
            .values()
            .filter(|definition| definition.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, mut definition: HolidayDefinition) -> CalendarResult<HolidayDefinition> {
        let mut records = self.records.write().await;
        let id = records
            .next_id
            .ok_or_else(|| CalendarError::store_unavailable("holiday id space exhausted"))?;
        definition.id = id;
        records.next_id = id.checked_add(1);
        records.holidays.insert(definition.id, definition.clone());

        debug!(holiday_id = definition.id, name = %definition.name, "Created holiday");
        Ok(definition)
    }

    async fn update(&self, definition: HolidayDefinition) -> CalendarResult<HolidayDefinition> {
        let mut records = self.records.write().await;
        let existing = records
            .holidays
            .get_mut(&definition.id)
            .ok_or(CalendarError::NotFound { id: definition.id })?;
        *existing = definition.clone();

        debug!(holiday_id = definition.id, "Updated holiday");
        Ok(definition)
    }

    async fn delete(&self, id: i64) -> CalendarResult<bool> {
        let mut records = self.records.write().await;
        let removed = records.holidays.remove(&id).is_some();

        debug!(holiday_id = id, removed, "Deleted holiday");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecurrenceKind;

    fn navidad(id: i64) -> HolidayDefinition {
        HolidayDefinition::fixed(id, "Navidad", RecurrenceKind::FixedDate, 12, 25)
    }

    fn seeded_store() -> InMemoryHolidayStore {
        InMemoryHolidayStore::from_definitions(vec![
            HolidayDefinition::fixed(1, "Año Nuevo", RecurrenceKind::FixedDate, 1, 1),
            HolidayDefinition::easter_relative(
                2,
                "Viernes Santo",
                RecurrenceKind::EasterRelative,
                -2,
            ),
            navidad(5),
        ])
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryHolidayStore::new();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryHolidayStore::new();

        let first = store.create(navidad(99)).await.unwrap();
        let second = store.create(navidad(99)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_after_seed_continues_after_highest_id() {
        let store = seeded_store();
        let created = store.create(navidad(0)).await.unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn test_seed_with_max_id_serves_reads_but_rejects_create() {
        let store = InMemoryHolidayStore::from_definitions(vec![navidad(i64::MAX)]);

        assert_eq!(store.fetch_by_id(i64::MAX).await.unwrap().name, "Navidad");
        assert_eq!(
            store.create(navidad(0)).await,
            Err(CalendarError::store_unavailable("holiday id space exhausted"))
        );
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_takes_last_id_then_stops() {
        let store = InMemoryHolidayStore::from_definitions(vec![navidad(i64::MAX - 1)]);

        let last = store.create(navidad(0)).await.unwrap();
        assert_eq!(last.id, i64::MAX);
        assert!(matches!(
            store.create(navidad(0)).await,
            Err(CalendarError::StoreUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_is_in_id_order() {
        let store = InMemoryHolidayStore::from_definitions(vec![navidad(3), navidad(1), navidad(2)]);
        let ids: Vec<i64> = store
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_by_id_returns_record() {
        let store = seeded_store();
        let found = store.fetch_by_id(2).await.unwrap();
        assert_eq!(found.name, "Viernes Santo");
    }

    #[tokio::test]
    async fn test_fetch_by_missing_id_is_not_found() {
        let store = seeded_store();
        assert_eq!(
            store.fetch_by_id(42).await,
            Err(CalendarError::NotFound { id: 42 })
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = seeded_store();

        let found = store.search("santo").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        assert_eq!(store.search("NAVI").await.unwrap().len(), 1);
        assert!(store.search("Corpus").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = seeded_store();
        let mut changed = navidad(5);
        changed.name = "Natividad".to_string();

        store.update(changed).await.unwrap();

        assert_eq!(store.fetch_by_id(5).await.unwrap().name, "Natividad");
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let store = seeded_store();
        assert_eq!(
            store.update(navidad(77)).await,
            Err(CalendarError::NotFound { id: 77 })
        );
    }

    #[tokio::test]
    async fn test_delete_reports_whether_record_existed() {
        let store = seeded_store();

        assert!(store.delete(1).await.unwrap());
        assert!(!store.delete(1).await.unwrap());
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }
}
