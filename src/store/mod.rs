//! Holiday definition storage.
//!
//! The engine reads holiday definitions through the [`HolidayStore`]
//! trait. Persistence belongs to the implementor; [`InMemoryHolidayStore`]
//! is the reference implementation.

mod memory;

use async_trait::async_trait;

use crate::error::CalendarResult;
use crate::models::HolidayDefinition;

pub use memory::InMemoryHolidayStore;

/// Async access to stored holiday definitions.
///
/// Failures to reach the backing store are reported as
/// [`crate::error::CalendarError::StoreUnavailable`].
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// Fetches one definition, or fails with `NotFound`.
    async fn fetch_by_id(&self, id: i64) -> CalendarResult<HolidayDefinition>;
    /// Fetches every definition in the store's iteration order.
    async fn fetch_all(&self) -> CalendarResult<Vec<HolidayDefinition>>;
    /// Fetches the definitions whose name matches `text`.
    async fn search(&self, text: &str) -> CalendarResult<Vec<HolidayDefinition>>;
    /// Stores a new definition and returns it with its assigned id.
    async fn create(&self, definition: HolidayDefinition) -> CalendarResult<HolidayDefinition>;
    /// Replaces the definition with the same id, or fails with `NotFound`.
    async fn update(&self, definition: HolidayDefinition) -> CalendarResult<HolidayDefinition>;
    /// Removes a definition. Returns true if a record existed.
    async fn delete(&self, id: i64) -> CalendarResult<bool>;
}
