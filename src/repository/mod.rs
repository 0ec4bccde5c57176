use async_trait::async_trait;

use crate::category::NewMenuCategory;
use crate::config::EntityKind;
use crate::item::NewMenuItem;
use crate::store::NewStore;
use crate::user::NewUser;
use crate::utils::Result;

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::seed_in_transaction;

#[async_trait]
pub trait SeedRepository: Send {
    /// Removes every row of one table, returning how many were deleted.
    async fn delete_all(&mut self, kind: EntityKind) -> Result<usize>;

    /// Insert-if-absent keyed by primary key; an existing row is left as is.
    /// Returns `true` when a row was written.
    async fn upsert_user(&mut self, user: &NewUser) -> Result<bool>;

    async fn upsert_store(&mut self, store: &NewStore) -> Result<bool>;

    async fn upsert_category(&mut self, category: &NewMenuCategory) -> Result<bool>;

    async fn upsert_item(&mut self, item: &NewMenuItem) -> Result<bool>;

    async fn count(&mut self, kind: EntityKind) -> Result<i64>;

    /// Brings generated-id counters in line with the explicit ids just loaded.
    async fn sync_id_sequences(&mut self) -> Result<()> {
        Ok(())
    }
}
