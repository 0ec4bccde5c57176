use async_trait::async_trait;
use diesel_async::{AsyncConnection, AsyncPgConnection, scoped_futures::ScopedFutureExt};

use super::SeedRepository;
use crate::category::{self, NewMenuCategory};
use crate::config::{EntityKind, SeedConfig};
use crate::item::{self, NewMenuItem};
use crate::seed::{self, SeedReport};
use crate::store::{self, NewStore};
use crate::user::{self, NewUser};
use crate::utils::{Result, SeedError};

#[async_trait]
impl SeedRepository for AsyncPgConnection {
    async fn delete_all(&mut self, kind: EntityKind) -> Result<usize> {
        let deleted = match kind {
            EntityKind::User => user::handlers::delete_all(self).await?,
            EntityKind::Store => store::handlers::delete_all(self).await?,
            EntityKind::MenuCategory => category::handlers::delete_all(self).await?,
            EntityKind::MenuItem => item::handlers::delete_all(self).await?,
        };

        Ok(deleted)
    }

    async fn upsert_user(&mut self, user: &NewUser) -> Result<bool> {
        Ok(user::handlers::upsert(self, user).await?)
    }

    async fn upsert_store(&mut self, store: &NewStore) -> Result<bool> {
        Ok(store::handlers::upsert(self, store).await?)
    }

    async fn upsert_category(&mut self, category: &NewMenuCategory) -> Result<bool> {
        Ok(category::handlers::upsert(self, category).await?)
    }

    async fn upsert_item(&mut self, item: &NewMenuItem) -> Result<bool> {
        Ok(item::handlers::upsert(self, item).await?)
    }

    async fn count(&mut self, kind: EntityKind) -> Result<i64> {
        let rows = match kind {
            EntityKind::User => user::handlers::count(self).await?,
            EntityKind::Store => store::handlers::count(self).await?,
            EntityKind::MenuCategory => category::handlers::count(self).await?,
            EntityKind::MenuItem => item::handlers::count(self).await?,
        };

        Ok(rows)
    }

    async fn sync_id_sequences(&mut self) -> Result<()> {
        store::handlers::sync_id_sequence(self).await?;
        category::handlers::sync_id_sequence(self).await?;
        item::handlers::sync_id_sequence(self).await?;
        Ok(())
    }
}

/// Runs the whole clear-and-load sequence inside one transaction.
pub async fn seed_in_transaction(
    conn: &mut AsyncPgConnection,
    config: &SeedConfig,
) -> Result<SeedReport> {
    conn.transaction::<SeedReport, SeedError, _>(|conn| {
        async move { seed::run(conn, config).await }.scope_boxed()
    })
    .await
}
