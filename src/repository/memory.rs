use std::collections::BTreeMap;

use async_trait::async_trait;

use super::SeedRepository;
use crate::category::NewMenuCategory;
use crate::config::EntityKind;
use crate::item::NewMenuItem;
use crate::store::NewStore;
use crate::user::NewUser;
use crate::utils::{Result, SeedError};

/// In-process stand-in for the four menu tables. A constrained repository
/// enforces the parent references like the foreign keys in `migrations/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRepository {
    users: BTreeMap<String, NewUser>,
    stores: BTreeMap<i32, NewStore>,
    categories: BTreeMap<i32, NewMenuCategory>,
    items: BTreeMap<i32, NewMenuItem>,
    enforce_references: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constrained() -> Self {
        Self {
            enforce_references: true,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &BTreeMap<String, NewUser> {
        &self.users
    }

    pub fn stores(&self) -> &BTreeMap<i32, NewStore> {
        &self.stores
    }

    pub fn categories(&self) -> &BTreeMap<i32, NewMenuCategory> {
        &self.categories
    }

    pub fn items(&self) -> &BTreeMap<i32, NewMenuItem> {
        &self.items
    }

    fn require_user(&self, entity: &'static str, key: String, owner_id: &str) -> Result<()> {
        if self.enforce_references && !self.users.contains_key(owner_id) {
            return Err(SeedError::MissingReference {
                entity,
                key,
                parent: EntityKind::User.name(),
                parent_key: owner_id.to_owned(),
            });
        }
        Ok(())
    }

    fn require_store(&self, entity: &'static str, key: i32, store_id: i32) -> Result<()> {
        if self.enforce_references && !self.stores.contains_key(&store_id) {
            return Err(SeedError::MissingReference {
                entity,
                key: key.to_string(),
                parent: EntityKind::Store.name(),
                parent_key: store_id.to_string(),
            });
        }
        Ok(())
    }

    fn require_category(&self, key: i32, category_id: i32) -> Result<()> {
        if self.enforce_references && !self.categories.contains_key(&category_id) {
            return Err(SeedError::MissingReference {
                entity: EntityKind::MenuItem.name(),
                key: key.to_string(),
                parent: EntityKind::MenuCategory.name(),
                parent_key: category_id.to_string(),
            });
        }
        Ok(())
    }

    /// First child row that would dangle if `kind` were emptied.
    fn referencing_child(&self, kind: EntityKind) -> Option<(String, EntityKind)> {
        match kind {
            EntityKind::User => self
                .stores
                .values()
                .find(|s| self.users.contains_key(&s.owner_id))
                .map(|s| (s.owner_id.clone(), EntityKind::Store)),
            EntityKind::Store => self
                .categories
                .values()
                .map(|c| (c.store_id, EntityKind::MenuCategory))
                .chain(self.items.values().map(|i| (i.store_id, EntityKind::MenuItem)))
                .find(|(id, _)| self.stores.contains_key(id))
                .map(|(id, child)| (id.to_string(), child)),
            EntityKind::MenuCategory => self
                .items
                .values()
                .find(|i| self.categories.contains_key(&i.category_id))
                .map(|i| (i.category_id.to_string(), EntityKind::MenuItem)),
            EntityKind::MenuItem => None,
        }
    }
}

#[async_trait]
impl SeedRepository for MemoryRepository {
    async fn delete_all(&mut self, kind: EntityKind) -> Result<usize> {
        if self.enforce_references {
            if let Some((key, child)) = self.referencing_child(kind) {
                return Err(SeedError::StillReferenced {
                    entity: kind.name(),
                    key,
                    child: child.name(),
                });
            }
        }

        let deleted = match kind {
            EntityKind::User => std::mem::take(&mut self.users).len(),
            EntityKind::Store => std::mem::take(&mut self.stores).len(),
            EntityKind::MenuCategory => std::mem::take(&mut self.categories).len(),
            EntityKind::MenuItem => std::mem::take(&mut self.items).len(),
        };

        Ok(deleted)
    }

    async fn upsert_user(&mut self, user: &NewUser) -> Result<bool> {
        if self.users.contains_key(&user.id) {
            return Ok(false);
        }
        self.users.insert(user.id.clone(), user.clone());
        Ok(true)
    }

    async fn upsert_store(&mut self, store: &NewStore) -> Result<bool> {
        if self.stores.contains_key(&store.id) {
            return Ok(false);
        }
        self.require_user(EntityKind::Store.name(), store.id.to_string(), &store.owner_id)?;
        self.stores.insert(store.id, store.clone());
        Ok(true)
    }

    async fn upsert_category(&mut self, category: &NewMenuCategory) -> Result<bool> {
        if self.categories.contains_key(&category.id) {
            return Ok(false);
        }
        self.require_store(EntityKind::MenuCategory.name(), category.id, category.store_id)?;
        self.categories.insert(category.id, category.clone());
        Ok(true)
    }

    async fn upsert_item(&mut self, item: &NewMenuItem) -> Result<bool> {
        if self.items.contains_key(&item.id) {
            return Ok(false);
        }
        self.require_category(item.id, item.category_id)?;
        self.require_store(EntityKind::MenuItem.name(), item.id, item.store_id)?;
        self.items.insert(item.id, item.clone());
        Ok(true)
    }

    async fn count(&mut self, kind: EntityKind) -> Result<i64> {
        let rows = match kind {
            EntityKind::User => self.users.len(),
            EntityKind::Store => self.stores.len(),
            EntityKind::MenuCategory => self.categories.len(),
            EntityKind::MenuItem => self.items.len(),
        };

        Ok(i64::try_from(rows).unwrap_or(i64::MAX))
    }
}
