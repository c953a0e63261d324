//! In-memory implementation of ItemRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use itemhub_core::entities::Item;
use itemhub_core::traits::{ItemPage, ItemRepository, RepoResult};
use itemhub_core::value_objects::{ItemId, UserId};

#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: ItemId, user_id: UserId) -> RepoResult<Option<Item>> {
        let items = self.items.read();
        Ok(items.get(&id).filter(|i| i.user_id() == user_id).cloned())
    }

    async fn find_all_by_user(
        &self,
        user_id: UserId,
        page: u32,
        limit: u32,
    ) -> RepoResult<ItemPage> {
        let mut owned: Vec<Item> = self
            .items
            .read()
            .values()
            .filter(|i| i.user_id() == user_id)
            .cloned()
            .collect();

        // Newest first, ties broken by id like the SQL ORDER BY
        owned.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        let total = owned.len() as u64;
        let offset = page.saturating_sub(1) as usize * limit as usize;
        let items = owned.into_iter().skip(offset).take(limit as usize).collect();

        Ok(ItemPage { items, total })
    }

    async fn create(&self, item: &Item) -> RepoResult<()> {
        self.items.write().insert(item.id(), item.clone());
        tracing::debug!(item_id = %item.id(), "Stored item");
        Ok(())
    }

    async fn update(&self, item: &Item) -> RepoResult<bool> {
        let mut items = self.items.write();
        match items.get_mut(&item.id()) {
            Some(stored) if stored.user_id() == item.user_id() => {
                *stored = item.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: ItemId, user_id: UserId) -> RepoResult<bool> {
        let mut items = self.items.write();
        let owned = items.get(&id).is_some_and(|i| i.user_id() == user_id);
        if owned {
            items.remove(&id);
        }
        Ok(owned)
    }
}
