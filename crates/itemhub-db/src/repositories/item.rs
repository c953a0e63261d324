//! PostgreSQL implementation of ItemRepository
//!
//! Every statement filters on `user_id` so another owner's rows are never
//! read, changed or counted.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use itemhub_core::entities::Item;
use itemhub_core::traits::{ItemPage, ItemRepository, RepoResult};
use itemhub_core::value_objects::{ItemId, UserId};

use crate::models::ItemModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ItemId, user_id: UserId) -> RepoResult<Option<Item>> {
        let result = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, user_id, name, description, status, created_at, updated_at
            FROM items
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Item::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all_by_user(
        &self,
        user_id: UserId,
        page: u32,
        limit: u32,
    ) -> RepoResult<ItemPage> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, user_id, name, description, status, created_at, updated_at
            FROM items
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM items WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(Item::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(ItemPage {
            items,
            total: total.max(0) as u64,
        })
    }

    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    async fn create(&self, item: &Item) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO items (id, user_id, name, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(item.id().into_inner())
        .bind(item.user_id().into_inner())
        .bind(item.name())
        .bind(item.description())
        .bind(item.status().as_str())
        .bind(item.created_at())
        .bind(item.updated_at())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    async fn update(&self, item: &Item) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE items
            SET name = $3, description = $4, status = $5, updated_at = $6
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item.id().into_inner())
        .bind(item.user_id().into_inner())
        .bind(item.name())
        .bind(item.description())
        .bind(item.status().as_str())
        .bind(item.updated_at())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ItemId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM items WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
