//! Item service
//!
//! Every operation is scoped to the calling user. An item owned by someone
//! else is reported exactly like a missing one.

use itemhub_core::entities::{Item, ItemResponse};
use itemhub_core::error::AppError;
use itemhub_core::value_objects::{ItemId, UserId};
use tracing::{info, instrument};

use crate::dto::{CreateItemRequest, ItemListResponse, UpdateItemRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

const ITEM_NOT_FOUND: &str = "Item not found";

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new, inactive item
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: UserId,
        request: CreateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        let item = Item::create(
            &request.name,
            request.description.as_deref().unwrap_or_default(),
            user_id,
        )?;

        self.ctx.item_repo().create(&item).await?;

        info!(item_id = %item.id(), "Item created");
        Ok(item.to_response())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: UserId, item_id: ItemId) -> ServiceResult<ItemResponse> {
        Ok(self.find_owned(user_id, item_id).await?.to_response())
    }

    /// List one page of the caller's items, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: UserId,
        page: u32,
        limit: u32,
    ) -> ServiceResult<ItemListResponse> {
        let result = self
            .ctx
            .item_repo()
            .find_all_by_user(user_id, page, limit)
            .await?;

        Ok(ItemListResponse {
            items: result.items.iter().map(Item::to_response).collect(),
            total: result.total,
            page,
            limit,
        })
    }

    /// Change name and/or description
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: UserId,
        item_id: ItemId,
        request: UpdateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        let item = self.find_owned(user_id, item_id).await?;
        let updated =
            item.update_details(request.name.as_deref(), request.description.as_deref())?;

        self.persist(&updated).await?;
        Ok(updated.to_response())
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, user_id: UserId, item_id: ItemId) -> ServiceResult<ItemResponse> {
        let item = self.find_owned(user_id, item_id).await?.activate()?;
        self.persist(&item).await?;

        info!(item_id = %item_id, "Item activated");
        Ok(item.to_response())
    }

    #[instrument(skip(self))]
    pub async fn deactivate(
        &self,
        user_id: UserId,
        item_id: ItemId,
    ) -> ServiceResult<ItemResponse> {
        let item = self.find_owned(user_id, item_id).await?.deactivate()?;
        self.persist(&item).await?;

        info!(item_id = %item_id, "Item deactivated");
        Ok(item.to_response())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId, item_id: ItemId) -> ServiceResult<()> {
        if !self.ctx.item_repo().delete(item_id, user_id).await? {
            return Err(AppError::not_found(ITEM_NOT_FOUND).into());
        }

        info!(item_id = %item_id, "Item deleted");
        Ok(())
    }

    async fn find_owned(&self, user_id: UserId, item_id: ItemId) -> ServiceResult<Item> {
        self.ctx
            .item_repo()
            .find_by_id(item_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(ITEM_NOT_FOUND).into())
    }

    // A miss here means the item was deleted between read and write.
    async fn persist(&self, item: &Item) -> ServiceResult<()> {
        if self.ctx.item_repo().update(item).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ITEM_NOT_FOUND).into())
        }
    }
}
