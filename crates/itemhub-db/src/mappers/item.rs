//! Item model → entity mapper

use itemhub_core::entities::{Item, ItemProps, ItemStatus};
use itemhub_core::error::RepositoryError;
use itemhub_core::value_objects::{ItemId, UserId};

use crate::models::ItemModel;

impl TryFrom<ItemModel> for Item {
    type Error = RepositoryError;

    fn try_from(model: ItemModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<ItemStatus>()
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(Item::from_persistence(ItemProps {
            id: ItemId::from_uuid(model.id),
            name: model.name,
            description: model.description,
            status,
            user_id: UserId::from_uuid(model.user_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }))
    }
}
