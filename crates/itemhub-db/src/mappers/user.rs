//! User model → entity mapper

use itemhub_core::entities::{User, UserProps};
use itemhub_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::from_persistence(UserProps {
            id: UserId::from_uuid(model.id),
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            created_at: model.created_at,
        })
    }
}
