//! Domain entities - core business objects

mod item;
mod user;

pub use item::{
    Item, ItemProps, ItemResponse, ItemStatus, ItemStatusParseError, ITEM_DESCRIPTION_MAX_LEN,
    ITEM_NAME_MAX_LEN,
};
pub use user::{NewUser, User, UserProps, UserResponse};
