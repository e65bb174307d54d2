// Handlers module

pub mod chat;
pub mod error;
pub mod pages;
pub mod users;

pub use chat::chat_handler;
pub use error::{handle_rejection, ApiError};
pub use pages::{index_handler, test_handler};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
