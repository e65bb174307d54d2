pub mod messages;
pub mod schema;
pub mod users;

pub use messages::{insert_message, list_messages};
pub use schema::ensure_schema;
pub use users::{create_user, delete_user, get_user, list_users, update_user};
