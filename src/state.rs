use std::sync::Arc;

use crate::chat::ChatEngine;
use crate::db::Database;

/// Process-wide handles shared by every request
///
/// Built once at startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub chat: Arc<ChatEngine>,
}

impl AppState {
    pub fn new(db: Database, chat: ChatEngine) -> Self {
        Self {
            db,
            chat: Arc::new(chat),
        }
    }
}
