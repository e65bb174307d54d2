use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

use crate::db::error::Result;

/// One stored chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub user_message: String,
    pub bot_response: String,
}

impl Message {
    pub(crate) fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_message: row.try_get("user_message")?,
            bot_response: row.try_get("bot_response")?,
        })
    }
}

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub(crate) fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
        })
    }
}

/// Field values for creating or overwriting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serialization() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "username": "alice", "email": "alice@example.com" })
        );
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message {
            id: 1,
            user_message: "hello".to_string(),
            bot_response: "hi".to_string(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["user_message"], "hello");
        assert_eq!(value["bot_response"], "hi");
    }
}
