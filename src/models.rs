// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::db::NewUser;

// Chat form (POST body) or query string (GET)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatForm {
    pub msg: Option<String>,
}

// User create/update body
//
// Both fields are optional at the serde level so a missing field becomes a
// 400 with a readable message rather than a generic body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserPayload {
    /// Require both fields, naming the first one that is absent
    pub fn into_new_user(self) -> Result<NewUser, &'static str> {
        let username = self.username.ok_or("username")?;
        let email = self.email.ok_or("email")?;
        Ok(NewUser { username, email })
    }
}

// `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
