use deadpool_postgres::Pool;

use crate::db::{error::Result, types::Message};

/// Store one chat exchange and return the persisted row
///
/// Runs as a single autocommitted statement.
pub async fn insert_message(pool: &Pool, user_message: &str, bot_response: &str) -> Result<Message> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(
            "INSERT INTO message (user_message, bot_response) VALUES ($1, $2) \
             RETURNING id, user_message, bot_response",
            &[&user_message, &bot_response],
        )
        .await?;

    Message::from_row(&row)
}

/// Retrieve every stored exchange, oldest first
pub async fn list_messages(pool: &Pool) -> Result<Vec<Message>> {
    let conn = pool.get().await?;

    let rows = conn
        .query(
            "SELECT id, user_message, bot_response FROM message ORDER BY id",
            &[],
        )
        .await?;

    rows.iter().map(Message::from_row).collect()
}
