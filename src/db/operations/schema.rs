use deadpool_postgres::Pool;

use crate::db::error::Result;

/// DDL for both tables. `user` is a reserved word in PostgreSQL, hence the quoting.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS message (
    id SERIAL PRIMARY KEY,
    user_message TEXT NOT NULL,
    bot_response TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "user" (
    id SERIAL PRIMARY KEY,
    username VARCHAR(80) NOT NULL UNIQUE,
    email VARCHAR(120) NOT NULL UNIQUE
);
"#;

/// Create the `message` and `user` tables if they do not exist yet
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(SCHEMA_SQL).await?;
    Ok(())
}
