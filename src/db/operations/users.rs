use deadpool_postgres::Pool;

use crate::db::{
    error::Result,
    types::{NewUser, User},
};

/// Insert a user
///
/// # Errors
///
/// * `Error::UniqueViolation` - username or email is already taken
/// * `Error::ValueTooLong` - username over 80 or email over 120 characters
pub async fn create_user(pool: &Pool, new_user: &NewUser) -> Result<User> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(
            r#"INSERT INTO "user" (username, email) VALUES ($1, $2)
               RETURNING id, username, email"#,
            &[&new_user.username, &new_user.email],
        )
        .await?;

    User::from_row(&row)
}

/// Retrieve all users ordered by id
pub async fn list_users(pool: &Pool) -> Result<Vec<User>> {
    let conn = pool.get().await?;

    let rows = conn
        .query(r#"SELECT id, username, email FROM "user" ORDER BY id"#, &[])
        .await?;

    rows.iter().map(User::from_row).collect()
}

/// Retrieve a user by id
///
/// Returns `None` when no row has that id.
pub async fn get_user(pool: &Pool, id: i32) -> Result<Option<User>> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            r#"SELECT id, username, email FROM "user" WHERE id = $1"#,
            &[&id],
        )
        .await?;

    row.as_ref().map(User::from_row).transpose()
}

/// Overwrite both username and email of an existing user
///
/// The id never changes. Returns `None` when no row has that id.
pub async fn update_user(pool: &Pool, id: i32, changes: &NewUser) -> Result<Option<User>> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            r#"UPDATE "user" SET username = $1, email = $2 WHERE id = $3
               RETURNING id, username, email"#,
            &[&changes.username, &changes.email, &id],
        )
        .await?;

    row.as_ref().map(User::from_row).transpose()
}

/// Delete a user by id
///
/// Returns `false` when no row had that id.
pub async fn delete_user(pool: &Pool, id: i32) -> Result<bool> {
    let conn = pool.get().await?;

    let deleted = conn
        .execute(r#"DELETE FROM "user" WHERE id = $1"#, &[&id])
        .await?;

    Ok(deleted > 0)
}
