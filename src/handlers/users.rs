// /users CRUD handlers

use tracing::info;
use warp::http::StatusCode;
use warp::reply::Response;

use super::error::{respond, ApiError};
use crate::db::NewUser;
use crate::models::{StatusMessage, UserPayload};
use crate::state::AppState;

fn require_fields(payload: UserPayload) -> Result<NewUser, ApiError> {
    payload
        .into_new_user()
        .map_err(|field| ApiError::BadRequest(format!("missing required field '{}'", field)))
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("user not found".to_string())
}

fn status_reply(message: &str, status: StatusCode) -> impl warp::Reply {
    warp::reply::with_status(warp::reply::json(&StatusMessage::new(message)), status)
}

// POST /users
pub async fn create_user_handler(
    state: AppState,
    payload: UserPayload,
) -> Result<Response, warp::Rejection> {
    Ok(respond(create_user(&state, payload).await))
}

async fn create_user(state: &AppState, payload: UserPayload) -> Result<impl warp::Reply, ApiError> {
    let new_user = require_fields(payload)?;
    let user = state.db.create_user(&new_user).await?;
    info!(user_id = user.id, "user created");
    Ok(status_reply("user created", StatusCode::CREATED))
}

// GET /users
pub async fn list_users_handler(state: AppState) -> Result<Response, warp::Rejection> {
    Ok(respond(list_users(&state).await))
}

async fn list_users(state: &AppState) -> Result<impl warp::Reply, ApiError> {
    let users = state.db.list_users().await?;
    Ok(warp::reply::json(&users))
}

// GET /users/{id}
pub async fn get_user_handler(id: i32, state: AppState) -> Result<Response, warp::Rejection> {
    Ok(respond(get_user(&state, id).await))
}

async fn get_user(state: &AppState, id: i32) -> Result<impl warp::Reply, ApiError> {
    let user = state.db.get_user(id).await?.ok_or_else(user_not_found)?;
    Ok(warp::reply::json(&user))
}

// PUT /users/{id}
pub async fn update_user_handler(
    id: i32,
    state: AppState,
    payload: UserPayload,
) -> Result<Response, warp::Rejection> {
    Ok(respond(update_user(&state, id, payload).await))
}

async fn update_user(
    state: &AppState,
    id: i32,
    payload: UserPayload,
) -> Result<impl warp::Reply, ApiError> {
    let changes = require_fields(payload)?;
    state
        .db
        .update_user(id, &changes)
        .await?
        .ok_or_else(user_not_found)?;
    info!(user_id = id, "user updated");
    Ok(status_reply("user updated", StatusCode::OK))
}

// DELETE /users/{id}
pub async fn delete_user_handler(id: i32, state: AppState) -> Result<Response, warp::Rejection> {
    Ok(respond(delete_user(&state, id).await))
}

async fn delete_user(state: &AppState, id: i32) -> Result<impl warp::Reply, ApiError> {
    if !state.db.delete_user(id).await? {
        return Err(user_not_found());
    }
    info!(user_id = id, "user deleted");
    Ok(status_reply("user deleted", StatusCode::OK))
}
