// GET/POST /get handler

use tracing::info;
use warp::http::StatusCode;
use warp::reply::Response;

use super::error::{respond, ApiError};
use crate::models::ChatForm;
use crate::state::AppState;

pub async fn chat_handler(state: AppState, form: ChatForm) -> Result<Response, warp::Rejection> {
    Ok(respond(chat(&state, form).await))
}

async fn chat(state: &AppState, form: ChatForm) -> Result<impl warp::Reply, ApiError> {
    let msg = form
        .msg
        .ok_or_else(|| ApiError::BadRequest("missing required field 'msg'".to_string()))?;
    info!(chars = msg.chars().count(), "chat request");

    let response = state.chat.respond(&msg).await?;
    let stored = state.db.insert_message(&msg, &response).await?;
    info!(message_id = stored.id, reply_chars = response.chars().count(), "chat exchange stored");

    Ok(warp::reply::with_status(stored.bot_response, StatusCode::OK))
}
