// GET / and GET /test handlers

use std::convert::Infallible;

use crate::models::StatusMessage;

const CHAT_PAGE: &str = include_str!("../../templates/chat.html");

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(CHAT_PAGE))
}

pub async fn test_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&StatusMessage::new("test route")))
}
