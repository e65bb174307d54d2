// Route definitions and handlers

use std::convert::Infallible;

use warp::Filter;

use crate::handlers;
use crate::models::ChatForm;
use crate::state::AppState;

/// Upper bound on request bodies
const MAX_BODY_BYTES: u64 = 64 * 1024;

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and_then(handlers::index_handler);

    // GET /test
    let test = warp::path("test")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::test_handler);

    // GET /get?msg=...
    let chat_get = warp::path("get")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and(warp::query::<ChatForm>())
        .and_then(handlers::chat_handler);

    // POST /get (form: msg)
    let chat_post = warp::path("get")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::form::<ChatForm>())
        .and_then(handlers::chat_handler);

    let users = warp::path("users");

    // POST /users
    let create_user = users
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::create_user_handler);

    // GET /users
    let list_users = users
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::list_users_handler);

    // GET /users/{id}
    let get_user = users
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::get_user_handler);

    // PUT /users/{id}
    let update_user = users
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(with_state(state.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::update_user_handler);

    // DELETE /users/{id}
    let delete_user = users
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_state(state))
        .and_then(handlers::delete_user_handler);

    // Combine routes
    index
        .or(test)
        .or(chat_get)
        .or(chat_post)
        .or(create_user)
        .or(list_users)
        .or(get_user)
        .or(update_user)
        .or(delete_user)
        .recover(handlers::handle_rejection)
}
