//! Route definitions for discussions.
//!
//! Mounted at `/discussions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{discussions, responses};
use crate::state::AppState;

/// Discussion routes.
///
/// ```text
/// GET    /                        -> list_discussions (?limit, offset)
/// POST   /                        -> create_discussion
/// GET    /{id}                    -> get_discussion
/// DELETE /{id}                    -> delete_discussion
/// GET    /{id}/responses          -> list_responses
/// POST   /{id}/responses          -> create_response
/// GET    /{id}/responses/thread   -> get_thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(discussions::list_discussions).post(discussions::create_discussion),
        )
        .route(
            "/{id}",
            get(discussions::get_discussion).delete(discussions::delete_discussion),
        )
        .route(
            "/{id}/responses",
            get(responses::list_responses).post(responses::create_response),
        )
        .route("/{id}/responses/thread", get(responses::get_thread))
}
