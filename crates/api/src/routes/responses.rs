//! Route definitions for individual responses.
//!
//! Mounted at `/responses` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// Response routes.
///
/// ```text
/// GET    /{id}              -> get_response
/// PUT    /{id}              -> update_response
/// DELETE /{id}              -> delete_response
/// GET    /{id}/replies      -> list_replies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(responses::get_response)
                .put(responses::update_response)
                .delete(responses::delete_response),
        )
        .route("/{id}/replies", get(responses::list_replies))
}
