pub mod discussions;
pub mod health;
pub mod responses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /discussions                              list, create
/// /discussions/{id}                         get, delete
/// /discussions/{id}/responses               list (flat), create root or reply
/// /discussions/{id}/responses/thread        nested thread tree
///
/// /responses/{id}                           get, update, delete
/// /responses/{id}/replies                   direct replies
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/discussions", discussions::router())
        .nest("/responses", responses::router())
}
