//! Handlers for discussions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use commonground_core::discussions::{
    validate_discussion_description, validate_discussion_title,
};
use commonground_core::error::CoreError;
use commonground_core::types::DbId;
use commonground_db::models::discussion::{CreateDiscussion, Discussion};
use commonground_db::repositories::DiscussionRepo;
use commonground_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a live discussion or fail with 404.
pub(crate) async fn ensure_discussion(pool: &DbPool, id: DbId) -> AppResult<Discussion> {
    DiscussionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Discussion", id)))
}

/// GET /discussions?limit=&offset=
pub async fn list_discussions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let discussions = DiscussionRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: discussions }))
}

/// POST /discussions
pub async fn create_discussion(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDiscussion>,
) -> AppResult<impl IntoResponse> {
    validate_discussion_title(&input.title).map_err(AppError::BadRequest)?;
    if let Some(ref description) = input.description {
        validate_discussion_description(description).map_err(AppError::BadRequest)?;
    }

    let discussion = DiscussionRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        discussion_id = discussion.id,
        "Discussion created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: discussion })))
}

/// GET /discussions/{id}
pub async fn get_discussion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let discussion = ensure_discussion(&state.pool, id).await?;
    Ok(Json(DataResponse { data: discussion }))
}

/// DELETE /discussions/{id}
///
/// Only the creator or a moderator may delete a discussion.
pub async fn delete_discussion(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let discussion = ensure_discussion(&state.pool, id).await?;

    auth.require_can_delete(
        discussion.created_by,
        "Only the creator or a moderator can delete this discussion",
    )?;

    DiscussionRepo::soft_delete(&state.pool, id).await?;

    tracing::info!(user_id = auth.user_id, discussion_id = id, "Discussion deleted");

    Ok(StatusCode::NO_CONTENT)
}
