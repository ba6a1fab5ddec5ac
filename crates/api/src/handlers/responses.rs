//! Handlers for discussion responses and their reply threads.
//!
//! Replies are checked against the configured thread depth limit when they
//! are created. Reads either return the flat chronological list or the nested
//! thread tree built by `commonground_core::threading`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use commonground_core::error::CoreError;
use commonground_core::responses::{validate_citations, validate_response_content};
use commonground_core::threading::{build_thread_tree, count_nodes, reply_depth, ThreadNode};
use commonground_core::types::DbId;
use commonground_db::models::response::{CreateResponse, Response, UpdateResponse};
use commonground_db::repositories::ResponseRepo;
use commonground_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::discussions::ensure_discussion;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Nested view of every live response in a discussion.
///
/// Node `depth` is the position in this view, not the stored `reply_depth`.
/// When an ancestor has been deleted its replies are promoted, so a node can
/// render shallower than it was created. The depth limit on new replies is
/// always checked against the stored `reply_depth`.
#[derive(Debug, Serialize)]
pub struct ThreadView {
    /// Top-level responses (including promoted orphans), oldest first.
    pub roots: Vec<ThreadNode<Response>>,
    /// Number of responses across all trees.
    pub total_count: usize,
    /// Deepest node depth in the view; 0 when empty.
    pub max_depth: u32,
}

impl ThreadView {
    fn new(roots: Vec<ThreadNode<Response>>) -> Self {
        let total_count = count_nodes(&roots);
        let max_depth = roots.iter().map(ThreadNode::max_depth).max().unwrap_or(0);
        Self {
            roots,
            total_count,
            max_depth,
        }
    }
}

/// Load a live response or fail with 404.
async fn ensure_response(pool: &DbPool, id: DbId) -> AppResult<Response> {
    ResponseRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Response", id)))
}

// ---------------------------------------------------------------------------
// Discussion-scoped handlers
// ---------------------------------------------------------------------------

/// GET /discussions/{id}/responses
///
/// Flat list of live responses, oldest first.
pub async fn list_responses(
    State(state): State<AppState>,
    Path(discussion_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_discussion(&state.pool, discussion_id).await?;
    let responses = ResponseRepo::list_by_discussion(&state.pool, discussion_id).await?;
    Ok(Json(DataResponse { data: responses }))
}

/// GET /discussions/{id}/responses/thread
///
/// Nested reply tree. Replies whose parent was deleted appear as roots, with
/// their stored `reply_depth` unchanged.
pub async fn get_thread(
    State(state): State<AppState>,
    Path(discussion_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_discussion(&state.pool, discussion_id).await?;
    let responses = ResponseRepo::list_by_discussion(&state.pool, discussion_id).await?;

    let view = ThreadView::new(build_thread_tree(responses));
    tracing::debug!(
        discussion_id,
        total_count = view.total_count,
        roots = view.roots.len(),
        "Thread tree built"
    );

    Ok(Json(DataResponse { data: view }))
}

/// POST /discussions/{id}/responses
///
/// Post a top-level response, or a reply when `parent_id` is set. The parent
/// must be a live response of the same discussion and the reply must fit
/// within the thread depth limit, measured from the parent's stored
/// `reply_depth` rather than its rendered thread depth.
pub async fn create_response(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(discussion_id): Path<DbId>,
    Json(input): Json<CreateResponse>,
) -> AppResult<impl IntoResponse> {
    validate_response_content(&input.content).map_err(AppError::BadRequest)?;
    validate_citations(&input.citations).map_err(AppError::BadRequest)?;
    ensure_discussion(&state.pool, discussion_id).await?;

    let depth = match input.parent_id {
        None => 0,
        Some(parent_id) => {
            let parent = ensure_response(&state.pool, parent_id).await?;
            if parent.discussion_id != discussion_id {
                return Err(AppError::BadRequest(format!(
                    "Parent response {parent_id} belongs to a different discussion"
                )));
            }
            reply_depth(parent.reply_depth, state.config.max_thread_depth).inspect_err(|_| {
                tracing::info!(
                    user_id = auth.user_id,
                    discussion_id,
                    parent_id,
                    parent_depth = parent.reply_depth,
                    "Reply rejected: thread depth limit exceeded"
                );
            })?
        }
    };

    let response =
        ResponseRepo::create(&state.pool, discussion_id, auth.user_id, depth, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        discussion_id,
        response_id = response.id,
        parent_id = ?response.parent_id,
        reply_depth = response.reply_depth,
        "Response created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

// ---------------------------------------------------------------------------
// Response-scoped handlers
// ---------------------------------------------------------------------------

/// GET /responses/{id}
pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let response = ensure_response(&state.pool, id).await?;
    Ok(Json(DataResponse { data: response }))
}

/// GET /responses/{id}/replies
///
/// Direct replies to a response, oldest first.
pub async fn list_replies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_response(&state.pool, id).await?;
    let replies = ResponseRepo::list_replies(&state.pool, id).await?;
    Ok(Json(DataResponse { data: replies }))
}

/// PUT /responses/{id}
///
/// Edit content and/or citations. Only the author may edit.
pub async fn update_response(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResponse>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref content) = input.content {
        validate_response_content(content).map_err(AppError::BadRequest)?;
    }
    if let Some(ref citations) = input.citations {
        validate_citations(citations).map_err(AppError::BadRequest)?;
    }

    let existing = ensure_response(&state.pool, id).await?;
    auth.require_author(existing.author_id, "Only the author can edit this response")?;

    let response = ResponseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Response", id)))?;

    tracing::info!(user_id = auth.user_id, response_id = id, "Response updated");

    Ok(Json(DataResponse { data: response }))
}

/// DELETE /responses/{id}
///
/// Soft-delete a response. Its replies are kept and show up as roots in the
/// thread view. Only the author or a moderator may delete.
pub async fn delete_response(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_response(&state.pool, id).await?;
    auth.require_can_delete(
        existing.author_id,
        "Only the author or a moderator can delete this response",
    )?;

    let deleted = ResponseRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Response", id)));
    }

    tracing::info!(
        user_id = auth.user_id,
        response_id = id,
        discussion_id = existing.discussion_id,
        "Response deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
