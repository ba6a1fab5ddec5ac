//! Repository for the `responses` table.
//!
//! Reads never return soft-deleted rows. Replies to a deleted response keep
//! their `parent_id`, so the thread builder sees them as orphans and promotes
//! them to roots.

use commonground_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::response::{CreateResponse, Response, UpdateResponse};

/// Column list for responses queries.
const COLUMNS: &str = "id, discussion_id, author_id, parent_id, content, citations, \
    reply_depth, created_at, updated_at";

/// Provides CRUD operations for responses.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Insert a new response, returning the created row.
    ///
    /// `reply_depth` must already be checked against the thread depth limit.
    pub async fn create(
        pool: &PgPool,
        discussion_id: DbId,
        author_id: DbId,
        reply_depth: i32,
        input: &CreateResponse,
    ) -> Result<Response, sqlx::Error> {
        let query = format!(
            "INSERT INTO responses
                (discussion_id, author_id, parent_id, content, citations, reply_depth)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(discussion_id)
            .bind(author_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .bind(Json(&input.citations))
            .bind(reply_depth)
            .fetch_one(pool)
            .await
    }

    /// Find a response by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Response>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM responses WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Response>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every live response of a discussion, oldest first.
    pub async fn list_by_discussion(
        pool: &PgPool,
        discussion_id: DbId,
    ) -> Result<Vec<Response>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM responses
             WHERE discussion_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(discussion_id)
            .fetch_all(pool)
            .await
    }

    /// List direct replies to a response, oldest first.
    pub async fn list_replies(
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<Response>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM responses
             WHERE parent_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Update content and/or citations. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResponse,
    ) -> Result<Option<Response>, sqlx::Error> {
        let query = format!(
            "UPDATE responses SET
                content = COALESCE($2, content),
                citations = COALESCE($3, citations)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.citations.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a response. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE responses SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
