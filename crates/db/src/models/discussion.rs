//! Discussion model.

use commonground_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `discussions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Discussion {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new discussion.
#[derive(Debug, Deserialize)]
pub struct CreateDiscussion {
    pub title: String,
    pub description: Option<String>,
}
