//! Response model.

use commonground_core::responses::Citation;
use commonground_core::threading::ThreadItem;
use commonground_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `responses` table.
///
/// `reply_depth` is the depth recorded when the response was created. The
/// depth reported by a thread tree can be lower when an ancestor has since
/// been deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Response {
    pub id: DbId,
    pub discussion_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub citations: Json<Vec<Citation>>,
    pub reply_depth: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ThreadItem for Response {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// DTO for posting a response. `parent_id` makes it a reply.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    pub content: String,
    pub parent_id: Option<DbId>,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// DTO for editing a response.
#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub content: Option<String>,
    pub citations: Option<Vec<Citation>>,
}
