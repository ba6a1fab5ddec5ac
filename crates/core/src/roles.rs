//! Role names carried in access tokens and the permission checks built on them.

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_USER: &str = "user";

/// Whether the role may remove other people's content.
pub fn can_moderate(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_MODERATOR
}

/// Whether a caller may delete a discussion or response owned by `owner_id`.
pub fn can_delete(owner_id: DbId, user_id: DbId, role: &str) -> bool {
    owner_id == user_id || can_moderate(role)
}
