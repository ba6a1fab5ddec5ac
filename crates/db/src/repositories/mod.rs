//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod discussion_repo;
pub mod response_repo;

pub use discussion_repo::DiscussionRepo;
pub use response_repo::ResponseRepo;
