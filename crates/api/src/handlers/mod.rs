//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input with `commonground_core`, delegate persistence to
//! the repositories in `commonground_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod discussions;
pub mod responses;
