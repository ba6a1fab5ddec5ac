//! Domain logic for the discussion service.
//!
//! This crate has no I/O: it holds shared types, the domain error enum,
//! input validation, and the response threading algorithm so that the
//! repository and HTTP layers can share one implementation.

pub mod discussions;
pub mod error;
pub mod pagination;
pub mod responses;
pub mod roles;
pub mod threading;
pub mod types;
