//! Authentication primitives.
//!
//! - [`jwt`] -- validation of access tokens issued by the user service.

pub mod jwt;
