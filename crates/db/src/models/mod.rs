//! Row and DTO types, one module per table.

pub mod discussion;
pub mod response;
