//! Middleware modules.

pub mod error;
pub mod read_only;
