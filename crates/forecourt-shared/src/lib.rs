//! # Forecourt Shared
//!
//! Wire types shared between the API server and its clients: the response
//! envelope, the error body, and the request/response DTOs.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
