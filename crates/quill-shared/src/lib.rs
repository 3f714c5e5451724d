//! # Quill Shared
//!
//! Wire types shared between the server and its clients: request/response
//! DTOs for the posts API and the RFC 7807 error response shape.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
