//! # Blogger Shared
//!
//! Wire types shared by the API server and its clients (including the integration suite).

pub mod dto;
pub mod response;

pub use dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::ErrorResponse;
