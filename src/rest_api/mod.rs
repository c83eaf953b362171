//! # bookdb REST API Module
//!
//! HTTP surface for the book catalog: one handler per operation, typed
//! response envelopes, and a single error taxonomy mapped to status codes at
//! the boundary.

pub mod config;
pub mod errors;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{
    BookEnvelope, DeleteEnvelope, ErrorEnvelope, ListEnvelope, MutationEnvelope, SearchEnvelope,
    Status,
};
pub use server::{router, serve, shared, CreateBookRequest, SharedStore};
