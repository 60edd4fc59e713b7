//! HTTP server layer
//!
//! Axum server with:
//! - CORS (all origins, fixed headers and methods)
//! - Request tracing
//! - Graceful shutdown
//! - Fixed-shape JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
