//! trivia-server: HTTP API for trivia questions and categories
//!
//! Serves paginated questions, category listings, keyword search and a
//! random-question quiz endpoint over a relational store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{InMemoryStore, PgStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
