//! Store layer - connection pool and question/category storage
//!
//! # Design Principles
//!
//! - Handlers receive the store through `AppState`; there is no global connection
//! - One logical write per request, no multi-step transactions
//! - Failures come back as `StoreError`; the HTTP layer decides the status

pub mod pool;
pub mod store;
pub mod postgres;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use store::{StoreError, TriviaStore};
pub use postgres::PgStore;
pub use memory::InMemoryStore;
