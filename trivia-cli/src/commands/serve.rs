//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use trivia_server::db::{create_pool_with_options, InMemoryStore, PgStore, TriviaStore};
use trivia_server::http::{run_server, ServerConfig};

/// Store backend for the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// PostgreSQL at DATABASE_URL
    Postgres,
    /// Process memory seeded with the standard categories (data is lost on exit)
    Memory,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Store backend
    #[arg(long, value_enum, default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn TriviaStore>> {
    match args.store {
        StoreKind::Postgres => {
            let database_url = args
                .database_url
                .as_deref()
                .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

            let pool = create_pool_with_options(database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;

            tracing::info!(max_connections = args.max_connections, "Connected to PostgreSQL");
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(InMemoryStore::with_default_categories().await))
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting trivia server on {}", args.bind);

    let store = open_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
