//! # Repodex - In-memory repository catalog
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryRepositoryStore (adapter)              │
//! │    ├── Creates: UuidGenerator (adapter)                        │
//! │    ├── Creates: RepositoryService (use case)                   │
//! │    └── Runs: RepositoryServer (HTTP controller)                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use clap::Parser;
use repodex_adapter::controller::http::{AppState, CliArgs, RepositoryServer, ServerConfig};
use repodex_adapter::gateway::uuid_generator::UuidGenerator;
use repodex_adapter::repository::in_memory::InMemoryRepositoryStore;
use repodex_usecase::RepositoryService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("Invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    // Adapters (the store could be swapped for a persistent one)
    let store = InMemoryRepositoryStore::new();
    let ids = UuidGenerator::new();

    // Use case
    let repositories = RepositoryService::new(store, ids);

    let config = ServerConfig::from(&args);
    info!(addr = %config.socket_addr(), "Repodex starting");

    RepositoryServer::new(AppState::new(repositories), config.clone())
        .run()
        .await
        .with_context(|| format!("Server on {} failed", config.socket_addr()))?;

    Ok(())
}
