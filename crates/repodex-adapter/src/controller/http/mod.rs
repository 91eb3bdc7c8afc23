//! HTTP API for Repodex.
//!
//! Exposes the repository collection as JSON over five REST endpoints:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/repositories` | [`handlers::handle_list`] |
//! | POST | `/repositories` | [`handlers::handle_create`] |
//! | PUT | `/repositories/{id}` | [`handlers::handle_update`] |
//! | DELETE | `/repositories/{id}` | [`handlers::handle_delete`] |
//! | POST | `/repositories/{id}/like` | [`handlers::handle_like`] |

mod config;
mod error;
pub mod handlers;
mod middleware;
mod request;
mod response;
mod server;
pub mod validation;

pub use config::{CliArgs, ServerConfig};
pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::{log_requests, CorsLayer};
pub use server::{build_router, RepositoryServer};
