//! # Repodex Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP API)
//! - `gateway/` - Outbound adapters (id generation)
//! - `repository/` - Store implementations

pub mod controller;
pub mod gateway;
pub mod repository;
