//! Port Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits say what the domain needs from the outside world,
//! not how it is provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RepositoryStore │  InMemoryRepositoryStore
//! trait IdGenerator     │  UuidGenerator
//! ```

pub mod id_generator;
pub mod repository_store;
