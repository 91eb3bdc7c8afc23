//! Outbound Adapters

pub mod uuid_generator;
