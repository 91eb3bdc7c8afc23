//! Inbound Adapters

pub mod http;
