//! Ports Layer - Trait definitions
//!
//! Reference: Architecture - Hexagonal Architecture

pub mod inbound;

pub use inbound::SearchApi;
