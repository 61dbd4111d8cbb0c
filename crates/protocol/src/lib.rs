//! # sk-protocol
//!
//! Core protocol definitions and data models for suggest-kit.
//!
//! This crate defines all shared data structures used for:
//! - Candidate records, both in their wire form and their resolved form
//! - The suggestion settings read from `.suggest-kit/config.toml`
//! - The remote request sent to a candidate backend
//! - Input events and signals exchanged between a host and the controller
//!
//! ## Modules
//!
//! - [`candidate`]: Candidate and raw (wire) candidate structures
//! - [`config_models`]: Suggestion settings
//! - [`request`]: Remote request description
//! - [`ipc`]: Input events, navigation keys and emitted signals
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and ts-rs
//! - TypeScript generation: Host-facing types derive `TS` for browser hosts
//! - Independent compilation: No dependencies on other suggest-kit crates

pub mod candidate;
pub mod config_models;
pub mod ipc;
pub mod request;

// Re-export all public types for convenience
pub use candidate::*;
pub use config_models::*;
pub use ipc::*;
pub use request::*;
