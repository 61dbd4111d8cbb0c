//! # sk-core
//!
//! Core suggestion engine for suggest-kit.
//!
//! This crate provides:
//! - Configuration loading from `.suggest-kit/` directory
//! - A query-keyed candidate cache
//! - Candidate sources over an abstract transport, with a cache-first resolver
//! - The selection state machine and the suggestion controller
//! - An async runtime that drives a controller from host input events
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`cache`]: Candidate cache
//! - [`source`]: Candidate sources, transports and resolution
//! - [`selection`]: Keyboard-driven selection state
//! - [`controller`]: The suggestion controller
//! - [`display`]: Display surface and text target contracts
//! - [`runtime`]: Event loop around a controller

pub mod cache;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod highlight;
pub mod history;
pub mod runtime;
pub mod sanitize;
pub mod selection;
pub mod source;

pub use controller::{CommitOutcome, EventStatus, RejectReason, SuggestController};
pub use error::SuggestError;
pub use runtime::SuggestRuntime;
