//! Configuration loading and management.
//!
//! This module provides functionality to load and parse the suggestion
//! settings from the `.suggest-kit/` directory structure.

pub mod error;
pub mod loader;
pub mod models;
