//! Shared utilities for stockcard
//!
//! This crate provides common functionality used across the stockcard workspace,
//! including logging setup and process-level configuration.

pub mod config;
pub mod logging;

pub use config::{Config, LogFormat};
pub use logging::{init_tracing, init_tracing_with};
