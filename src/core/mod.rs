//! Core types shared across the crate
//!
//! - `PermissionError` - Error types
//! - `PermissionsConfig` - Cache configuration

pub mod config;
pub mod error;

pub use config::PermissionsConfig;
pub use error::{PermissionError, PermissionResult};
