//! Common utilities shared by the user store crates.
//!
//! This crate provides:
//! - Unified error handling for store operations
//! - Database connection configuration

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
