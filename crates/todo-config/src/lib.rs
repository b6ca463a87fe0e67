//! # Todo Config
//!
//! Layered configuration for the todo API: TOML files under `./config`
//! overridden by `TODO__`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
