//! Configuration management for Grafana provisioning.
//!
//! This crate provides types and loaders for the Grafana connection and
//! provisioning settings, sourced from defaults, a JSON config file,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, DatasourceConfig, ProvisioningConfig,
    SetupFile,
};
