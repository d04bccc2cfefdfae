//! Configuration types for Grafana provisioning.
//!
//! Responsibilities:
//! - Define the connection, authentication, and provisioning settings.
//! - Define the on-disk JSON config file schema.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader` module).
//! - Network access (see the client crate).

mod auth;
mod connection;
mod file;
mod provisioning;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use file::SetupFile;
pub use provisioning::{DatasourceConfig, ProvisioningConfig};
