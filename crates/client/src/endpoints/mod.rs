//! REST API endpoint implementations.
//!
//! Each function issues exactly one request; callers decide whether and how
//! to retry.

mod dashboards;
mod datasources;
mod health;
mod request;

pub use dashboards::import_dashboard;
pub use datasources::create_datasource;
pub use health::get_health;
pub use request::send_request;
