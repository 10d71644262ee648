//! Architecture description model for archdot.
//!
//! - [`types`]: groups, environments, services and the [`Architecture`] root
//! - [`config`]: loading an [`Architecture`] from JSON or TOML files

pub mod config;
pub mod types;

pub use config::{ConfigFormat, load_architecture, parse_architecture};
pub use types::{
    Architecture, Environment, EnvironmentId, GroupId, LogicalGroup, Service, ServiceId,
};
