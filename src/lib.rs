pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::CommandFetcher;
pub use config::{ListConfig, TomlConfig};
pub use crate::core::{ListManager, ListPath};
pub use domain::{model::PackageList, ports::Fetcher};
pub use utils::error::{GogetError, Result};
