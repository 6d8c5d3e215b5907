//! Layered configuration loading and the settings it produces.

mod builder;
mod env;
mod error;
mod file;
mod resolve;
mod settings;

pub use builder::Config;
pub use error::ConfigError;
pub use settings::{PluginSettings, Settings};
