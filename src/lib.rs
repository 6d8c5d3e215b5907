pub mod config;
pub mod context;
pub mod dirs;
mod error;
pub mod logging;
pub mod report;

pub use config::{Config, ConfigError, Settings};
pub use context::AppContext;
pub use dirs::{DirRole, DirectoryConfig, DirectoryError, PluginFilter};
pub use error::Error;
