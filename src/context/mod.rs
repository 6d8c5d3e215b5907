//! The application context passed to everything that needs directory information.

use std::path::Path;

use crate::config::{Config, Settings};
use crate::dirs::DirectoryConfig;
use crate::Error;

/// Prefix of the environment variables layered over the config file.
pub const ENV_PREFIX: &str = "DIRCONF";
/// Separator between path segments in those variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Loaded settings plus the [`DirectoryConfig`] built from them.
///
/// Constructed once and handed to callers explicitly; there is no global instance.
///
/// ## Example
///
/// ```no_run
/// use dirconf::{AppContext, Config, Settings};
///
/// let ctx = AppContext::builder()
///     .with_settings(
///         Config::builder()
///             .with_file("dirconf.toml", false)
///             .build::<Settings>()?,
///     )
///     .build()?;
///
/// println!("bin is: {}", ctx.dirs().bin_dir().display());
/// # Ok::<(), dirconf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    settings: Settings,
    dirs: DirectoryConfig,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { settings: None }
    }

    /// Loads the optional `config_file`, layers `DIRCONF__*` variables over it and builds a context.
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self, Error> {
        let settings = Config::builder()
            .with_file(config_file, false)
            .with_env(ENV_PREFIX, ENV_SEPARATOR)
            .build::<Settings>()?;
        Self::builder().with_settings(settings).build()
    }

    /// Returns the settings the context was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the directory resolver.
    pub fn dirs(&self) -> &DirectoryConfig {
        &self.dirs
    }
}

/// Builder for an [`AppContext`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    settings: Option<Settings>,
}

impl AppContextBuilder {
    /// Attaches the loaded settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Builds the context, resolving the installation root.
    ///
    /// Fails with [`Error::MissingConfig`] if no settings were supplied.
    pub fn build(self) -> Result<AppContext, Error> {
        let settings = self.settings.ok_or(Error::MissingConfig)?;
        let dirs = settings.directory_config()?;
        tracing::debug!(root = %dirs.root().display(), "application context ready");
        Ok(AppContext { settings, dirs })
    }
}
