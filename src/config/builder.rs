use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::env::load_env_vars;
use super::file::load_config_file;
use super::resolve::resolve_references;
use super::ConfigError;

#[derive(Debug)]
enum Layer {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

/// Builder that layers TOML files and environment variables into one settings value.
///
/// Layers are merged in registration order, later ones winning. Tables merge
/// recursively; any other value is replaced outright. After merging,
/// `${path.to.field}` references in strings are expanded (`$$` escapes a `$`).
///
/// ## Example
///
/// ```no_run
/// use dirconf::{Config, Settings};
///
/// // /etc/sample3.toml:
/// //   root = "/opt/sample3"
/// //   [dirs]
/// //   etc = "${root}/config"
/// let settings: Settings = Config::builder()
///     .with_file("/etc/sample3.toml", true)
///     .with_env("DIRCONF", "__")
///     .build()?;
/// # Ok::<(), dirconf::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    layers: Vec<Layer>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file.
    ///
    /// A missing `required` file fails the build; a missing optional one is skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds environment variables named `<prefix><separator><path...>`.
    ///
    /// With prefix `DIRCONF` and separator `__`, `DIRCONF__PLUGINS__SUFFIX=.so`
    /// sets `plugins.suffix`. Path segments are lowercased; values are kept as strings.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.layers.push(Layer::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    /// Loads, merges, resolves and deserializes every layer.
    pub fn build<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let mut merged = toml::Table::new();

        for layer in self.layers {
            match layer {
                Layer::File { path, required } => {
                    if let Some(table) = load_config_file(&path, required)? {
                        deep_merge(&mut merged, table);
                    }
                }
                Layer::Env { prefix, separator } => {
                    load_env_vars(&mut merged, &prefix, &separator);
                }
            }
        }

        resolve_references(&mut merged)?;

        toml::Value::Table(merged)
            .try_into()
            .map_err(ConfigError::DeserializeError)
    }
}

fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
