use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dirs::{DirectoryConfig, PluginFilter, DEFAULT_PLUGIN_SUFFIX};
use crate::Error;

/// Settings that describe an installation's directory layout.
///
/// Every field is optional in the source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Installation root. Derived from the running executable when absent.
    pub root: Option<PathBuf>,
    /// Per-name overrides; relative paths are taken relative to the root.
    pub dirs: BTreeMap<String, PathBuf>,
    pub plugins: PluginSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub suffix: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_PLUGIN_SUFFIX.to_string(),
        }
    }
}

impl Settings {
    /// Returns the configured root, or the one implied by the running executable.
    pub fn resolve_root(&self) -> Result<PathBuf, Error> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let exe = std::env::current_exe().map_err(|_| Error::UnknownRoot)?;
        root_from_exe(&exe).ok_or(Error::UnknownRoot)
    }

    pub fn directory_config(&self) -> Result<DirectoryConfig, Error> {
        let root = self.resolve_root()?;
        let dirs = self
            .dirs
            .iter()
            .fold(DirectoryConfig::new(root), |dirs, (name, path)| {
                dirs.with_override(name.as_str(), path)
            })
            .with_plugin_filter(PluginFilter::new(self.plugins.suffix.as_str()));
        Ok(dirs)
    }
}

/// `<root>/bin/prog` -> `<root>`.
fn root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
