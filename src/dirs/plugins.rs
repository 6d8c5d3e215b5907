//! Plugin discovery.

use std::fs;
use std::io;
use std::path::Path;

use super::DirectoryError;

/// The default file suffix that marks a plugin artifact.
pub const DEFAULT_PLUGIN_SUFFIX: &str = ".plugin";

/// Decides which entries of the plugin directory count as plugins.
///
/// An entry qualifies when it is a regular file (symlinks are followed),
/// is not hidden, and its name ends with the suffix and is longer than it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginFilter {
    suffix: String,
}

impl PluginFilter {
    /// Creates a filter accepting files that end with `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Returns the file suffix that marks a plugin.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Checks the file name alone; the caller is responsible for the file-type check.
    pub fn matches_name(&self, name: &str) -> bool {
        !name.starts_with('.') && name.len() > self.suffix.len() && name.ends_with(&self.suffix)
    }
}

impl Default for PluginFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PLUGIN_SUFFIX)
    }
}

/// Lists `dir` and returns the names of qualifying plugins, sorted.
///
/// Returns `Ok(None)` if the directory doesn't exist.
pub(crate) fn scan(dir: &Path, filter: &PluginFilter) -> Result<Option<Vec<String>>, DirectoryError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("plugin directory {} does not exist", dir.display());
            return Ok(None);
        }
        Err(e) => return Err(DirectoryError::access(dir, e)),
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DirectoryError::access(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!(
                "skipping non UTF-8 entry {:?} in {}",
                file_name,
                dir.display()
            );
            continue;
        };

        if !filter.matches_name(name) {
            tracing::trace!(name, "not a plugin");
            continue;
        }
        if !entry.path().is_file() {
            tracing::trace!(name, "not a regular file");
            continue;
        }

        tracing::trace!(name, "found plugin");
        found.push(name.to_owned());
    }

    found.sort();
    Ok(Some(found))
}
