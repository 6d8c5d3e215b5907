//! Directory resolution and plugin discovery for an installed application.

mod error;
mod plugins;
mod role;

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

pub use error::DirectoryError;
pub use plugins::{PluginFilter, DEFAULT_PLUGIN_SUFFIX};
pub use role::DirRole;

/// Resolves logical directory names to paths under an installation root.
///
/// Resolution is lenient: a name without an override maps to `<root>/<name>`,
/// whether or not it is one of the standard [`DirRole`]s. Nothing here touches
/// the filesystem except [`find_plugins`](Self::find_plugins).
///
/// ## Example
///
/// ```
/// use dirconf::DirectoryConfig;
/// use std::path::Path;
///
/// let dirs = DirectoryConfig::new("/opt/sample2");
/// assert_eq!(dirs.bin_dir(), Path::new("/opt/sample2/bin"));
/// assert_eq!(dirs.get_dir("etc"), Path::new("/opt/sample2/etc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    root: PathBuf,
    overrides: BTreeMap<String, PathBuf>,
    filter: PluginFilter,
}

impl DirectoryConfig {
    /// Creates a resolver rooted at `root` with no overrides and the default plugin filter.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: BTreeMap::new(),
            filter: PluginFilter::default(),
        }
    }

    /// Maps `name` to `path` instead of `<root>/<name>`.
    ///
    /// Relative paths are taken relative to the root; absolute paths are used as-is.
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let resolved = self.root.join(path);
        self.overrides.insert(name.into(), resolved);
        self
    }

    /// Replaces the rule deciding which files count as plugins.
    #[must_use]
    pub fn with_plugin_filter(mut self, filter: PluginFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the installation root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plugin_filter(&self) -> &PluginFilter {
        &self.filter
    }

    /// Returns the binary-install directory, `<root>/bin` by default.
    pub fn bin_dir(&self) -> PathBuf {
        self.dir(DirRole::Bin)
    }

    /// Returns the directory scanned by [`find_plugins`](Self::find_plugins).
    pub fn plugin_dir(&self) -> PathBuf {
        self.dir(DirRole::Plugins)
    }

    /// Typed form of [`get_dir`](Self::get_dir).
    pub fn dir(&self, role: DirRole) -> PathBuf {
        self.get_dir(role.as_str())
    }

    /// Returns the path for a logical directory name.
    ///
    /// The name is always joined below the root: root and drive prefixes in it
    /// are dropped, so `"/etc"` resolves like `"etc"`. An empty name resolves to
    /// the root itself.
    pub fn get_dir(&self, name: &str) -> PathBuf {
        if let Some(path) = self.overrides.get(name) {
            return path.clone();
        }

        let mut path = self.root.clone();
        for component in Path::new(name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                other => path.push(other),
            }
        }
        path
    }

    /// Appends the plugins found in [`plugin_dir`](Self::plugin_dir) to `out`.
    ///
    /// Newly found names are appended in lexicographic order after whatever `out`
    /// already holds. Returns how many were appended. A missing plugin directory
    /// yields `Ok(0)`; any other failure to list it is a [`DirectoryError::Access`].
    pub fn find_plugins(&self, out: &mut Vec<String>) -> Result<usize, DirectoryError> {
        let dir = self.plugin_dir();
        let Some(found) = plugins::scan(&dir, &self.filter)? else {
            return Ok(0);
        };

        let count = found.len();
        tracing::debug!("found {} plugins in {}", count, dir.display());
        out.extend(found);
        Ok(count)
    }

    /// Returns a fresh list of the plugins found in [`plugin_dir`](Self::plugin_dir).
    pub fn plugins(&self) -> Result<Vec<String>, DirectoryError> {
        let mut list = Vec::new();
        self.find_plugins(&mut list)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_standard_layout() {
        let dirs = DirectoryConfig::new("/opt/sample2");
        assert_eq!(dirs.bin_dir(), PathBuf::from("/opt/sample2/bin"));
        assert_eq!(dirs.get_dir("etc"), PathBuf::from("/opt/sample2/etc"));
        assert_eq!(dirs.plugin_dir(), PathBuf::from("/opt/sample2/plugins"));
    }

    #[test]
    fn test_bin_dir_matches_get_dir() {
        for root in ["/opt/a", "/usr/local", "relative/root"] {
            let dirs = DirectoryConfig::new(root);
            assert_eq!(dirs.bin_dir(), dirs.get_dir("bin"));
        }
    }

    #[test]
    fn test_get_dir_is_repeatable() {
        let dirs = DirectoryConfig::new("/opt/app").with_override("etc", "/etc/app");
        assert_eq!(dirs.get_dir("etc"), dirs.get_dir("etc"));
        assert_eq!(dirs.get_dir("custom"), dirs.get_dir("custom"));
    }

    #[test]
    fn test_unknown_name_is_joined() {
        let dirs = DirectoryConfig::new("/opt/app");
        assert_eq!(dirs.get_dir("data/cache"), PathBuf::from("/opt/app/data/cache"));
    }

    #[test]
    fn test_empty_name_is_root() {
        let dirs = DirectoryConfig::new("/opt/app");
        assert_eq!(dirs.get_dir(""), PathBuf::from("/opt/app"));
    }

    #[test]
    fn test_absolute_name_stays_under_root() {
        let dirs = DirectoryConfig::new("/opt/sample2");
        assert_eq!(dirs.get_dir("/etc"), PathBuf::from("/opt/sample2/etc"));
        assert_eq!(dirs.get_dir("//data/./cache"), PathBuf::from("/opt/sample2/data/cache"));
        assert_eq!(dirs.get_dir("/"), PathBuf::from("/opt/sample2"));
    }

    #[test]
    fn test_overrides() {
        let dirs = DirectoryConfig::new("/opt/app")
            .with_override("etc", "/etc/app")
            .with_override("bin", "sbin");
        assert_eq!(dirs.get_dir("etc"), PathBuf::from("/etc/app"));
        assert_eq!(dirs.bin_dir(), PathBuf::from("/opt/app/sbin"));
        assert_eq!(dirs.dir(DirRole::Lib), PathBuf::from("/opt/app/lib"));
    }

    #[test]
    fn test_find_plugins_appends_after_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let plugin_dir = tmp.path().join("plugins");
        fs::create_dir(&plugin_dir).unwrap();
        fs::write(plugin_dir.join("b.plugin"), b"").unwrap();
        fs::write(plugin_dir.join("a.plugin"), b"").unwrap();

        let dirs = DirectoryConfig::new(tmp.path());
        let mut out = vec!["existing".to_string()];
        let count = dirs.find_plugins(&mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(out, vec!["existing", "a.plugin", "b.plugin"]);
    }

    #[test]
    fn test_relocated_plugin_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let elsewhere = tmp.path().join("ext");
        fs::create_dir(&elsewhere).unwrap();
        fs::write(elsewhere.join("x.so"), b"").unwrap();

        let dirs = DirectoryConfig::new("/nonexistent/root")
            .with_override("plugins", &elsewhere)
            .with_plugin_filter(PluginFilter::new(".so"));

        assert_eq!(dirs.plugins().unwrap(), vec!["x.so"]);
    }
}
