//! TOML configuration files.

use std::path::Path;

use super::ConfigError;

/// Loads and parses a TOML config file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(super) fn load_config_file(
    path: &Path,
    required: bool,
) -> Result<Option<toml::Table>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(required, "config file {} not found", path.display());
            return if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            };
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("loaded config file {}", path.display());
    Ok(Some(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_loads_root_setting() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "root = \"/opt/sample3\"").unwrap();

        let table = load_config_file(file.path(), true).unwrap().unwrap();
        assert_eq!(table["root"].as_str(), Some("/opt/sample3"));
    }

    #[test]
    fn test_required_missing() {
        let result = load_config_file(Path::new("/nonexistent/dirconf.toml"), true);
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_optional_missing() {
        let result = load_config_file(Path::new("/nonexistent/dirconf.toml"), false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "root = ").unwrap();

        let result = load_config_file(file.path(), true);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_directory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = load_config_file(tmp.path(), false);
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
