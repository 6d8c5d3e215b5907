use toml::{Table, Value};

/// Merges environment variables starting with `<prefix><separator>` into `table`.
///
/// `DIRCONF__DIRS__ETC=/etc/app` with separator `__` lands at `dirs.etc`.
/// Path segments are lowercased. Values stay strings: every setting is a path
/// or a name, and `2024` or `1.0` are valid directory names.
pub(super) fn load_env_vars(table: &mut Table, prefix: &str, separator: &str) {
    if separator.is_empty() {
        tracing::warn!(prefix, "ignoring environment source with empty separator");
        return;
    }
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    load_from(table, prefix, separator, vars);
}

fn load_from(
    table: &mut Table,
    prefix: &str,
    separator: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) {
    let prefix_with_sep = format!("{prefix}{separator}");

    for (key, value) in vars {
        let Some(path_str) = key.strip_prefix(&prefix_with_sep) else {
            continue;
        };
        if path_str.is_empty() {
            continue;
        }

        let path: Vec<String> = path_str
            .split(separator)
            .map(|s| s.to_lowercase())
            .collect();
        if path.iter().any(String::is_empty) {
            tracing::warn!("ignoring malformed environment variable {key}");
            continue;
        }

        tracing::trace!("config override from {key}");
        insert_at_path(table, &path, Value::String(value));
    }
}

fn insert_at_path(table: &mut Table, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = table;
    for part in parents {
        let slot = current
            .entry(part.clone())
            .or_insert_with(|| Value::Table(Table::new()));
        if !slot.is_table() {
            *slot = Value::Table(Table::new());
        }
        match slot {
            Value::Table(nested) => current = nested,
            _ => return,
        }
    }
    current.insert(last.clone(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_nested_path() {
        let mut table = Table::new();
        load_from(
            &mut table,
            "APP",
            "__",
            vars(&[("APP__DIRS__ETC", "/etc/app"), ("OTHER__ROOT", "/x")]),
        );

        assert_eq!(table["dirs"]["etc"].as_str(), Some("/etc/app"));
        assert!(!table.contains_key("root"));
    }

    #[test]
    fn test_replaces_scalar_parent() {
        let mut table: Table = toml::from_str("dirs = 3").unwrap();
        load_from(&mut table, "APP", "__", vars(&[("APP__DIRS__BIN", "sbin")]));
        assert_eq!(table["dirs"]["bin"].as_str(), Some("sbin"));
    }

    #[test]
    fn test_skips_malformed_keys() {
        let mut table = Table::new();
        load_from(
            &mut table,
            "APP",
            "__",
            vars(&[("APP__", "x"), ("APP__DIRS____ETC", "y")]),
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_values_stay_strings() {
        let mut table = Table::new();
        load_from(
            &mut table,
            "APP",
            "__",
            vars(&[
                ("APP__DIRS__PLUGINS", "1.0"),
                ("APP__DIRS__VAR", "2024"),
                ("APP__PLUGINS__SUFFIX", "true"),
            ]),
        );

        assert_eq!(table["dirs"]["plugins"].as_str(), Some("1.0"));
        assert_eq!(table["dirs"]["var"].as_str(), Some("2024"));
        assert_eq!(table["plugins"]["suffix"].as_str(), Some("true"));
    }
}
