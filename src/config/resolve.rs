//! `${path.to.field}` expansion inside string values.
//!
//! Lets directory overrides refer to other settings, e.g. `etc = "${root}/config"`.
//! `$$` produces a literal `$`.

use std::collections::HashMap;

use super::ConfigError;
use toml::{Table, Value};

const MAX_DEPTH: usize = 32;

/// Expands every reference in `table`.
///
/// Referenced strings are expanded before substitution, so chains resolve in one
/// pass and escaped text is never re-scanned. Each referenced path is expanded
/// once and reused. A chain deeper than `MAX_DEPTH` is treated as circular.
pub(super) fn resolve_references(table: &mut Table) -> Result<(), ConfigError> {
    let snapshot = table.clone();
    let mut resolver = Resolver {
        root: &snapshot,
        cache: HashMap::new(),
    };
    resolver.expand_table(table)
}

struct Resolver<'a> {
    root: &'a Table,
    cache: HashMap<String, String>,
}

impl Resolver<'_> {
    fn expand_table(&mut self, table: &mut Table) -> Result<(), ConfigError> {
        for (_, value) in table.iter_mut() {
            self.expand_value(value)?;
        }
        Ok(())
    }

    fn expand_value(&mut self, value: &mut Value) -> Result<(), ConfigError> {
        match value {
            Value::String(s) => *s = self.expand_string(s, 0)?,
            Value::Table(t) => self.expand_table(t)?,
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.expand_value(item)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn expand_string(&mut self, s: &str, depth: usize) -> Result<String, ConfigError> {
        if depth > MAX_DEPTH {
            return Err(ConfigError::CircularReference);
        }

        let mut out = String::with_capacity(s.len());
        let mut rest = s;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                out.push('$');
                rest = tail;
            } else if let Some(body) = after.strip_prefix('{') {
                let end = body.find('}').ok_or(ConfigError::UnclosedReference)?;
                out.push_str(&self.lookup(&body[..end], depth)?);
                rest = &body[end + 1..];
            } else {
                out.push('$');
                rest = after;
            }
        }
        out.push_str(rest);

        Ok(out)
    }

    fn lookup(&mut self, path: &str, depth: usize) -> Result<String, ConfigError> {
        if let Some(resolved) = self.cache.get(path) {
            return Ok(resolved.clone());
        }
        if path.split('.').any(str::is_empty) {
            return Err(ConfigError::InvalidReferencePath(path.to_string()));
        }

        let root = self.root;
        let not_found = || ConfigError::ReferenceNotFound(path.to_string());
        let mut parts = path.split('.');
        let first = parts.next().ok_or_else(not_found)?;
        let mut current = root.get(first).ok_or_else(not_found)?;
        for part in parts {
            current = current
                .as_table()
                .and_then(|t| t.get(part))
                .ok_or_else(not_found)?;
        }

        let resolved = match current {
            Value::String(s) => self.expand_string(s, depth + 1)?,
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Datetime(dt) => dt.to_string(),
            Value::Array(_) | Value::Table(_) => {
                return Err(ConfigError::NonScalarReference(path.to_string()))
            }
        };
        self.cache.insert(path.to_string(), resolved.clone());
        Ok(resolved)
    }
}
