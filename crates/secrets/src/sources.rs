//! Local secret sources for development: environment variables and a JSON
//! config file.
//!
//! Both probes are soft: anything short of a complete, valid record is
//! reported as `None` so the resolver can fall through to the next source.

use beeutil_core::constants::{DEFAULT_CONFIG_FILE, ENV_FIELD_MAP};
use beeutil_core::CredentialsRecord;
use std::path::Path;

use crate::validate::validate;

/// Build a record from the `PLUGIN_AWS_*` environment variables.
///
/// Returns `None` unless all four are set and non-empty. Values are used
/// as-is; nothing is decrypted.
pub fn load_from_env() -> Option<CredentialsRecord> {
    let mut record = CredentialsRecord::new();
    for (variable, field) in ENV_FIELD_MAP {
        match std::env::var(variable) {
            Ok(value) if !value.is_empty() => {
                record.insert(field, value);
            }
            _ => {
                tracing::debug!(
                    variable = %variable,
                    "Environment secrets incomplete, skipping"
                );
                return None;
            }
        }
    }
    Some(record)
}

/// Read a record from a JSON object file, `secrets.json` by default.
///
/// A missing, unreadable, unparsable or incomplete file yields `None`.
pub fn load_from_file(path: Option<&Path>) -> Option<CredentialsRecord> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No local secrets file");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read secrets file");
            return None;
        }
    };

    let record: CredentialsRecord = match serde_json::from_str(&contents) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed secrets file");
            return None;
        }
    };

    if let Err(e) = validate(&record) {
        tracing::warn!(path = %path.display(), error = %e, "Ignoring incomplete secrets file");
        return None;
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeutil_core::constants::{ENV_AWS_BUCKET, ENV_AWS_KEY, ENV_AWS_REGION, ENV_AWS_SECRET};
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        for (variable, _) in ENV_FIELD_MAP {
            env::remove_var(variable);
        }
    }

    #[test]
    #[serial]
    fn test_env_complete() {
        clear_env();
        env::set_var(ENV_AWS_KEY, "k1");
        env::set_var(ENV_AWS_SECRET, "s1");
        env::set_var(ENV_AWS_BUCKET, "b1");
        env::set_var(ENV_AWS_REGION, "r1");

        let record = load_from_env().unwrap();
        assert_eq!(record.aws_key(), Some("k1"));
        assert_eq!(record.aws_secret(), Some("s1"));
        assert_eq!(record.aws_bucket(), Some("b1"));
        assert_eq!(record.aws_region(), Some("r1"));
        assert_eq!(record.len(), 4);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_partial_is_absent() {
        clear_env();
        env::set_var(ENV_AWS_KEY, "k1");
        env::set_var(ENV_AWS_SECRET, "s1");
        env::set_var(ENV_AWS_BUCKET, "b1");

        assert!(load_from_env().is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_empty_value_is_absent() {
        clear_env();
        env::set_var(ENV_AWS_KEY, "k1");
        env::set_var(ENV_AWS_SECRET, "");
        env::set_var(ENV_AWS_BUCKET, "b1");
        env::set_var(ENV_AWS_REGION, "r1");

        assert!(load_from_env().is_none());

        clear_env();
    }

    #[test]
    fn test_file_valid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.json");
        fs::write(
            &path,
            r#"{"aws_key":"k","aws_secret":"s","aws_bucket":"b","aws_region":"r","extra":"x"}"#,
        )
        .unwrap();

        let record = load_from_file(Some(&path)).unwrap();
        assert_eq!(record.aws_bucket(), Some("b"));
        assert_eq!(record.get("extra"), Some("x"));
    }

    #[test]
    fn test_file_missing_is_absent() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_file(Some(&dir.path().join("nope.json"))).is_none());
    }

    #[test]
    fn test_file_malformed_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_from_file(Some(&path)).is_none());

        fs::write(&path, r#"["aws_key"]"#).unwrap();
        assert!(load_from_file(Some(&path)).is_none());
    }

    #[test]
    fn test_file_incomplete_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.json");
        fs::write(&path, r#"{"aws_key":"k","aws_secret":"s"}"#).unwrap();
        assert!(load_from_file(Some(&path)).is_none());
    }

    #[test]
    fn test_directory_path_is_absent() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_file(Some(dir.path())).is_none());
    }
}
