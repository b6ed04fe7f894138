//! Config use cases: list every setting, read one, or assign several.
//!
//! A missing config file is not an error here: every use case starts from
//! [`Config::default()`] in that case, so `set` on a fresh machine creates the
//! file.  Any other load failure (unreadable file, bad YAML) is reported.
//!
//! Assignments are written `KEY=VALUE`; several may be joined with commas in a
//! single argument, e.g. `timeout=5,debug=true`.

use crictl_config::{Config, ConfigError, ConfigKey, ConfigStore, KeyError};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for the config use cases.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    /// An assignment argument had no `=`.
    #[error("malformed assignment {0:?}: expected KEY=VALUE")]
    MalformedAssignment(String),
}

/// Loads the stored config, or the zero config if none has been saved yet.
///
/// # Errors
///
/// Returns [`CommandError::Store`] for any load failure other than "not found".
pub fn load_or_default<S: ConfigStore>(store: &S) -> Result<Config, CommandError> {
    match store.load() {
        Ok(config) => Ok(config),
        Err(e) if e.is_not_found() => {
            debug!("no config file yet, starting from defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns every key with its current value, in file order.
///
/// # Errors
///
/// See [`load_or_default`].
pub fn list<S: ConfigStore>(store: &S) -> Result<Vec<(ConfigKey, String)>, CommandError> {
    Ok(load_or_default(store)?.entries())
}

/// Returns the current value of `key`.
///
/// # Errors
///
/// Returns [`CommandError::Key`] if `key` names no setting, or a load error.
pub fn get<S: ConfigStore>(store: &S, key: &str) -> Result<String, CommandError> {
    let key: ConfigKey = key.parse()?;
    Ok(load_or_default(store)?.get(key))
}

/// Splits `KEY=VALUE[,KEY=VALUE]` arguments into parsed key/value pairs.
///
/// Only the first `=` separates key from value, so values may contain `=`.
///
/// # Errors
///
/// Returns [`CommandError::MalformedAssignment`] for a segment without `=`
/// (including an empty segment), or [`CommandError::Key`] for an unknown key.
pub fn parse_assignments<A: AsRef<str>>(
    args: &[A],
) -> Result<Vec<(ConfigKey, String)>, CommandError> {
    let mut pairs = Vec::new();
    for segment in args.iter().flat_map(|arg| arg.as_ref().split(',')) {
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| CommandError::MalformedAssignment(segment.to_string()))?;
        let key: ConfigKey = key.trim().parse()?;
        pairs.push((key, value.to_string()));
    }
    Ok(pairs)
}

/// Applies every assignment in `args` and saves the result.
///
/// Nothing is written unless all assignments parse and convert.
///
/// # Errors
///
/// Returns a parse, key or store error; on error the stored config is
/// unchanged.
pub fn set<S: ConfigStore, A: AsRef<str>>(store: &S, args: &[A]) -> Result<Config, CommandError> {
    let assignments = parse_assignments(args)?;
    let mut config = load_or_default(store)?;
    for (key, value) in &assignments {
        config.set(*key, value)?;
    }
    store.save(&config)?;
    info!("updated {} setting(s)", assignments.len());
    Ok(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crictl_config::storage::mock::MemoryConfigStore;

    fn containerd_config() -> Config {
        Config {
            runtime_endpoint: "unix:///run/containerd/containerd.sock".to_string(),
            image_endpoint: "unix:///run/containerd/containerd.sock".to_string(),
            timeout: 10,
            debug: false,
        }
    }

    // ── load_or_default ───────────────────────────────────────────────────────

    #[test]
    fn test_load_or_default_on_empty_store_returns_zero_config() {
        let store = MemoryConfigStore::new();
        assert_eq!(load_or_default(&store).unwrap(), Config::default());
    }

    // ── list / get ────────────────────────────────────────────────────────────

    #[test]
    fn test_list_returns_all_four_keys() {
        // Arrange
        let store = MemoryConfigStore::with_config(containerd_config());

        // Act
        let entries = list(&store).unwrap();

        // Assert
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["runtime-endpoint", "image-endpoint", "timeout", "debug"]
        );
        assert_eq!(entries[2].1, "10");
    }

    #[test]
    fn test_get_returns_stored_value() {
        let store = MemoryConfigStore::with_config(containerd_config());
        assert_eq!(
            get(&store, "runtime-endpoint").unwrap(),
            "unix:///run/containerd/containerd.sock"
        );
    }

    #[test]
    fn test_get_unknown_key_is_key_error() {
        let store = MemoryConfigStore::with_config(containerd_config());
        let result = get(&store, "pull-image-on-create");
        assert!(matches!(
            result,
            Err(CommandError::Key(KeyError::UnknownKey(_)))
        ));
    }

    // ── parse_assignments ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_assignments_splits_commas_and_first_equals() {
        // Arrange
        let args = ["timeout=5,debug=true", "image-endpoint=tcp://host:1234/?a=b"];

        // Act
        let pairs = parse_assignments(&args).unwrap();

        // Assert
        assert_eq!(
            pairs,
            vec![
                (ConfigKey::Timeout, "5".to_string()),
                (ConfigKey::Debug, "true".to_string()),
                (ConfigKey::ImageEndpoint, "tcp://host:1234/?a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_assignments_rejects_missing_equals() {
        let result = parse_assignments(&["timeout"]);
        assert!(matches!(
            result,
            Err(CommandError::MalformedAssignment(s)) if s == "timeout"
        ));
    }

    #[test]
    fn test_parse_assignments_rejects_trailing_comma() {
        let result = parse_assignments(&["debug=true,"]);
        assert!(matches!(result, Err(CommandError::MalformedAssignment(_))));
    }

    // ── set ───────────────────────────────────────────────────────────────────

    #[test]
    fn test_set_on_empty_store_creates_config() {
        // Arrange
        let store = MemoryConfigStore::new();

        // Act
        let cfg = set(&store, &["runtime-endpoint=unix:///run/crio/crio.sock"]).unwrap();

        // Assert
        assert_eq!(cfg.runtime_endpoint, "unix:///run/crio/crio.sock");
        assert_eq!(store.stored(), Some(cfg));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_set_keeps_untouched_fields() {
        let store = MemoryConfigStore::with_config(containerd_config());

        set(&store, &["debug=1"]).unwrap();

        let stored = store.stored().unwrap();
        assert!(stored.debug);
        assert_eq!(stored.timeout, 10);
        assert_eq!(stored.image_endpoint, containerd_config().image_endpoint);
    }

    #[test]
    fn test_set_with_invalid_value_saves_nothing() {
        // Arrange
        let store = MemoryConfigStore::with_config(containerd_config());

        // Act: first assignment is fine, second is not
        let result = set(&store, &["debug=true", "timeout=forever"]);

        // Assert
        assert!(matches!(
            result,
            Err(CommandError::Key(KeyError::InvalidValue { .. }))
        ));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.stored(), Some(containerd_config()));
    }
}
