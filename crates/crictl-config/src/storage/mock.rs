//! In-memory config store for unit testing.
//!
//! Lets tests exercise code written against [`ConfigStore`] without a file on
//! disk, and inspect what was saved afterwards.

use std::sync::Mutex;

use super::file::ConfigError;
use super::ConfigStore;
use crate::domain::config::Config;

/// A [`ConfigStore`] that keeps the configuration in memory.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    stored: Mutex<Option<Config>>,
    save_count: Mutex<u32>,
}

impl MemoryConfigStore {
    /// Creates an empty store; loading from it fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            stored: Mutex::new(Some(config)),
            save_count: Mutex::new(0),
        }
    }

    /// Returns the stored config, if any.
    pub fn stored(&self) -> Option<Config> {
        self.stored.lock().expect("lock poisoned").clone()
    }

    /// Returns the number of times [`ConfigStore::save`] was called.
    pub fn save_count(&self) -> u32 {
        *self.save_count.lock().expect("lock poisoned")
    }
}

impl ConfigStore for MemoryConfigStore {
    /// Loading an empty store fails the same way a missing file does.
    fn load(&self) -> Result<Config, ConfigError> {
        self.stored().ok_or_else(|| ConfigError::Io {
            path: "<memory>".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        *self.stored.lock().expect("lock poisoned") = Some(config.clone());
        *self.save_count.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_load_fails_with_not_found() {
        let store = MemoryConfigStore::new();
        match store.load() {
            Err(ConfigError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_save_then_load_returns_saved_config() {
        // Arrange
        let store = MemoryConfigStore::new();
        let cfg = Config {
            timeout: 3,
            ..Config::default()
        };

        // Act
        store.save(&cfg).unwrap();

        // Assert
        assert_eq!(store.load().unwrap(), cfg);
        assert_eq!(store.save_count(), 1);
    }
}
