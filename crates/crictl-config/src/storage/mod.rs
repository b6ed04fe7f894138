//! Storage infrastructure: configuration file persistence.
//!
//! The `file` sub-module reads and writes the YAML file at a caller-supplied
//! path.  The `mock` sub-module keeps a [`Config`] in memory so that code
//! written against [`ConfigStore`] can be tested without touching disk.

use crate::domain::config::Config;

pub mod file;
pub mod mock;

use file::ConfigError;

/// Trait abstracting where a [`Config`] lives.
///
/// The production implementation is [`file::FileConfigStore`]; tests use
/// [`mock::MemoryConfigStore`].
pub trait ConfigStore {
    /// Reads the stored configuration.
    fn load(&self) -> Result<Config, ConfigError>;
    /// Replaces the stored configuration with `config`.
    fn save(&self, config: &Config) -> Result<(), ConfigError>;
}
