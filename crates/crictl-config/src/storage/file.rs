//! YAML-based persistence for [`Config`].
//!
//! [`load`] reads a `crictl.yaml` file into a [`Config`]; [`save`] writes one
//! back, creating any missing parent directories first.
//!
//! # Permissions
//!
//! On Unix, directories created by [`save`] get mode `0o755` and a newly
//! created file gets `0o644` (both before the process umask is applied).  An
//! existing file keeps its mode; only its content is replaced.
//!
//! Writes are not atomic.  A failure after the directories were created leaves
//! them in place, and a failure mid-write can leave a truncated file.

use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::ConfigStore;
use crate::domain::config::Config;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid YAML for a [`Config`].
    #[error("failed to parse config YAML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config could not be serialized to YAML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` if the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Loads a [`Config`] from the YAML file at `path`.
///
/// Keys missing from the file keep their zero value and unknown keys are
/// ignored.  An empty file, or one holding only a null document, yields
/// [`Config::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the content is not valid YAML or a value has the
/// wrong type.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;

    // A null document (`~`, `null`, or nothing at all) leaves every field zero.
    let config = serde_yaml::from_str::<Option<Config>>(&content)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Writes `config` as YAML to `path`, replacing any existing content.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if encoding fails, or
/// [`ConfigError::Io`] if a directory cannot be created (including when a
/// path component exists and is not a directory) or the file cannot be
/// written.
pub fn save(config: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;

    if let Some(dir) = parent_dir(path) {
        create_parent_dirs(dir).map_err(|source| ConfigError::io(dir, source))?;
    }

    write_file(path, content.as_bytes()).map_err(|source| ConfigError::io(path, source))?;
    debug!("saved config to {}", path.display());
    Ok(())
}

/// The directory `save` must create, or `None` for a bare file name or a root.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}

fn create_parent_dirs(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder.create(dir)
}

fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    let mut file = options.open(path)?;
    file.write_all(content)
}

/// [`ConfigStore`] backed by a YAML file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        load(&self.path)
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        save(config, &self.path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
