//! The CRI client configuration record.
//!
//! [`Config`] mirrors `crictl.yaml` field for field.  Every field falls back to
//! its type's zero value when the key is missing from the file, so a file
//! containing only `timeout: 5` is a valid configuration.
//!
//! [`ConfigKey`] names each field by its YAML key and lets command line tools
//! read or assign a single setting from a string, e.g. `debug=true`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scalar;

/// Error type for per-key access on a [`Config`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The key does not name any configuration field.
    #[error("no configuration option named {0}")]
    UnknownKey(String),

    /// The value could not be converted to the field's type.
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: ConfigKey,
        value: String,
        expected: &'static str,
    },
}

/// In-memory representation of `crictl.yaml`.
///
/// `timeout` and `debug` also read YAML 1.1 spellings such as `010` or `yes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Address of the CRI runtime service, e.g. `unix:///run/containerd/containerd.sock`.
    pub runtime_endpoint: String,
    /// Address of the CRI image service.
    pub image_endpoint: String,
    /// Per-call timeout in seconds.
    #[serde(deserialize_with = "scalar::deserialize_int")]
    pub timeout: i64,
    /// Enables verbose client logging.
    #[serde(deserialize_with = "scalar::deserialize_bool")]
    pub debug: bool,
}

/// One field of [`Config`], named by its YAML key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RuntimeEndpoint,
    ImageEndpoint,
    Timeout,
    Debug,
}

impl ConfigKey {
    /// All keys in file order.
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::RuntimeEndpoint,
        ConfigKey::ImageEndpoint,
        ConfigKey::Timeout,
        ConfigKey::Debug,
    ];

    /// The key as written in the YAML file.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::RuntimeEndpoint => "runtime-endpoint",
            ConfigKey::ImageEndpoint => "image-endpoint",
            ConfigKey::Timeout => "timeout",
            ConfigKey::Debug => "debug",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| KeyError::UnknownKey(s.to_string()))
    }
}

impl Config {
    /// Returns the textual value of `key`.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::RuntimeEndpoint => self.runtime_endpoint.clone(),
            ConfigKey::ImageEndpoint => self.image_endpoint.clone(),
            ConfigKey::Timeout => self.timeout.to_string(),
            ConfigKey::Debug => self.debug.to_string(),
        }
    }

    /// Parses `value` and assigns it to the field named by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidValue`] if `timeout` is not an integer or
    /// `debug` is not a recognised boolean spelling.  The config is left
    /// unchanged on error.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), KeyError> {
        match key {
            ConfigKey::RuntimeEndpoint => self.runtime_endpoint = value.to_string(),
            ConfigKey::ImageEndpoint => self.image_endpoint = value.to_string(),
            ConfigKey::Timeout => {
                self.timeout = value.parse().map_err(|_| KeyError::InvalidValue {
                    key,
                    value: value.to_string(),
                    expected: "an integer",
                })?;
            }
            ConfigKey::Debug => {
                self.debug = parse_bool(value).ok_or_else(|| KeyError::InvalidValue {
                    key,
                    value: value.to_string(),
                    expected: "a boolean",
                })?;
            }
        }
        Ok(())
    }

    /// Lists every key with its textual value, in file order.
    pub fn entries(&self) -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .collect()
    }
}

/// Command line spellings: `1`/`t`/`true` and `0`/`f`/`false`, in three cases.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
