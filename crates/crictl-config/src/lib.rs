//! # crictl-config
//!
//! Persistence for the CRI client configuration file (`crictl.yaml`).
//!
//! The file is a small YAML mapping that tells a CRI client which runtime and
//! image service sockets to talk to, how long to wait on each call, and whether
//! to log verbosely:
//!
//! ```yaml
//! runtime-endpoint: unix:///run/containerd/containerd.sock
//! image-endpoint: unix:///run/containerd/containerd.sock
//! timeout: 10
//! debug: false
//! ```
//!
//! - **`domain`** – the [`Config`] record and per-key access used by tools
//!   that edit one setting at a time.
//! - **`storage`** – reading and writing the YAML file, plus the
//!   [`ConfigStore`] seam used by callers that want to swap the file out in
//!   tests.

pub mod domain;
pub mod storage;

pub use domain::config::{Config, ConfigKey, KeyError};
pub use storage::file::{load, save, ConfigError, FileConfigStore};
pub use storage::ConfigStore;
