//! Application layer: the `list`, `get` and `set` use cases.
//!
//! Each use case talks to storage only through [`crictl_config::ConfigStore`],
//! so tests can run them against an in-memory store.

pub mod config_command;
