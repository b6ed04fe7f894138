//! crictl-config-cli library entry point.
//!
//! Re-exports the application layer so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
