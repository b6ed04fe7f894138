//! Domain types for the CRI client configuration.
//!
//! Pure data and parsing only; nothing in here touches the file system.

pub mod config;
mod scalar;
