//! crictl-config — read and edit the CRI client configuration file.
//!
//! # Usage
//!
//! ```text
//! crictl-config [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list                          Print every setting as `key: value`
//!   get  <KEY>                    Print the value of one setting
//!   set  <KEY=VALUE[,KEY=VALUE]>  Assign one or more settings and save
//!
//! Options:
//!   -c, --config <PATH>  Config file [env: CRI_CONFIG_FILE] [default: /etc/crictl.yaml]
//!   -D, --debug          Log at debug level unless RUST_LOG is set
//! ```
//!
//! Keys: `runtime-endpoint`, `image-endpoint`, `timeout`, `debug`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crictl_config::FileConfigStore;
use crictl_config_cli::application::config_command;

const DEFAULT_CONFIG_PATH: &str = "/etc/crictl.yaml";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read and edit the CRI client configuration file.
#[derive(Debug, Parser)]
#[command(name = "crictl-config", version)]
struct Cli {
    /// Path to the configuration file.
    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_CONFIG_PATH,
        env = "CRI_CONFIG_FILE"
    )]
    config: PathBuf,

    /// Log at debug level (ignored when `RUST_LOG` is set).
    #[arg(short = 'D', long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every setting as `key: value`.
    List,
    /// Print the value of one setting.
    Get {
        /// Setting name, e.g. `runtime-endpoint`.
        key: String,
    },
    /// Assign one or more settings and save the file.
    Set {
        /// Assignments such as `timeout=5` or `debug=true,timeout=5`.
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output on stdout can be piped.
    let fallback = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = FileConfigStore::new(&cli.config);
    debug!("using config file {}", store.path().display());

    match cli.command {
        Command::List => {
            let entries = config_command::list(&store)
                .with_context(|| format!("listing {}", cli.config.display()))?;
            for (key, value) in entries {
                println!("{key}: {value}");
            }
        }
        Command::Get { key } => {
            let value = config_command::get(&store, &key)
                .with_context(|| format!("reading {key} from {}", cli.config.display()))?;
            println!("{value}");
        }
        Command::Set { assignments } => {
            config_command::set(&store, &assignments)
                .with_context(|| format!("updating {}", cli.config.display()))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_config_path() {
        // Arrange / Act
        let cli = Cli::try_parse_from(["crictl-config", "list"]).unwrap();

        // Assert: only holds when CRI_CONFIG_FILE is unset in the test env
        if std::env::var_os("CRI_CONFIG_FILE").is_none() {
            assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        }
        assert!(!cli.debug);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_cli_config_override_after_subcommand() {
        let cli =
            Cli::try_parse_from(["crictl-config", "get", "timeout", "--config", "/tmp/c.yaml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/c.yaml"));
        assert!(matches!(cli.command, Command::Get { ref key } if key == "timeout"));
    }

    #[test]
    fn test_cli_set_collects_assignments() {
        let cli = Cli::try_parse_from([
            "crictl-config",
            "-D",
            "set",
            "timeout=5,debug=true",
            "image-endpoint=unix:///run/crio/crio.sock",
        ])
        .unwrap();
        assert!(cli.debug);
        match cli.command {
            Command::Set { assignments } => assert_eq!(assignments.len(), 2),
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_set_requires_an_assignment() {
        assert!(Cli::try_parse_from(["crictl-config", "set"]).is_err());
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["crictl-config"]).is_err());
    }
}
