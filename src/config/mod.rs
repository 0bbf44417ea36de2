//! Configuration layer for the `simple-http` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Port 80 (443 with TLS) and path `/`
//!
//! The host has no default and must come from one of the two sources.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--https`, `--auth-header`) use OR semantics:
//! - If set `true` in either CLI or TOML, the result is `true`.
//! - Once set `true` in TOML, CLI cannot override to `false`.
//!
//! # Credentials
//!
//! Credentials are resolved as a unit. `--auth` or `--username` on the
//! command line replaces the whole TOML `[auth]` section; only a bare
//! `--password` is merged with a username from the file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
