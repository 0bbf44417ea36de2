//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::request::Method;

/// simple-http: one-shot GET/POST/PUT requests
///
/// Builds request options from flags and an optional config file, sends a
/// single request and prints the response body.
#[derive(Debug, Parser)]
#[command(name = "simple-http")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run (defaults to `get`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Target host (required unless set in the config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Target port (default: 80, or 443 with --https)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Request path, including any query string
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Use TLS instead of plain HTTP
    #[arg(long, global = true)]
    pub https: bool,

    /// Value for the Content-Type header (selects the body encoding)
    #[arg(long = "content-type", global = true)]
    pub content_type: Option<String>,

    /// Ready-made credential, sent as the Authorization header value
    #[arg(long, global = true)]
    pub auth: Option<String>,

    /// User name for Basic credentials
    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    /// Password for Basic credentials
    #[arg(long, short = 'p', global = true)]
    pub password: Option<String>,

    /// Send Basic credentials as an explicit Authorization header
    #[arg(long = "auth-header", global = true)]
    pub auth_header: bool,

    /// Request body as JSON text (POST/PUT only)
    #[arg(long, short = 'd', global = true)]
    pub body: Option<String>,

    /// Parse the response as JSON and pretty-print it
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for simple-http
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Send a GET request
    Get,
    /// Send a POST request
    Post,
    /// Send a PUT request
    Put,
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "simple-http.toml")]
        output: PathBuf,
    },
}

impl Command {
    /// Returns the HTTP method for request subcommands.
    #[must_use]
    pub const fn method(&self) -> Option<Method> {
        match self {
            Self::Get => Some(Method::Get),
            Self::Post => Some(Method::Post),
            Self::Put => Some(Method::Put),
            Self::Init { .. } => None,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns the HTTP method to use; GET when no subcommand is given.
    #[must_use]
    pub fn method(&self) -> Method {
        self.command
            .as_ref()
            .and_then(Command::method)
            .unwrap_or_default()
    }
}
