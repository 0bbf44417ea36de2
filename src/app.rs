//! Process plumbing for the binary: how a finished request maps to an exit
//! status, what to tell the user when the configuration is unusable, and
//! where log output goes.

use std::process::ExitCode;

use simple_http::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request completed, or the template was written (exit 0).
    Done,
    /// Arguments or config file were unusable; nothing was sent (exit 1).
    BadConfig,
    /// The request failed, or its response could not be rendered (exit 2).
    Failed,
}

impl Outcome {
    /// Numeric exit status reported to the shell.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Done => 0,
            Self::BadConfig => 1,
            Self::Failed => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}

/// Follow-up advice for a configuration error, if there is any worth giving.
#[must_use]
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::HOST => {
            Some("Pass --host, or run 'simple-http init' and point --config at the result.")
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'simple-http init' to generate a configuration template.")
        }
        ConfigError::InvalidBody { .. } => {
            Some("The --body value must be JSON text, e.g. --body '{\"key\":\"value\"}'.")
        }
        ConfigError::InvalidPort { .. } => Some("Omit --port to use 80, or 443 with --https."),
        _ => None,
    }
}

/// Log filter: `RUST_LOG` wins, otherwise DEBUG with `--verbose` and INFO
/// without.
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Installs the global subscriber. Logs go to stderr so that stdout carries
/// only the response body.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
