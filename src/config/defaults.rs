//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default port for plain HTTP.
pub const PORT: u16 = 80;

/// Default port for TLS.
pub const HTTPS_PORT: u16 = 443;

/// Default request path.
pub const PATH: &str = "/";

/// Default port for the selected transport.
#[must_use]
pub const fn port(https: bool) -> u16 {
    if https { HTTPS_PORT } else { PORT }
}
