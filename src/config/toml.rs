//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Target server section
    #[serde(default)]
    pub server: ServerSection,

    /// Request defaults section
    #[serde(default)]
    pub request: RequestSection,

    /// Credentials section
    #[serde(default)]
    pub auth: AuthSection,
}

/// Target server section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Host name or address
    pub host: Option<String>,

    /// Port (default: 80, or 443 with https)
    pub port: Option<u16>,

    /// Use TLS instead of plain HTTP
    #[serde(default)]
    pub https: bool,
}

/// Request defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSection {
    /// Request path
    pub path: Option<String>,

    /// Value for the Content-Type header
    pub content_type: Option<String>,
}

/// Credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Ready-made credential (wins over username/password)
    pub auth: Option<String>,

    /// User name for Basic credentials
    pub username: Option<String>,

    /// Password for Basic credentials
    pub password: Option<String>,

    /// Send Basic credentials as an explicit Authorization header
    #[serde(default)]
    pub use_header: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# simple-http Configuration File

[server]
# Target host (required, can be overridden by --host)
# host = "localhost"

# Port (default: 80, or 443 when https = true)
# port = 8080

# Use TLS instead of plain HTTP
# https = false

[request]
# Request path (default: "/")
# path = "/api/items"

# Content-Type header; also selects the body encoding:
#   "application/json" -> JSON, "text/xml" -> raw text, anything else -> form fields
# content_type = "application/json"

[auth]
# Ready-made credential, sent as-is (wins over username/password)
# auth = "Bearer your-token-here"

# Basic credentials
# username = "user"
# password = "secret"

# Send Basic credentials as an explicit Authorization header
# use_header = false
"#
    .to_string()
}
