//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the binary. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::request::{self, Method, RequestDescriptor, RequestInput};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// HTTP method to issue
    pub method: Method,

    /// Request descriptor handed to the options builder
    pub descriptor: RequestDescriptor,

    /// Use TLS instead of plain HTTP
    pub use_https: bool,

    /// Parsed request body (POST/PUT only)
    pub body: Option<Value>,

    /// Parse the response as JSON
    pub parse_json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.descriptor;
        let credential = if d.auth.is_some() {
            "auth"
        } else if d.username.is_some() {
            if d.use_auth_header { "basic-header" } else { "basic" }
        } else {
            "none"
        };

        // Credentials themselves are never printed.
        write!(
            f,
            "Config {{ method: {}, target: {}://{}:{}{}, content_type: {}, credential: {}, \
             body: {}, json: {} }}",
            self.method,
            if self.use_https { "https" } else { "http" },
            d.host.as_deref().unwrap_or_default(),
            d.port.unwrap_or_default(),
            d.path.as_deref().unwrap_or_default(),
            d.content_type.as_deref().unwrap_or("none"),
            credential,
            self.body.is_some(),
            self.parse_json,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The host is missing
    /// - The port is zero
    /// - The body is not valid JSON
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        // OR semantics: a flag set in either source enables it
        let use_https = cli.https || toml.is_some_and(|t| t.server.https);

        let host = Self::resolve_host(cli, toml)?;
        let port = Self::resolve_port(cli, toml, use_https)?;

        let path = cli
            .path
            .clone()
            .or_else(|| toml.and_then(|t| t.request.path.clone()))
            .unwrap_or_else(|| defaults::PATH.to_string());

        let content_type = cli
            .content_type
            .clone()
            .or_else(|| toml.and_then(|t| t.request.content_type.clone()));

        let descriptor = RequestDescriptor {
            host: Some(host),
            port: Some(port),
            path: Some(path),
            content_type,
            ..Self::resolve_credentials(cli, toml)
        };

        Ok(Self {
            method: cli.method(),
            descriptor,
            use_https,
            body: Self::parse_body(cli.body.as_deref())?,
            parse_json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds the wrapper input for this configuration.
    ///
    /// # Errors
    ///
    /// Returns the options builder's validation errors.
    pub fn request_input(&self) -> Result<RequestInput, request::Error> {
        let input = RequestInput::from_descriptor(&self.descriptor)?.with_https(self.use_https);

        Ok(match &self.body {
            Some(body) => input.with_body(body.clone()),
            None => input,
        })
    }

    fn resolve_host(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.host
            .clone()
            .or_else(|| toml.and_then(|t| t.server.host.clone()))
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(field::HOST, "Use --host or set server.host in config file")
            })
    }

    fn resolve_port(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        use_https: bool,
    ) -> Result<u16, ConfigError> {
        // Priority: CLI explicit > TOML > default for the transport
        let port = cli
            .port
            .or_else(|| toml.and_then(|t| t.server.port))
            .unwrap_or_else(|| defaults::port(use_https));

        if port == 0 {
            return Err(ConfigError::InvalidPort { value: port });
        }

        Ok(port)
    }

    /// Resolves the credential fields as one unit.
    ///
    /// Credentials from the two sources are never mixed: if the CLI sets
    /// `--auth` or `--username`, the TOML `[auth]` section is ignored.
    fn resolve_credentials(cli: &Cli, toml: Option<&TomlConfig>) -> RequestDescriptor {
        let cli_has_credentials = cli.auth.is_some() || cli.username.is_some();

        let Some(toml) = toml.filter(|_| !cli_has_credentials) else {
            return RequestDescriptor {
                auth: cli.auth.clone(),
                username: cli.username.clone(),
                password: cli.password.clone(),
                use_auth_header: cli.auth_header,
                ..RequestDescriptor::default()
            };
        };

        let section = &toml.auth;
        RequestDescriptor {
            auth: section.auth.clone(),
            username: section.username.clone(),
            password: cli.password.clone().or_else(|| section.password.clone()),
            use_auth_header: cli.auth_header || section.use_header,
            ..RequestDescriptor::default()
        }
    }

    fn parse_body(body: Option<&str>) -> Result<Option<Value>, ConfigError> {
        body.map(|text| {
            serde_json::from_str(text).map_err(|e| ConfigError::InvalidBody {
                reason: e.to_string(),
            })
        })
        .transpose()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
