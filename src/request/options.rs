//! Request configuration builder.
//!
//! Turns a caller-supplied [`RequestDescriptor`] into the normalized
//! [`RequestOptions`] consumed by the executor. Authentication is resolved
//! here, in priority order:
//!
//! 1. An explicit `auth` value is copied verbatim.
//! 2. Otherwise `username`/`password` are encoded as Basic credentials and
//!    placed either in `auth` or, with `use_auth_header`, under the
//!    `Authorization` header. Never both.
//! 3. Otherwise no credential is set.

use std::collections::BTreeMap;
use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::{Error, field, function};
use super::validate;

/// Name of the content type header.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Name of the authorization header.
pub const AUTHORIZATION: &str = "Authorization";

/// HTTP methods issued by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Read a resource. Never carries a body.
    #[default]
    Get,
    /// Create or submit.
    Post,
    /// Replace.
    Put,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// Returns true if requests with this method serialize and send a body.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
        }
    }
}

/// Normalized request configuration.
///
/// Produced by [`build_options`], or assembled directly by callers that
/// already know their headers. `auth` is a connection-level credential the
/// transport turns into an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Target host name or address
    pub host: String,
    /// Target port
    pub port: u16,
    /// Request path, including any query string
    pub path: String,
    /// HTTP method; wrappers overwrite it
    pub method: Method,
    /// Headers to send, keyed by name
    pub headers: BTreeMap<String, String>,
    /// Connection-level credential
    pub auth: Option<String>,
}

impl RequestOptions {
    /// Creates GET options with no headers and no credential.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
            method: Method::default(),
            headers: BTreeMap::new(),
            auth: None,
        }
    }

    /// Sets a header, replacing any previous value whose name matches
    /// ignoring ASCII case.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name.into(), value.into());
        self
    }

    fn set_header(&mut self, name: String, value: String) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value);
    }

    /// Sets the connection-level credential.
    #[must_use]
    pub fn with_auth(mut self, auth: impl Into<String>) -> Self {
        self.auth = Some(auth.into());
        self
    }

    /// Looks up a header value, ignoring ASCII case in the name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the declared content type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }
}

/// Caller input to [`build_options`].
///
/// `host`, `port` and `path` are required; everything else is optional.
/// The credential field is `username` (lowercase `n`) throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Target host
    pub host: Option<String>,
    /// Target port
    pub port: Option<u16>,
    /// Request path
    pub path: Option<String>,
    /// Value for the `Content-Type` header
    pub content_type: Option<String>,
    /// Ready-made credential, copied verbatim into the options
    pub auth: Option<String>,
    /// User name for Basic credentials
    pub username: Option<String>,
    /// Password for Basic credentials
    pub password: Option<String>,
    /// Send Basic credentials as an `Authorization` header instead of `auth`
    pub use_auth_header: bool,
}

impl RequestDescriptor {
    /// Creates a descriptor with the three required fields set.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets a ready-made credential.
    #[must_use]
    pub fn with_auth(mut self, auth: impl Into<String>) -> Self {
        self.auth = Some(auth.into());
        self
    }

    /// Sets user name and password for Basic credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Chooses between the `Authorization` header and the `auth` field.
    #[must_use]
    pub const fn with_auth_header(mut self, use_auth_header: bool) -> Self {
        self.use_auth_header = use_auth_header;
        self
    }
}

/// Encodes `username:password` as a Basic credential.
///
/// A missing password encodes as the empty string.
///
/// # Example
///
/// ```
/// use simple_http::request::basic_credentials;
///
/// assert_eq!(basic_credentials("u", Some("p")), "Basic dTpw");
/// ```
#[must_use]
pub fn basic_credentials(username: &str, password: Option<&str>) -> String {
    let pair = format!("{username}:{}", password.unwrap_or_default());
    format!("Basic {}", STANDARD.encode(pair))
}

/// Builds request options from a descriptor.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming the first of `host`, `port`, `path`
/// that is absent or empty. No partial options are returned.
pub fn build_options(descriptor: &RequestDescriptor) -> Result<RequestOptions, Error> {
    let f = function::BUILD_OPTIONS;
    let host = validate::non_empty(descriptor.host.as_deref(), field::HOST, f)?;
    let port = validate::port(descriptor.port, f)?;
    let path = validate::non_empty(descriptor.path.as_deref(), field::PATH, f)?;

    let mut options = RequestOptions::new(host, port, path);

    if let Some(content_type) = non_empty(descriptor.content_type.as_deref()) {
        options.set_header(CONTENT_TYPE.to_string(), content_type.to_string());
    }

    if let Some(auth) = non_empty(descriptor.auth.as_deref()) {
        options.auth = Some(auth.to_string());
    } else if let Some(username) = non_empty(descriptor.username.as_deref()) {
        let basic = basic_credentials(username, descriptor.password.as_deref());
        if descriptor.use_auth_header {
            options.set_header(AUTHORIZATION.to_string(), basic);
        } else {
            options.auth = Some(basic);
        }
    }

    Ok(options)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
