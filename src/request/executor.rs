//! Request executor: one request, one buffered response.

use std::net::Ipv6Addr;

use http::header::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::body::BodyEncoding;
use super::error::{Error, function};
use super::options::{Method, RequestOptions};
use super::validate;

/// Outcome of a completed exchange.
///
/// Any status code counts as completion; interpreting it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseResult {
    /// HTTP status code
    pub status_code: u16,
    /// Buffered response text
    pub body: String,
}

impl ResponseResult {
    /// Creates a response result.
    #[must_use]
    pub const fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] carrying the parser error and the raw body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|source| Error::Parse {
            source,
            body: self.body.clone(),
        })
    }
}

impl From<HttpResponse> for ResponseResult {
    fn from(response: HttpResponse) -> Self {
        Self::new(response.status.as_u16(), response.body_text())
    }
}

/// Issues one request and buffers the whole response.
///
/// The body is serialized according to the options' `Content-Type` and is
/// only sent for POST and PUT; an absent body is sent as `{}`. GET never
/// carries a body. `use_secure_transport` selects `https` over `http`.
///
/// # Errors
///
/// - [`Error::Validation`] if host, port or path is empty
/// - [`Error::InvalidHeader`] if a header cannot be sent
/// - [`Error::Transport`] for connection and response-stream failures
pub async fn perform_request<H: HttpClient>(
    client: &H,
    options: &RequestOptions,
    method: Method,
    body: Option<&Value>,
    use_secure_transport: bool,
) -> Result<ResponseResult, Error> {
    validate::options(options, function::PERFORM_REQUEST)?;

    let request = build_request(options, method, body, use_secure_transport)?;
    tracing::debug!(
        method = %method,
        url = %request.url,
        body_bytes = request.body.as_ref().map_or(0, Vec::len),
        "Issuing request"
    );

    let response = client.request(request).await.map_err(|e| {
        tracing::warn!("Request to {}:{} failed: {e}", options.host, options.port);
        Error::from(e)
    })?;

    tracing::debug!(
        status = response.status.as_u16(),
        body_bytes = response.body.len(),
        "Response received"
    );

    Ok(ResponseResult::from(response))
}

/// Translates options, method and body into a transport request.
fn build_request(
    options: &RequestOptions,
    method: Method,
    body: Option<&Value>,
    use_secure_transport: bool,
) -> Result<HttpRequest, Error> {
    let mut request = HttpRequest::new(method.into(), request_url(options, use_secure_transport)?);

    for (name, value) in &options.headers {
        request
            .headers
            .append(parse_header_name(name)?, parse_header_value(name, value)?);
    }

    request.auth.clone_from(&options.auth);

    if method.sends_body() {
        let encoding = BodyEncoding::for_content_type(options.content_type());
        let encoded = body.map_or_else(
            || encoding.encode(&Value::Object(serde_json::Map::new())),
            |b| encoding.encode(b),
        );
        request.body = Some(encoded.into_bytes());
    }

    Ok(request)
}

/// Assembles `scheme://host:port/path?query` component by component, so the
/// host can never carry a path, query, userinfo or port of its own.
fn request_url(options: &RequestOptions, secure: bool) -> Result<Url, Error> {
    let scheme = if secure { "https" } else { "http" };
    let invalid = |reason: &dyn std::fmt::Display| {
        Error::from(HttpError::InvalidUrl(format!(
            "{scheme}://{}:{}: {reason}",
            options.host, options.port
        )))
    };

    let mut url = Url::parse(&format!("{scheme}://localhost")).map_err(|e| invalid(&e))?;
    let host = url_host(&options.host).ok_or_else(|| invalid(&"invalid host"))?;
    url.set_host(Some(host.as_str())).map_err(|e| invalid(&e))?;
    url.set_port(Some(options.port))
        .map_err(|()| invalid(&"invalid port"))?;

    let (path, query) = match options.path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (options.path.as_str(), None),
    };
    if path.starts_with('/') {
        url.set_path(path);
    } else {
        url.set_path(&format!("/{path}"));
    }
    url.set_query(query);

    Ok(url)
}

/// Host as it appears in a URL: IPv6 literals are bracketed, and anything
/// that would end the host component early is refused.
fn url_host(host: &str) -> Option<String> {
    if host.parse::<Ipv6Addr>().is_ok() {
        return Some(format!("[{host}]"));
    }
    if host.starts_with('[') && host.ends_with(']') {
        return Some(host.to_string());
    }
    if host.contains(['/', '?', '#', '@', ':', '\\']) {
        return None;
    }
    Some(host.to_string())
}

fn parse_header_name(name: &str) -> Result<HeaderName, Error> {
    name.parse::<HeaderName>()
        .map_err(|e| Error::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
