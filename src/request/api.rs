//! Typed convenience wrappers over the executor.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::transport::{HttpClient, ReqwestClient};

use super::error::{Error, function};
use super::executor::{ResponseResult, perform_request};
use super::options::{Method, RequestDescriptor, RequestOptions, build_options};
use super::validate;

/// Input bundle for the wrapper methods of [`SimpleHttp`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInput {
    /// Request options; the wrapper sets the method
    pub options: RequestOptions,
    /// Use TLS instead of plain HTTP
    pub use_https: bool,
    /// Body for POST/PUT; `{}` when absent, ignored for GET
    pub body: Option<Value>,
}

impl RequestInput {
    /// Creates a plain HTTP input without a body.
    #[must_use]
    pub const fn new(options: RequestOptions) -> Self {
        Self {
            options,
            use_https: false,
            body: None,
        }
    }

    /// Builds the options from a descriptor.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`build_options`].
    pub fn from_descriptor(descriptor: &RequestDescriptor) -> Result<Self, Error> {
        build_options(descriptor).map(Self::new)
    }

    /// Selects TLS or plain HTTP.
    #[must_use]
    pub const fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl From<RequestOptions> for RequestInput {
    fn from(options: RequestOptions) -> Self {
        Self::new(options)
    }
}

/// GET/POST/PUT entry points returning raw text or parsed JSON.
///
/// Holds nothing but the transport; every call owns its own input and
/// response, so one instance can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use simple_http::request::{RequestDescriptor, RequestInput, SimpleHttp};
///
/// # async fn example() -> Result<(), simple_http::request::Error> {
/// let http: SimpleHttp = SimpleHttp::default();
/// let descriptor = RequestDescriptor::new("localhost", 8080, "/items")
///     .with_credentials("user", "secret");
/// let value: serde_json::Value = http
///     .get_json(RequestInput::from_descriptor(&descriptor)?)
///     .await?;
/// println!("{value}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SimpleHttp<H = ReqwestClient> {
    client: H,
}

impl Default for SimpleHttp<ReqwestClient> {
    fn default() -> Self {
        Self::new(ReqwestClient::new())
    }
}

impl<H> SimpleHttp<H> {
    /// Creates wrappers over the given transport.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Builds request options; see [`build_options`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if host, port or path is missing.
    pub fn build_options(&self, descriptor: &RequestDescriptor) -> Result<RequestOptions, Error> {
        build_options(descriptor)
    }
}

impl<H: HttpClient> SimpleHttp<H> {
    /// Performs a GET and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns validation, header or transport errors.
    pub async fn get(&self, input: RequestInput) -> Result<ResponseResult, Error> {
        self.send(function::GET, Method::Get, input).await
    }

    /// Performs a GET and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), plus [`Error::Parse`] if the body is not valid JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, input: RequestInput) -> Result<T, Error> {
        self.send(function::GET_JSON, Method::Get, input)
            .await?
            .json()
    }

    /// Performs a POST and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns validation, header or transport errors.
    pub async fn post(&self, input: RequestInput) -> Result<ResponseResult, Error> {
        self.send(function::POST, Method::Post, input).await
    }

    /// Performs a POST and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// As [`post`](Self::post), plus [`Error::Parse`] if the body is not valid JSON.
    pub async fn post_json<T: DeserializeOwned>(&self, input: RequestInput) -> Result<T, Error> {
        self.send(function::POST_JSON, Method::Post, input)
            .await?
            .json()
    }

    /// Performs a PUT and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns validation, header or transport errors.
    pub async fn put(&self, input: RequestInput) -> Result<ResponseResult, Error> {
        self.send(function::PUT, Method::Put, input).await
    }

    /// Performs a PUT and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// As [`put`](Self::put), plus [`Error::Parse`] if the body is not valid JSON.
    pub async fn put_json<T: DeserializeOwned>(&self, input: RequestInput) -> Result<T, Error> {
        self.send(function::PUT_JSON, Method::Put, input)
            .await?
            .json()
    }

    async fn send(
        &self,
        function: &'static str,
        method: Method,
        input: RequestInput,
    ) -> Result<ResponseResult, Error> {
        validate::options(&input.options, function)?;

        let RequestInput {
            mut options,
            use_https,
            body,
        } = input;
        options.method = method;

        let body = if method.sends_body() { body } else { None };
        perform_request(&self.client, &options, method, body.as_ref(), use_https).await
    }
}
