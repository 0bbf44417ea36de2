//! Error types for request building and execution.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for every request operation.
///
/// All failures reach the immediate caller through the returned `Result`;
/// nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input field is missing or empty.
    #[error("input must not be empty: {field} (in {function})")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Operation that rejected the input
        function: &'static str,
    },

    /// The response body is not valid JSON although a JSON variant was requested.
    #[error("The response is not valid JSON. {{error:{source}, response:{body}}}")]
    Parse {
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
        /// Raw response text
        body: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Connection-level or stream-level failure from the transport.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl Error {
    /// Creates a `Validation` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, function: &'static str) -> Self {
        Self::Validation { field, function }
    }

    /// Returns true if this is a validation error for the given field.
    #[must_use]
    pub fn is_missing(&self, name: &str) -> bool {
        matches!(self, Self::Validation { field, .. } if *field == name)
    }
}

/// Well-known input field names used in `Validation` errors.
pub mod field {
    /// Target host.
    pub const HOST: &str = "host";
    /// Target port.
    pub const PORT: &str = "port";
    /// Request path.
    pub const PATH: &str = "path";
}

/// Operation names reported in `Validation` errors.
pub mod function {
    /// [`build_options`](crate::request::build_options)
    pub const BUILD_OPTIONS: &str = "simpleHttp.buildOptions";
    /// [`perform_request`](crate::request::perform_request)
    pub const PERFORM_REQUEST: &str = "simpleHttp.performRequest";
    /// [`SimpleHttp::get`](crate::request::SimpleHttp::get)
    pub const GET: &str = "simpleHttp.get";
    /// [`SimpleHttp::get_json`](crate::request::SimpleHttp::get_json)
    pub const GET_JSON: &str = "simpleHttp.getJson";
    /// [`SimpleHttp::post`](crate::request::SimpleHttp::post)
    pub const POST: &str = "simpleHttp.post";
    /// [`SimpleHttp::post_json`](crate::request::SimpleHttp::post_json)
    pub const POST_JSON: &str = "simpleHttp.postJson";
    /// [`SimpleHttp::put`](crate::request::SimpleHttp::put)
    pub const PUT: &str = "simpleHttp.put";
    /// [`SimpleHttp::put_json`](crate::request::SimpleHttp::put_json)
    pub const PUT_JSON: &str = "simpleHttp.putJson";
}
