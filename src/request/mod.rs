//! Request layer: option building, body encoding, execution and wrappers.
//!
//! This module provides:
//! - The request configuration builder ([`build_options`], [`RequestDescriptor`], [`RequestOptions`])
//! - Body serialization by content type ([`BodyEncoding`])
//! - The single-exchange executor ([`perform_request`], [`ResponseResult`])
//! - GET/POST/PUT convenience wrappers ([`SimpleHttp`], [`RequestInput`])
//! - The error type shared by all of them ([`Error`])

mod api;
mod body;
mod error;
mod executor;
mod options;
mod validate;

#[cfg(test)]
mod options_tests;
#[cfg(test)]
mod test_support;

pub use api::{RequestInput, SimpleHttp};
pub use body::{BodyEncoding, JSON, XML};
pub use error::{Error, field, function};
pub use executor::{ResponseResult, perform_request};
pub use options::{
    AUTHORIZATION, CONTENT_TYPE, Method, RequestDescriptor, RequestOptions, basic_credentials,
    build_options,
};
