//! Transport layer for issuing HTTP exchanges.
//!
//! This module provides types and traits for:
//! - Describing a single HTTP exchange ([`HttpRequest`], [`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//!
//! Everything above this layer (option building, body encoding, response
//! parsing) is transport-agnostic and talks to [`HttpClient`] only.

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse, authorization_value};
