//! simple-http: GET/POST/PUT helpers for simple request/response exchanges.
//!
//! A library for building HTTP request options (address, content type,
//! Basic credentials), issuing one request over plain HTTP or TLS, and
//! returning the buffered response as text or parsed JSON.

pub mod config;
pub mod request;
pub mod transport;
