//! Required-field checks shared by the builder, the executor and the wrappers.

use super::error::{Error, field};
use super::options::RequestOptions;

/// Returns the value if it is present and non-empty.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming `name` and `function` otherwise.
pub fn non_empty<'a>(
    value: Option<&'a str>,
    name: &'static str,
    function: &'static str,
) -> Result<&'a str, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing(name, function)),
    }
}

/// Returns the port if it is present and non-zero.
///
/// # Errors
///
/// Returns [`Error::Validation`] for the port field otherwise.
pub fn port(value: Option<u16>, function: &'static str) -> Result<u16, Error> {
    match value {
        Some(p) if p != 0 => Ok(p),
        _ => Err(Error::missing(field::PORT, function)),
    }
}

/// Checks that host, port and path are set on already-built options.
///
/// Options are plain values, so a caller may assemble them by hand; this
/// re-check keeps every issued request addressable.
///
/// # Errors
///
/// Returns [`Error::Validation`] for the first empty field, in the order
/// host, port, path.
pub fn options(options: &RequestOptions, function: &'static str) -> Result<(), Error> {
    non_empty(Some(&options.host), field::HOST, function)?;
    port(Some(options.port), function)?;
    non_empty(Some(&options.path), field::PATH, function)?;
    Ok(())
}
