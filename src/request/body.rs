//! Request body serialization.
//!
//! The declared content type picks the encoding: JSON for
//! `application/json`, pass-through for `text/xml`, and form-url-encoding of
//! the top-level key/value pairs for anything else.

use serde_json::Value;

/// Content type selecting JSON encoding.
pub const JSON: &str = "application/json";

/// Content type selecting pass-through encoding.
pub const XML: &str = "text/xml";

/// How a request body is written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// JSON text of the body value.
    Json,
    /// Caller-supplied XML text, unmodified.
    Xml,
    /// `key=value&...` pairs.
    Form,
}

impl BodyEncoding {
    /// Picks the encoding for a declared content type.
    ///
    /// Only the media type is compared; parameters such as `charset` and
    /// ASCII case are ignored.
    #[must_use]
    pub fn for_content_type(content_type: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(str::trim)
            .unwrap_or_default();

        if essence.eq_ignore_ascii_case(JSON) {
            Self::Json
        } else if essence.eq_ignore_ascii_case(XML) {
            Self::Xml
        } else {
            Self::Form
        }
    }

    /// Serializes a body value with this encoding.
    #[must_use]
    pub fn encode(self, body: &Value) -> String {
        match self {
            Self::Json => body.to_string(),
            Self::Xml => match body {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            },
            Self::Form => encode_form(body),
        }
    }
}

/// Form-url-encodes the top-level pairs of an object.
///
/// Arrays repeat their key once per element; `null` and nested objects
/// become empty values. Anything other than an object encodes as `""`.
fn encode_form(body: &Value) -> String {
    let Value::Object(map) = body else {
        return String::new();
    };

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(key, &scalar_text(item));
                }
            }
            other => {
                serializer.append_pair(key, &scalar_text(other));
            }
        }
    }
    serializer.finish()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
