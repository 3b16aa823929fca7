//! The reflected request record.
//!
//! One record is built per request, serialized, and dropped once the
//! response is written.

use std::collections::BTreeMap;
use std::fmt;

use axum::http::{header, request::Parts};
use serde::{Deserialize, Serialize};

/// Header name → values, ordered by canonical name.
pub type HeaderValues = BTreeMap<String, Vec<String>>;

/// JSON shape returned to the client.
///
/// Field order matches the sorted key order of the JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectedRequest {
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "Header")]
    pub header: HeaderValues,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl ReflectedRequest {
    /// Build a record from request head and fully-read body.
    ///
    /// `Host` is left out of `header`; header values and the body are
    /// decoded lossily when they are not UTF-8.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Self {
        let mut headers = HeaderValues::new();
        for name in parts.headers.keys() {
            if *name == header::HOST {
                continue;
            }
            let values = parts
                .headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();
            headers.insert(canonical_header_key(name.as_str()), values);
        }

        Self {
            body: String::from_utf8_lossy(body).into_owned(),
            header: headers,
            method: parts.method.as_str().to_string(),
            url: parts.uri.to_string(),
        }
    }
}

/// Canonical MIME form of a header name: `x-request-id` → `X-Request-Id`.
///
/// The first letter and each letter following a hyphen are upper-cased,
/// every other letter is lower-cased.
pub fn canonical_header_key(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

/// Renders headers as `map[Name:[v1 v2] Other:[v]]`.
pub struct HeaderDump<'a>(pub &'a HeaderValues);

impl fmt::Display for HeaderDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (name, values)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}:[{}]", values.join(" "))?;
        }
        f.write_str("]")
    }
}
