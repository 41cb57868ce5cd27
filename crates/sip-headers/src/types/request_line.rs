//! # Request-Line
//!
//! First line of a SIP request
//! ([RFC 3261 Section 7.1](https://datatracker.ietf.org/doc/html/rfc3261#section-7.1)):
//!
//! ```text
//! Request-Line  =  Method SP Request-URI SP SIP-Version CRLF
//! SIP-Version   =  "SIP" "/" 1*DIGIT "." 1*DIGIT
//! ```
//!
//! A start line has no header name and never groups, so [`RequestLine`] is a
//! standalone value rather than a [`HeaderField`](crate::types::header_field::HeaderField).
//! The protocol name is matched case-insensitively and always written as `SIP`.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let line = RequestLine::from_str("INVITE sip:bob@192.0.2.4 SIP/2.0").unwrap();
//! assert_eq!(line.method(), Some(&Method::Invite));
//! assert_eq!(line.request_uri().and_then(|u| u.host()).as_deref(), Some("192.0.2.4"));
//! assert_eq!(line.scheme(), "SIP");
//! assert_eq!(line.version().to_string(), "2.0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::parse_all;
use crate::parser::uri::uri;
use crate::parser::values::sip_version;
use crate::resources::{
    METHOD_REQUIRED, REQUEST_LINE, REQUEST_URI_INVALID, REQUEST_URI_REQUIRED, SCHEME_INVALID, SIP_SCHEME, SP,
    TOKEN_INVALID, VERSION_INVALID, VERSION_REQUIRED,
};
use crate::types::method::Method;
use crate::types::uri::Uri;
use crate::types::version::Version;

/// Parses the `SIP/x.y` element of a start line.
///
/// A protocol name other than SIP is a format error rather than a parse error.
pub(crate) fn parse_start_line_version(field: &str, text: &str) -> Result<Version> {
    if text.is_empty() {
        return Err(Error::parse(field, VERSION_REQUIRED));
    }
    let (name, major, minor) =
        parse_all(field, text, sip_version).map_err(|_| Error::parse(field, VERSION_INVALID))?;
    if !name.eq_ignore_ascii_case(SIP_SCHEME.as_bytes()) {
        return Err(Error::InvalidFormat(format!(
            "{}: {} (found '{}')",
            field,
            SCHEME_INVALID,
            String::from_utf8_lossy(name)
        )));
    }
    Ok(Version::new(major, minor))
}

/// Method, Request-URI and version of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    method: Option<Method>,
    request_uri: Option<Uri>,
    version: Version,
}

impl RequestLine {
    /// A SIP/2.0 request line
    pub fn new(method: Method, request_uri: impl Into<Uri>) -> Self {
        RequestLine {
            method: Some(method),
            request_uri: Some(request_uri.into()),
            version: Version::sip_2_0(),
        }
    }

    /// Parses a start line, replacing the current value only on success
    pub fn parse(&mut self, raw: &str) -> Result<()> {
        let line = raw.trim();
        let mut parts = line.splitn(3, ' ');

        let method_text = parts.next().unwrap_or_default();
        if method_text.is_empty() {
            return Err(Error::parse(REQUEST_LINE, METHOD_REQUIRED));
        }
        let method = Method::from_str(method_text).map_err(|_| Error::parse(REQUEST_LINE, TOKEN_INVALID))?;

        let uri_text = parts.next().unwrap_or_default();
        if uri_text.is_empty() {
            return Err(Error::parse(REQUEST_LINE, REQUEST_URI_REQUIRED));
        }
        let request_uri = parse_all(REQUEST_LINE, uri_text, uri).map_err(|_| Error::parse(REQUEST_LINE, REQUEST_URI_INVALID))?;

        let version = parse_start_line_version(REQUEST_LINE, parts.next().unwrap_or_default())?;

        self.method = Some(method);
        self.request_uri = Some(request_uri);
        self.version = version;
        Ok(())
    }

    /// Like [`RequestLine::parse`], but an absent input clears the value
    pub fn parse_opt(&mut self, raw: Option<&str>) -> Result<()> {
        match raw {
            Some(raw) => self.parse(raw),
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = Some(method);
    }

    pub fn request_uri(&self) -> Option<&Uri> {
        self.request_uri.as_ref()
    }

    pub fn set_request_uri(&mut self, request_uri: impl Into<Uri>) {
        self.request_uri = Some(request_uri.into());
    }

    /// Protocol name, always `SIP`
    pub fn scheme(&self) -> &'static str {
        SIP_SCHEME
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// `Method SP Request-URI SP SIP/x.y`
    pub fn to_canonical_string(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(method) = &self.method {
            parts.push(method.to_string());
        }
        if let Some(request_uri) = &self.request_uri {
            parts.push(request_uri.to_string());
        }
        parts.push(format!("{}/{}", SIP_SCHEME, self.version));
        parts.join(SP)
    }

    pub fn is_valid(&self) -> bool {
        self.method.is_some() && self.request_uri.is_some()
    }

    pub fn clear(&mut self) {
        *self = RequestLine::default();
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for RequestLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut line = RequestLine::default();
        line.parse(s)?;
        Ok(line)
    }
}
