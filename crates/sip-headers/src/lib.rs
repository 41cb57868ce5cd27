//! Typed SIP header fields for rvoip
//!
//! This crate models the value grammar of individual SIP header fields
//! ([RFC 3261](https://datatracker.ietf.org/doc/html/rfc3261)) together with the
//! Request-Line and Status-Line. Every header type parses from a full
//! `Name: value` line or a bare value, renders back to its canonical text,
//! and compares under the RFC case rules: names and tokens case-insensitively,
//! quoted strings and Call-IDs exactly.
//!
//! Repeated occurrences of a header are held in a [`HeaderFieldGroup`], which
//! keeps insertion order and compares symmetrically with a single instance.
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let auth = WwwAuthenticate::from_str(
//!     r#"WWW-Authenticate: Digest realm="atlanta.com", nonce="f84f1cec41e6cbe5aea9c8e88d359", algorithm=MD5"#,
//! ).unwrap();
//! assert_eq!(auth.challenge().scheme(), "Digest");
//! assert_eq!(auth.challenge().realm(), Some("atlanta.com"));
//!
//! let status = StatusLine::new(200, None).unwrap();
//! assert_eq!(status.to_string(), "SIP/2.0 200 OK");
//! ```
//!
//! Assembling whole messages is left to the caller; this crate never scans
//! more than one header at a time.

pub mod error;
pub mod parser;
pub mod resources;
pub mod types;

// Re-export key public items
pub use error::{Error, Result};
pub use types::{
    HeaderField, HeaderFieldGroup, HeaderName, Method, RequestLine, StatusCode, StatusLine, TypedHeader,
};

/// Re-export of common types and traits
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AbsoluteUri, AlertInfo, Allow, CallId, CallInfo, Challenge, ErrorInfo, Expires, Extension, GenericParam,
        GenericValue, HeaderField, HeaderFieldGroup, HeaderName, Host, InReplyTo, Method, MinExpires, Params,
        ProxyAuthenticate, ProxyRequire, RecordRoute, RequestLine, Require, Route, Scheme, Server, SipUri,
        StatusCode, StatusLine, Subject, Supported, TypedHeader, Unsupported, Uri, UserAgent, Version,
        WwwAuthenticate,
    };
}
