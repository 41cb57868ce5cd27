//! # Extension headers
//!
//! Any header this crate has no typed model for
//! ([RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1)):
//!
//! ```text
//! extension-header  =  header-name HCOLON header-value
//! header-name       =  token
//! header-value      =  *(TEXT-UTF8char / UTF8-CONT / LWS)
//! ```
//!
//! The name is supplied at construction and serves as both long and compact name.
//! The value is stored trimmed and otherwise verbatim. Names compare
//! case-insensitively; values compare exactly.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let header = Extension::from_str("X-Custom-Header: Some Value").unwrap();
//! assert_eq!(header.field_name(), "X-Custom-Header");
//! assert_eq!(header.value(), "Some Value");
//! assert!(header.matches_name("x-custom-header"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::is_valid_token;
use crate::parser::utils::unfold;
use crate::types::group::impl_group_equality;
use crate::types::header_field::HeaderField;

/// A header stored by name with its raw value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extension {
    name: String,
    value: String,
}

impl Extension {
    /// Creates an extension header. The name must be a non-empty token.
    pub fn new(name: &str, value: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::ArgumentNull("header name".to_string()));
        }
        if !is_valid_token(name) {
            return Err(Error::InvalidFormat(format!("invalid header name '{}'", name)));
        }
        Ok(Extension { name: name.to_string(), value: value.trim().to_string() })
    }

    /// Splits a `Name: value` line at the first colon
    pub fn from_line(line: &str) -> Result<Self> {
        let unfolded = unfold(line);
        match unfolded.split_once(':') {
            Some((name, value)) => Self::new(name, value),
            None => Err(Error::parse(unfolded.trim(), "missing ':' after header name")),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.trim().to_string();
    }
}

impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.value == other.value
    }
}

impl Eq for Extension {}

impl HeaderField for Extension {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn compact_name(&self) -> &str {
        &self.name
    }

    fn allow_multiple(&self) -> bool {
        true
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        self.value = value.trim().to_string();
        Ok(())
    }

    fn to_canonical_string(&self) -> String {
        self.value.clone()
    }

    fn is_valid(&self) -> bool {
        is_valid_token(&self.name)
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Extension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_line(s)
    }
}

impl_group_equality!(Extension);
