//! # SIP Allow Header
//!
//! Lists the methods supported by the user agent
//! ([RFC 3261 Section 20.5](https://datatracker.ietf.org/doc/html/rfc3261#section-20.5)).
//!
//! ```text
//! Allow  =  "Allow" HCOLON [Method *(COMMA Method)]
//! ```
//!
//! Methods compare case-insensitively, so `Allow: invite` equals `Allow: INVITE`.
//! Several Allow lines in one message merge into one list when coalesced.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let allow = Allow::from_str("Allow: INVITE, ACK, OPTIONS, CANCEL, BYE").unwrap();
//! assert!(allow.allows(&Method::Bye));
//! assert_eq!(allow.to_canonical_string(), "INVITE, ACK, OPTIONS, CANCEL, BYE");
//! ```

use std::str::FromStr;

use nom::{
    combinator::{map_res, opt},
    multi::separated_list1,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::parse_all;
use crate::parser::separators::comma;
use crate::parser::token::token;
use crate::parser::utils::bytes_to_string;
use crate::resources::LIST_SEPARATOR;
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};
use crate::types::method::Method;

/// Allow header: supported methods, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allow {
    methods: Vec<Method>,
}

impl Allow {
    pub fn new(methods: Vec<Method>) -> Self {
        Allow { methods }
    }

    /// An Allow header holding a single method given as text
    pub fn single(method: &str) -> Result<Self> {
        Ok(Allow { methods: vec![Method::from_str(method)?] })
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Appends a method unless it is already listed
    pub fn add_method(&mut self, method: Method) {
        if !self.allows(&method) {
            self.methods.push(method);
        }
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }
}

impl HeaderField for Allow {
    fn field_name(&self) -> &str {
        "Allow"
    }

    fn compact_name(&self) -> &str {
        "Allow"
    }

    fn allow_multiple(&self) -> bool {
        true
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let methods = parse_all(
            "Allow",
            value,
            opt(separated_list1(comma, map_res(token, |m: &[u8]| Method::from_str(&bytes_to_string(m))))),
        )?;
        self.methods = methods.unwrap_or_default();
        Ok(())
    }

    fn to_canonical_string(&self) -> String {
        self.methods
            .iter()
            .map(Method::to_string)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn clear(&mut self) {
        self.methods.clear();
    }

    fn coalesce(fields: &[Self]) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }
        let methods = fields.iter().flat_map(|f| f.methods.iter().cloned()).collect();
        Some(Allow { methods })
    }
}

impl From<Vec<Method>> for Allow {
    fn from(methods: Vec<Method>) -> Self {
        Allow { methods }
    }
}

impl_header_conversions!(Allow);
impl_group_equality!(Allow);
