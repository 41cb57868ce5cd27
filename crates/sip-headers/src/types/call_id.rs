//! # Call-ID shaped headers
//!
//! Call-ID and In-Reply-To both carry `callid = word [ "@" word ]`
//! ([RFC 3261 Section 20.8](https://datatracker.ietf.org/doc/html/rfc3261#section-20.8),
//! [Section 20.21](https://datatracker.ietf.org/doc/html/rfc3261#section-20.21)).
//!
//! Unlike tokens elsewhere, call identifiers compare byte for byte: `ABC@host` and
//! `abc@host` are different calls.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let call_id = CallId::from_str("i: f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com").unwrap();
//! assert_eq!(call_id.value(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com");
//! assert_ne!(call_id, CallId::from_str("F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6@foo.bar.com").unwrap());
//! ```

use nom::{combinator::map, multi::separated_list1};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::parser::separators::comma;
use crate::parser::utils::bytes_to_string;
use crate::parser::values::callid;
use crate::parser::parse_all;
use crate::resources::{LIST_SEPARATOR, VALUE_REQUIRED};
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};

fn validate_call_id(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::ArgumentNull(field.to_string()));
    }
    parse_all(field, value, map(callid, bytes_to_string))
}

fn is_valid_call_id(value: &str) -> bool {
    !value.is_empty() && parse_all("Call-ID", value, callid).is_ok()
}

/// Call-ID: unique identifier of a call or registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId {
    value: String,
}

impl CallId {
    /// Creates a Call-ID from an existing identifier
    pub fn new(value: &str) -> Result<Self> {
        Ok(CallId { value: validate_call_id("Call-ID", value)? })
    }

    /// Generates a fresh identifier, optionally qualified with a host
    pub fn generate(host: Option<&str>) -> Self {
        let local = Uuid::new_v4().simple().to_string();
        let value = match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(host) => format!("{}@{}", local, host),
            None => local,
        };
        CallId { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) -> Result<()> {
        self.value = validate_call_id("Call-ID", value)?;
        Ok(())
    }

    /// Part before the `@`
    pub fn local_part(&self) -> &str {
        self.value.split('@').next().unwrap_or(&self.value)
    }

    /// Part after the `@`, if present
    pub fn host_part(&self) -> Option<&str> {
        self.value.split_once('@').map(|(_, host)| host)
    }
}

impl HeaderField for CallId {
    fn field_name(&self) -> &str {
        "Call-ID"
    }

    fn compact_name(&self) -> &str {
        "i"
    }

    fn allow_multiple(&self) -> bool {
        false
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::parse("Call-ID", VALUE_REQUIRED));
        }
        self.value = parse_all("Call-ID", value, map(callid, bytes_to_string))?;
        Ok(())
    }

    fn to_canonical_string(&self) -> String {
        self.value.clone()
    }

    fn is_valid(&self) -> bool {
        is_valid_call_id(&self.value)
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

/// In-Reply-To: Call-IDs this call refers to or returns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InReplyTo {
    call_ids: Vec<String>,
}

impl InReplyTo {
    pub fn new(call_id: &str) -> Result<Self> {
        Ok(InReplyTo { call_ids: vec![validate_call_id("In-Reply-To", call_id)?] })
    }

    pub fn call_ids(&self) -> &[String] {
        &self.call_ids
    }

    pub fn add_call_id(&mut self, call_id: &str) -> Result<()> {
        let call_id = validate_call_id("In-Reply-To", call_id)?;
        self.call_ids.push(call_id);
        Ok(())
    }

    pub fn contains(&self, call_id: &str) -> bool {
        self.call_ids.iter().any(|id| id == call_id)
    }
}

impl HeaderField for InReplyTo {
    fn field_name(&self) -> &str {
        "In-Reply-To"
    }

    fn compact_name(&self) -> &str {
        "In-Reply-To"
    }

    fn allow_multiple(&self) -> bool {
        true
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::parse("In-Reply-To", VALUE_REQUIRED));
        }
        // In-Reply-To = "In-Reply-To" HCOLON callid *(COMMA callid)
        self.call_ids = parse_all(
            "In-Reply-To",
            value,
            separated_list1(comma, map(callid, bytes_to_string)),
        )?;
        Ok(())
    }

    fn to_canonical_string(&self) -> String {
        self.call_ids.join(LIST_SEPARATOR)
    }

    fn is_valid(&self) -> bool {
        !self.call_ids.is_empty() && self.call_ids.iter().all(|id| is_valid_call_id(id))
    }

    fn clear(&mut self) {
        self.call_ids.clear();
    }

    fn coalesce(fields: &[Self]) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }
        let call_ids = fields.iter().flat_map(|f| f.call_ids.iter().cloned()).collect();
        Some(InReplyTo { call_ids })
    }
}

impl_header_conversions!(CallId, InReplyTo);
impl_group_equality!(CallId, InReplyTo);
