//! # Generic parameters
//!
//! The `;name=value` extension parameters of
//! [RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1):
//!
//! ```text
//! generic-param  =  token [ EQUAL gen-value ]
//! gen-value      =  token / host / quoted-string
//! ```
//!
//! [`Params`] keeps parameters in insertion order and allows duplicate names.
//! Names always compare case-insensitively. Token values compare
//! case-insensitively, quoted values byte for byte.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::types::param::{GenericParam, Params};
//!
//! let mut params = Params::new();
//! params.push(GenericParam::token("purpose", "icon").unwrap());
//! params.push(GenericParam::flag("lr").unwrap());
//!
//! assert_eq!(params.get_value("PURPOSE"), Some("icon"));
//! assert_eq!(params.to_string(), ";purpose=icon;lr");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::params::is_gen_value_char;
use crate::parser::quoted::{is_quotable, quote};
use crate::parser::token::is_valid_token;

/// Value of a generic parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GenericValue {
    /// Unquoted token or host
    Token(String),
    /// Content of a quoted-string, escapes resolved
    Quoted(String),
}

impl GenericValue {
    pub fn as_str(&self) -> &str {
        match self {
            GenericValue::Token(s) | GenericValue::Quoted(s) => s,
        }
    }
}

impl PartialEq for GenericValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GenericValue::Token(a), GenericValue::Token(b)) => a.eq_ignore_ascii_case(b),
            (GenericValue::Quoted(a), GenericValue::Quoted(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for GenericValue {}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Token(s) => write!(f, "{}", s),
            GenericValue::Quoted(s) => write!(f, "{}", quote(s)),
        }
    }
}

/// One `name[=value]` parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericParam {
    name: String,
    value: Option<GenericValue>,
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ArgumentNull("parameter name".to_string()));
    }
    if !is_valid_token(name) {
        return Err(Error::InvalidFormat(format!("invalid parameter name '{}'", name)));
    }
    Ok(())
}

impl GenericParam {
    /// A parameter without a value, such as `lr`
    pub fn flag(name: &str) -> Result<Self> {
        check_name(name)?;
        Ok(Self::from_parts(name.to_string(), None))
    }

    /// A parameter with an unquoted value
    pub fn token(name: &str, value: &str) -> Result<Self> {
        check_name(name)?;
        if value.is_empty() {
            return Err(Error::ArgumentNull(format!("value of parameter '{}'", name)));
        }
        if !value.bytes().all(is_gen_value_char) {
            return Err(Error::InvalidFormat(format!("invalid value for parameter '{}'", name)));
        }
        Ok(Self::from_parts(name.to_string(), Some(GenericValue::Token(value.to_string()))))
    }

    /// A parameter whose value is written as a quoted-string
    pub fn quoted(name: &str, value: &str) -> Result<Self> {
        check_name(name)?;
        if !is_quotable(value) {
            return Err(Error::InvalidFormat(format!("line break in parameter '{}'", name)));
        }
        Ok(Self::from_parts(name.to_string(), Some(GenericValue::Quoted(value.to_string()))))
    }

    pub(crate) fn from_parts(name: String, value: Option<GenericValue>) -> Self {
        GenericParam { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&GenericValue> {
        self.value.as_ref()
    }

    /// The value text, without quotes
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_ref().map(GenericValue::as_str)
    }

    /// Case-insensitive name check
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for GenericParam {
    fn eq(&self, other: &Self) -> bool {
        self.is_named(&other.name) && self.value == other.value
    }
}

impl Eq for GenericParam {}

impl fmt::Display for GenericParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Ordered parameter table. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params(Vec<GenericParam>);

impl Params {
    pub fn new() -> Self {
        Params(Vec::new())
    }

    /// Appends a parameter, keeping any earlier one with the same name
    pub fn push(&mut self, param: GenericParam) {
        self.0.push(param);
    }

    /// First parameter with the given name
    pub fn get(&self, name: &str) -> Option<&GenericParam> {
        self.0.iter().find(|p| p.is_named(name))
    }

    /// Value of the first parameter with the given name.
    /// Returns `None` both for a missing parameter and for a flag.
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(GenericParam::value_str)
    }

    /// Every parameter with the given name, in order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GenericParam> + 'a {
        self.0.iter().filter(move |p| p.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes every parameter with the given name, returning how many went
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|p| !p.is_named(name));
        before - self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenericParam> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<GenericParam>> for Params {
    fn from(params: Vec<GenericParam>) -> Self {
        Params(params)
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a GenericParam;
    type IntoIter = std::slice::Iter<'a, GenericParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.0 {
            write!(f, ";{}", param)?;
        }
        Ok(())
    }
}
