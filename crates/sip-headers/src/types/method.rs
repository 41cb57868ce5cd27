//! # SIP methods
//!
//! `Method = INVITEm / ACKm / OPTIONSm / BYEm / CANCELm / REGISTERm / extension-method`
//! ([RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1)).
//!
//! Methods compare by case-insensitive token equality, so `invite` and `INVITE`
//! are the same method. Standard methods always print in upper case; extension
//! methods print as they were written.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::is_valid_token;

/// A SIP request method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Method {
    Invite,
    Ack,
    Bye,
    Cancel,
    Register,
    Options,
    Info,
    Update,
    Message,
    Prack,
    Refer,
    Subscribe,
    Notify,
    Publish,
    /// Any other method token
    Extension(String),
}

const STANDARD: [Method; 14] = [
    Method::Invite,
    Method::Ack,
    Method::Bye,
    Method::Cancel,
    Method::Register,
    Method::Options,
    Method::Info,
    Method::Update,
    Method::Message,
    Method::Prack,
    Method::Refer,
    Method::Subscribe,
    Method::Notify,
    Method::Publish,
];

impl Method {
    /// Canonical string form
    pub fn as_str(&self) -> &str {
        match self {
            Method::Invite => "INVITE",
            Method::Ack => "ACK",
            Method::Bye => "BYE",
            Method::Cancel => "CANCEL",
            Method::Register => "REGISTER",
            Method::Options => "OPTIONS",
            Method::Info => "INFO",
            Method::Update => "UPDATE",
            Method::Message => "MESSAGE",
            Method::Prack => "PRACK",
            Method::Refer => "REFER",
            Method::Subscribe => "SUBSCRIBE",
            Method::Notify => "NOTIFY",
            Method::Publish => "PUBLISH",
            Method::Extension(token) => token,
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, Method::Extension(_))
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for Method {}

impl Hash for Method {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.as_str().bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ArgumentNull("method".to_string()));
        }
        if !is_valid_token(s) {
            return Err(Error::InvalidFormat(format!("invalid method '{}'", s)));
        }
        Ok(STANDARD
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .cloned()
            .unwrap_or_else(|| Method::Extension(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_methods_case_insensitive() {
        assert_eq!(Method::from_str("invite").unwrap(), Method::Invite);
        assert_eq!(Method::from_str("Invite").unwrap().to_string(), "INVITE");
        assert!(!Method::from_str("ACK").unwrap().is_extension());
    }

    #[test]
    fn test_extension_methods() {
        let m = Method::from_str("Foo").unwrap();
        assert!(m.is_extension());
        assert_eq!(m.to_string(), "Foo");
        assert_eq!(m, Method::from_str("FOO").unwrap());
        assert_ne!(m, Method::Invite);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Method::from_str("foo").unwrap());
        assert!(set.contains(&Method::from_str("FOO").unwrap()));
    }

    #[test]
    fn test_invalid_methods() {
        assert!(matches!(Method::from_str(""), Err(Error::ArgumentNull(_))));
        assert!(matches!(Method::from_str("IN VITE"), Err(Error::InvalidFormat(_))));
    }
}
