//! # Server and User-Agent
//!
//! Both headers describe software with product tokens and comments
//! ([RFC 3261 Section 20.35](https://datatracker.ietf.org/doc/html/rfc3261#section-20.35),
//! [Section 20.41](https://datatracker.ietf.org/doc/html/rfc3261#section-20.41)):
//!
//! ```text
//! Server           =  "Server" HCOLON server-val *(LWS server-val)
//! User-Agent       =  "User-Agent" HCOLON server-val *(LWS server-val)
//! server-val       =  product / comment
//! product          =  token [SLASH product-version]
//! product-version  =  token
//! ```
//!
//! The value keeps the first product's name and version and the first comment.
//! Serialization writes `name/version (comment)`.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let ua = UserAgent::from_str("User-Agent: Softphone/1.5 (Linux x86_64)").unwrap();
//! assert_eq!(ua.product_name(), "Softphone");
//! assert_eq!(ua.product_version(), Some("1.5"));
//! assert_eq!(ua.comment(), Some("Linux x86_64"));
//! ```

use nom::{
    branch::alt,
    combinator::{map, opt},
    multi::separated_list1,
    sequence::{pair, preceded},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::quoted::{comment, is_valid_comment_text};
use crate::parser::separators::slash;
use crate::parser::token::{is_valid_token, token};
use crate::parser::utils::bytes_to_string;
use crate::parser::whitespace::lws;
use crate::parser::{parse_all, ParseResult};
use crate::resources::{SP, VALUE_REQUIRED};
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};

enum ServerVal<'a> {
    Product(&'a [u8], Option<&'a [u8]>),
    Comment(&'a [u8]),
}

fn product(input: &[u8]) -> ParseResult<ServerVal<'_>> {
    map(pair(token, opt(preceded(slash, token))), |(name, version)| {
        ServerVal::Product(name, version)
    })(input)
}

fn server_val(input: &[u8]) -> ParseResult<ServerVal<'_>> {
    alt((product, map(comment, ServerVal::Comment)))(input)
}

/// Product name, product version and comment of a server-val list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerValue {
    product_name: String,
    product_version: Option<String>,
    comment: Option<String>,
}

impl ServerValue {
    pub fn new(product_name: &str, product_version: Option<&str>) -> Result<Self> {
        let mut value = ServerValue::default();
        value.set_product(product_name, product_version)?;
        Ok(value)
    }

    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::parse(field, VALUE_REQUIRED));
        }
        let vals = parse_all(field, value, separated_list1(lws, server_val))?;

        let mut parsed = ServerValue::default();
        let mut have_product = false;
        for val in vals {
            match val {
                ServerVal::Product(name, version) if !have_product => {
                    parsed.product_name = bytes_to_string(name);
                    parsed.product_version = version.map(bytes_to_string);
                    have_product = true;
                }
                ServerVal::Comment(text) if parsed.comment.is_none() => {
                    parsed.comment = Some(bytes_to_string(text));
                }
                ServerVal::Product(name, _) => {
                    debug!(field, product = %String::from_utf8_lossy(name), "dropping additional product token");
                }
                ServerVal::Comment(_) => {
                    debug!(field, "dropping additional comment");
                }
            }
        }
        Ok(parsed)
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn product_version(&self) -> Option<&str> {
        self.product_version.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_product(&mut self, name: &str, version: Option<&str>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::ArgumentNull("product name".to_string()));
        }
        if !is_valid_token(name) {
            return Err(Error::InvalidFormat(format!("invalid product name '{}'", name)));
        }
        let version = match version.map(str::trim) {
            Some(v) if !is_valid_token(v) => {
                return Err(Error::InvalidFormat(format!("invalid product version '{}'", v)));
            }
            other => other.map(str::to_string),
        };
        self.product_name = name.to_string();
        self.product_version = version;
        Ok(())
    }

    /// Sets the comment text, without the enclosing parentheses
    pub fn set_comment(&mut self, comment: Option<&str>) -> Result<()> {
        if let Some(text) = comment {
            if !is_valid_comment_text(text) {
                return Err(Error::InvalidFormat(format!("invalid comment '{}'", text)));
            }
        }
        self.comment = comment.map(str::to_string);
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.product_name.is_empty() || self.comment.is_some()
    }
}

impl PartialEq for ServerValue {
    fn eq(&self, other: &Self) -> bool {
        let version_eq = match (&self.product_version, &other.product_version) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        self.product_name.eq_ignore_ascii_case(&other.product_name) && version_eq && self.comment == other.comment
    }
}

impl Eq for ServerValue {}

impl std::fmt::Display for ServerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.product_name.is_empty() {
            match &self.product_version {
                Some(version) => parts.push(format!("{}/{}", self.product_name, version)),
                None => parts.push(self.product_name.clone()),
            }
        }
        if let Some(comment) = &self.comment {
            parts.push(format!("({})", comment));
        }
        f.write_str(&parts.join(SP))
    }
}

macro_rules! server_header {
    ($(#[$doc:meta])* $header:ident, $long:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $header {
            value: ServerValue,
        }

        impl $header {
            pub fn new(product_name: &str, product_version: Option<&str>) -> Result<Self> {
                Ok($header { value: ServerValue::new(product_name, product_version)? })
            }

            pub fn with_comment(mut self, comment: &str) -> Result<Self> {
                self.value.set_comment(Some(comment))?;
                Ok(self)
            }

            pub fn product_name(&self) -> &str {
                self.value.product_name()
            }

            pub fn product_version(&self) -> Option<&str> {
                self.value.product_version()
            }

            pub fn comment(&self) -> Option<&str> {
                self.value.comment()
            }

            pub fn value(&self) -> &ServerValue {
                &self.value
            }

            pub fn value_mut(&mut self) -> &mut ServerValue {
                &mut self.value
            }
        }

        impl HeaderField for $header {
            fn field_name(&self) -> &str {
                $long
            }

            fn compact_name(&self) -> &str {
                $long
            }

            fn allow_multiple(&self) -> bool {
                true
            }

            fn parse_value(&mut self, value: &str) -> Result<()> {
                self.value = ServerValue::parse($long, value)?;
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                self.value.to_string()
            }

            fn is_valid(&self) -> bool {
                self.value.is_valid()
            }

            fn clear(&mut self) {
                self.value = ServerValue::default();
            }
        }
    };
}

server_header!(
    /// Server: software used by the UAS
    Server, "Server"
);

server_header!(
    /// User-Agent: software used by the UAC
    UserAgent, "User-Agent"
);

impl_header_conversions!(Server, UserAgent);
impl_group_equality!(Server, UserAgent);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_server_product_and_comment() {
        let server = Server::from_str("Server: HomeServer2").unwrap();
        assert_eq!(server.product_name(), "HomeServer2");
        assert_eq!(server.product_version(), None);
        assert_eq!(server.comment(), None);

        let server = Server::from_str("Server: Acme/2.0 (Ubuntu)").unwrap();
        assert_eq!(server.to_canonical_string(), "Acme/2.0 (Ubuntu)");
    }

    #[test]
    fn test_comment_moves_last() {
        let ua = UserAgent::from_str("User-Agent: (beta build) Softphone/1.5").unwrap();
        assert_eq!(ua.product_name(), "Softphone");
        assert_eq!(ua.comment(), Some("beta build"));
        assert_eq!(ua.to_canonical_string(), "Softphone/1.5 (beta build)");
    }

    #[test]
    fn test_only_first_product_kept() {
        let ua = UserAgent::from_str("User-Agent: Softphone/1.5 libsip/0.9 (x) (y)").unwrap();
        assert_eq!(ua.product_name(), "Softphone");
        assert_eq!(ua.comment(), Some("x"));
        assert_eq!(ua.to_canonical_string(), "Softphone/1.5 (x)");
    }

    #[test]
    fn test_comment_only() {
        let server = Server::from_str("Server: (private build)").unwrap();
        assert_eq!(server.product_name(), "");
        assert!(server.is_valid());
        assert_eq!(server.to_canonical_string(), "(private build)");
    }

    #[test]
    fn test_case_rules() {
        let a = Server::from_str("Acme/2.0 (Ubuntu)").unwrap();
        let b = Server::from_str("ACME/2.0 (Ubuntu)").unwrap();
        let c = Server::from_str("Acme/2.0 (ubuntu)").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builder_validation() {
        let ua = UserAgent::new("Softphone", Some("1.5")).unwrap().with_comment("Linux").unwrap();
        assert_eq!(ua.to_canonical_string(), "Softphone/1.5 (Linux)");
        assert!(matches!(UserAgent::new("", None), Err(Error::ArgumentNull(_))));
        assert!(UserAgent::new("Soft phone", None).is_err());
        assert!(UserAgent::new("Softphone", None).unwrap().with_comment("bad ) text").is_err());
    }

    #[test]
    fn test_malformed() {
        assert!(Server::from_str("Server:").is_err());
        assert!(Server::from_str("Server: Acme/").is_err());
        assert!(Server::from_str("Server: (unclosed").is_err());
    }
}
