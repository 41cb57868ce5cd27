//! # Option-tag headers
//!
//! Require, Proxy-Require, Unsupported and Supported carry option tags
//! ([RFC 3261 Section 19.2](https://datatracker.ietf.org/doc/html/rfc3261#section-19.2)):
//!
//! ```text
//! Require        =  "Require" HCOLON option-tag *(COMMA option-tag)
//! Proxy-Require  =  "Proxy-Require" HCOLON option-tag *(COMMA option-tag)
//! Unsupported    =  "Unsupported" HCOLON option-tag *(COMMA option-tag)
//! Supported      =  ( "Supported" / "k" ) HCOLON [option-tag *(COMMA option-tag)]
//! option-tag     =  token
//! ```
//!
//! One instance holds one tag. A line such as `Require: 100rel, timer` is
//! split by the caller (see [`HeaderFieldGroup::parse_split`]) into one instance
//! per tag, which then form a group. Parsing a single instance keeps the first
//! tag and ignores the rest of the line.
//!
//! Tags compare case-insensitively.
//!
//! [`HeaderFieldGroup::parse_split`]: crate::types::group::HeaderFieldGroup::parse_split

use nom::{combinator::rest, sequence::pair};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::parse_all;
use crate::parser::token::{is_valid_token, token};
use crate::parser::utils::bytes_to_string;
use crate::resources::{TOKEN_INVALID, VALUE_REQUIRED};
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};

fn validate_tag(tag: &str) -> Result<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(Error::ArgumentNull("option-tag".to_string()));
    }
    if !is_valid_token(tag) {
        return Err(Error::InvalidFormat(format!("{}: '{}'", TOKEN_INVALID, tag)));
    }
    Ok(tag.to_string())
}

/// First option tag of a value; anything after it is left to the caller
fn parse_first_tag(field: &str, value: &str) -> Result<String> {
    let (tag, remainder) = parse_all(field, value, pair(token, rest))?;
    if !remainder.is_empty() {
        debug!(field, remainder = %String::from_utf8_lossy(remainder), "ignoring input after first option tag");
    }
    Ok(bytes_to_string(tag))
}

macro_rules! option_tag_header {
    ($(#[$doc:meta])* $header:ident, $long:expr, $compact:expr, allow_empty = $allow_empty:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $header {
            tag: String,
        }

        impl $header {
            /// Creates the header with one option tag
            pub fn new(tag: &str) -> Result<Self> {
                Ok($header { tag: validate_tag(tag)? })
            }

            pub fn tag(&self) -> &str {
                &self.tag
            }

            pub fn set_tag(&mut self, tag: &str) -> Result<()> {
                self.tag = validate_tag(tag)?;
                Ok(())
            }
        }

        impl PartialEq for $header {
            fn eq(&self, other: &Self) -> bool {
                self.tag.eq_ignore_ascii_case(&other.tag)
            }
        }

        impl Eq for $header {}

        impl HeaderField for $header {
            fn field_name(&self) -> &str {
                $long
            }

            fn compact_name(&self) -> &str {
                $compact
            }

            fn allow_multiple(&self) -> bool {
                true
            }

            fn parse_value(&mut self, value: &str) -> Result<()> {
                if value.is_empty() {
                    if $allow_empty {
                        self.tag.clear();
                        return Ok(());
                    }
                    return Err(Error::parse($long, VALUE_REQUIRED));
                }
                self.tag = parse_first_tag($long, value)?;
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                self.tag.clone()
            }

            fn is_valid(&self) -> bool {
                is_valid_token(&self.tag) || ($allow_empty && self.tag.is_empty())
            }

            fn clear(&mut self) {
                self.tag.clear();
            }
        }
    };
}

option_tag_header!(
    /// Require: option tags the UAS must support (RFC 3261 Section 20.32)
    Require, "Require", "Require", allow_empty = false
);

option_tag_header!(
    /// Proxy-Require: option tags proxies must support (RFC 3261 Section 20.29)
    ProxyRequire, "Proxy-Require", "Proxy-Require", allow_empty = false
);

option_tag_header!(
    /// Unsupported: option tags the UAS does not support (RFC 3261 Section 20.40)
    Unsupported, "Unsupported", "Unsupported", allow_empty = false
);

option_tag_header!(
    /// Supported: option tags the sender supports (RFC 3261 Section 20.37).
    /// An empty value is allowed and means no extensions.
    Supported, "Supported", "k", allow_empty = true
);

impl_header_conversions!(Require, ProxyRequire, Unsupported, Supported);
impl_group_equality!(Require, ProxyRequire, Unsupported, Supported);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_require() {
        let require = Require::from_str("Require: 100rel").unwrap();
        assert_eq!(require.tag(), "100rel");
        assert_eq!(require.to_canonical_string(), "100rel");
        assert_eq!(require.to_header_line(), "Require: 100rel");
        assert!(require.is_valid());
    }

    #[test]
    fn test_only_first_tag_is_kept() {
        let require = Require::from_str("Require: 100rel, timer").unwrap();
        assert_eq!(require.tag(), "100rel");
    }

    #[test]
    fn test_tags_compare_case_insensitively() {
        assert_eq!(Require::new("Timer").unwrap(), Require::new("timer").unwrap());
        assert_ne!(Require::new("timer").unwrap(), Require::new("100rel").unwrap());
    }

    #[test]
    fn test_constructor_rejects_bad_tags() {
        assert!(matches!(Require::new(""), Err(Error::ArgumentNull(_))));
        assert!(matches!(ProxyRequire::new("a b"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_value() {
        assert!(Unsupported::from_str("Unsupported:").is_err());
        let supported = Supported::from_str("Supported:").unwrap();
        assert_eq!(supported.tag(), "");
        assert!(supported.is_valid());
    }

    #[test]
    fn test_compact_supported() {
        let supported = Supported::from_str("k: path").unwrap();
        assert_eq!(supported.tag(), "path");
        assert_eq!(supported.compact_name(), "k");
        assert!(supported.matches_name("K"));
    }

    #[test]
    fn test_failed_parse_keeps_previous_value() {
        let mut require = Require::new("timer").unwrap();
        assert!(require.parse("Require: ,").is_err());
        assert_eq!(require.tag(), "timer");
    }

    #[test]
    fn test_parse_opt_none_clears() {
        let mut require = Require::new("timer").unwrap();
        require.parse_opt(None).unwrap();
        assert_eq!(require.tag(), "");
        assert!(!require.is_valid());
    }

    #[test]
    fn test_metadata() {
        let header = ProxyRequire::default();
        assert_eq!(header.field_name(), "Proxy-Require");
        assert_eq!(header.compact_name(), "Proxy-Require");
        assert!(header.allow_multiple());
    }
}
