//! # Typed headers
//!
//! [`TypedHeader`] is the closed set of header types this crate knows, plus
//! [`Extension`] for everything else. It is the entry point for a caller that
//! holds a raw header line and does not know its type in advance:
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let header = TypedHeader::from_line("i: a84b4c76e66710@pc33.atlanta.com").unwrap();
//! assert_eq!(header.name(), HeaderName::CallId);
//! assert_eq!(header.to_string(), "Call-ID: a84b4c76e66710@pc33.atlanta.com");
//!
//! let unknown = TypedHeader::from_line("X-Trace: 42").unwrap();
//! assert!(matches!(unknown, TypedHeader::Other(_)));
//! ```
//!
//! Two typed headers are equal only when they hold the same variant and the
//! inner values are equal.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::utils::unfold;
use crate::types::allow::Allow;
use crate::types::auth::{ProxyAuthenticate, WwwAuthenticate};
use crate::types::call_id::{CallId, InReplyTo};
use crate::types::extension::Extension;
use crate::types::header_field::HeaderField;
use crate::types::header_name::HeaderName;
use crate::types::name_addr::{RecordRoute, Route};
use crate::types::option_tag::{ProxyRequire, Require, Supported, Unsupported};
use crate::types::seconds::{Expires, MinExpires};
use crate::types::server::{Server, UserAgent};
use crate::types::subject::Subject;
use crate::types::uri_header::{AlertInfo, CallInfo, ErrorInfo};

macro_rules! typed_headers {
    ($($variant:ident),+ $(,)?) => {
        /// A parsed header of any supported type
        #[derive(Debug, Clone, PartialEq)]
        pub enum TypedHeader {
            $($variant($variant),)+
            /// Header with no typed model
            Other(Extension),
        }

        impl TypedHeader {
            /// Parses a bare value for a known name, or keeps it raw for any other name
            pub fn from_name_value(name: &str, value: &str) -> Result<Self> {
                let header_name = HeaderName::from_str(name)?;
                let value = unfold(value);
                let value = value.trim();
                match header_name {
                    $(HeaderName::$variant => {
                        let mut header = $variant::default();
                        header.parse_value(value)?;
                        Ok(TypedHeader::$variant(header))
                    })+
                    HeaderName::Other(name) => {
                        debug!(header = %name, "no typed model for header, keeping it as an extension");
                        Ok(TypedHeader::Other(Extension::new(&name, value)?))
                    }
                }
            }

            /// Canonical name of the header
            pub fn name(&self) -> HeaderName {
                match self {
                    $(TypedHeader::$variant(_) => HeaderName::$variant,)+
                    TypedHeader::Other(ext) => HeaderName::Other(ext.name().to_string()),
                }
            }

            pub fn compact_name(&self) -> &str {
                match self {
                    $(TypedHeader::$variant(h) => h.compact_name(),)+
                    TypedHeader::Other(ext) => ext.compact_name(),
                }
            }

            pub fn allow_multiple(&self) -> bool {
                match self {
                    $(TypedHeader::$variant(h) => h.allow_multiple(),)+
                    TypedHeader::Other(ext) => ext.allow_multiple(),
                }
            }

            /// Value part only
            pub fn to_canonical_string(&self) -> String {
                match self {
                    $(TypedHeader::$variant(h) => h.to_canonical_string(),)+
                    TypedHeader::Other(ext) => ext.to_canonical_string(),
                }
            }

            /// `Name: value` with the long name
            pub fn to_header_line(&self) -> String {
                match self {
                    $(TypedHeader::$variant(h) => h.to_header_line(),)+
                    TypedHeader::Other(ext) => ext.to_header_line(),
                }
            }

            pub fn is_valid(&self) -> bool {
                match self {
                    $(TypedHeader::$variant(h) => h.is_valid(),)+
                    TypedHeader::Other(ext) => ext.is_valid(),
                }
            }
        }

        $(
            impl From<$variant> for TypedHeader {
                fn from(header: $variant) -> Self {
                    TypedHeader::$variant(header)
                }
            }
        )+
    };
}

typed_headers!(
    AlertInfo,
    Allow,
    CallId,
    CallInfo,
    ErrorInfo,
    Expires,
    InReplyTo,
    MinExpires,
    ProxyAuthenticate,
    ProxyRequire,
    RecordRoute,
    Require,
    Route,
    Server,
    Subject,
    Supported,
    Unsupported,
    UserAgent,
    WwwAuthenticate,
);

impl TypedHeader {
    /// Splits a `Name: value` line at the first colon and parses it
    pub fn from_line(line: &str) -> Result<Self> {
        let unfolded = unfold(line);
        match unfolded.split_once(':') {
            Some((name, value)) => Self::from_name_value(name, value),
            None => Err(Error::parse(unfolded.trim(), "missing ':' after header name")),
        }
    }
}

impl From<Extension> for TypedHeader {
    fn from(header: Extension) -> Self {
        TypedHeader::Other(header)
    }
}

impl fmt::Display for TypedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_line())
    }
}

impl FromStr for TypedHeader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_name() {
        let header = TypedHeader::from_line("Min-Expires: 60").unwrap();
        match &header {
            TypedHeader::MinExpires(min) => assert_eq!(min.seconds(), Some(60)),
            other => panic!("unexpected header {:?}", other),
        }
        assert!(!header.allow_multiple());

        let header = TypedHeader::from_line("k: 100rel").unwrap();
        assert_eq!(header.name(), HeaderName::Supported);
        assert_eq!(header.compact_name(), "k");
        assert_eq!(header.to_header_line(), "Supported: 100rel");
    }

    #[test]
    fn test_unknown_falls_back_to_extension() {
        let header = TypedHeader::from_line("P-Charging-Vector: icid-value=1234bc9876e").unwrap();
        assert!(header.name().is_extension());
        assert_eq!(header.to_canonical_string(), "icid-value=1234bc9876e");
        assert_eq!(header.to_string(), "P-Charging-Vector: icid-value=1234bc9876e");
    }

    #[test]
    fn test_grammar_errors_propagate() {
        let err = TypedHeader::from_line("Min-Expires: soon").unwrap_err();
        assert_eq!(err.field(), Some("Min-Expires"));
        assert!(TypedHeader::from_line("no colon").is_err());
        assert!(TypedHeader::from_line(": value").is_err());
    }

    #[test]
    fn test_variant_equality() {
        let require = TypedHeader::from_line("Require: timer").unwrap();
        let supported = TypedHeader::from_line("Supported: timer").unwrap();
        assert_ne!(require, supported);
        assert_eq!(require, TypedHeader::from(Require::new("TIMER").unwrap()));
    }
}
