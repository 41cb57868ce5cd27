use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::token::is_valid_token;

/// Names of the headers this crate models
///
/// Header names are case-insensitive in SIP. Known names keep their canonical
/// capitalization; parsing resolves the RFC 3261 compact forms `i`, `s` and `k`.
/// Any other token becomes [`HeaderName::Other`].
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use std::str::FromStr;
///
/// assert_eq!(HeaderName::from_str("i").unwrap(), HeaderName::CallId);
/// assert_eq!(HeaderName::from_str("record-route").unwrap().as_str(), "Record-Route");
/// assert_eq!(HeaderName::from_str("X-Trace").unwrap(), HeaderName::Other("x-trace".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HeaderName {
    /// Alert-Info: alternative ring tone
    AlertInfo,
    /// Allow: methods supported by the UA
    Allow,
    /// Call-ID: unique identifier for this call
    CallId,
    /// Call-Info: additional information about the caller or callee
    CallInfo,
    /// Error-Info: pointer to additional error information
    ErrorInfo,
    /// Expires: relative expiry of a message or content
    Expires,
    /// In-Reply-To: Call-IDs this call refers to
    InReplyTo,
    /// Min-Expires: minimum refresh interval
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
    /// Extension header name
    Other(String),
}

impl HeaderName {
    /// Canonical name of the header
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::AlertInfo => "Alert-Info",
            HeaderName::Allow => "Allow",
            HeaderName::CallId => "Call-ID",
            HeaderName::CallInfo => "Call-Info",
            HeaderName::ErrorInfo => "Error-Info",
            HeaderName::Expires => "Expires",
            HeaderName::InReplyTo => "In-Reply-To",
            HeaderName::MinExpires => "Min-Expires",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::ProxyRequire => "Proxy-Require",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::Require => "Require",
            HeaderName::Route => "Route",
            HeaderName::Server => "Server",
            HeaderName::Subject => "Subject",
            HeaderName::Supported => "Supported",
            HeaderName::Unsupported => "Unsupported",
            HeaderName::UserAgent => "User-Agent",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::Other(name) => name,
        }
    }

    /// Compact form, for the headers RFC 3261 defines one for
    pub fn compact_form(&self) -> Option<&'static str> {
        match self {
            HeaderName::CallId => Some("i"),
            HeaderName::Subject => Some("s"),
            HeaderName::Supported => Some("k"),
            _ => None,
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, HeaderName::Other(_))
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for HeaderName {}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ArgumentNull("header name".to_string()));
        }

        let name = match s.to_ascii_lowercase().as_str() {
            "alert-info" => HeaderName::AlertInfo,
            "allow" => HeaderName::Allow,
            "call-id" | "i" => HeaderName::CallId,
            "call-info" => HeaderName::CallInfo,
            "error-info" => HeaderName::ErrorInfo,
            "expires" => HeaderName::Expires,
            "in-reply-to" => HeaderName::InReplyTo,
            "min-expires" => HeaderName::MinExpires,
            "proxy-authenticate" => HeaderName::ProxyAuthenticate,
            "proxy-require" => HeaderName::ProxyRequire,
            "record-route" => HeaderName::RecordRoute,
            "require" => HeaderName::Require,
            "route" => HeaderName::Route,
            "server" => HeaderName::Server,
            "subject" | "s" => HeaderName::Subject,
            "supported" | "k" => HeaderName::Supported,
            "unsupported" => HeaderName::Unsupported,
            "user-agent" => HeaderName::UserAgent,
            "www-authenticate" => HeaderName::WwwAuthenticate,
            _ if is_valid_token(s) => HeaderName::Other(s.to_string()),
            _ => return Err(Error::InvalidFormat(format!("invalid header name '{}'", s))),
        };
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_header_name_from_str() {
        assert_eq!(HeaderName::from_str("Call-ID").unwrap(), HeaderName::CallId);
        assert_eq!(HeaderName::from_str("call-id").unwrap(), HeaderName::CallId);
        assert_eq!(HeaderName::from_str("i").unwrap(), HeaderName::CallId);
        assert_eq!(HeaderName::from_str("S").unwrap(), HeaderName::Subject);
        assert_eq!(HeaderName::from_str("k").unwrap(), HeaderName::Supported);
        assert_eq!(HeaderName::from_str("WWW-Authenticate").unwrap(), HeaderName::WwwAuthenticate);

        let custom = HeaderName::from_str("X-Custom").unwrap();
        assert!(custom.is_extension());
        assert_eq!(custom.as_str(), "X-Custom");
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(HeaderName::from_str(""), Err(Error::ArgumentNull(_))));
        assert!(matches!(HeaderName::from_str("Bad Name"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_compact_forms() {
        assert_eq!(HeaderName::CallId.compact_form(), Some("i"));
        assert_eq!(HeaderName::Allow.compact_form(), None);
    }

    #[test]
    fn test_case_insensitive_hash() {
        let mut names = HashSet::new();
        names.insert(HeaderName::Other("X-Foo".to_string()));
        assert!(names.contains(&HeaderName::Other("x-foo".to_string())));
        assert_eq!(HeaderName::from_str("X-FOO").unwrap(), HeaderName::Other("x-foo".to_string()));
    }
}
