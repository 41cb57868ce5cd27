//! # URIs carried by header values
//!
//! A compact URI model covering what the header grammars need:
//!
//! - [`SipUri`] for `sip:` and `sips:` URIs, with user info, host, port,
//!   parameters and headers parsed out
//! - [`AbsoluteUri`] for any other `scheme:rest` URI, kept verbatim
//! - [`Uri`], the `addr-spec` choice between the two
//!
//! Host names compare case-insensitively; everything else compares exactly.
//!
//! ```rust
//! use rvoip_sip_headers::types::uri::Uri;
//! use std::str::FromStr;
//!
//! let uri = Uri::from_str("sip:bob@192.0.2.4").unwrap();
//! assert_eq!(uri.host().as_deref(), Some("192.0.2.4"));
//! assert_eq!(uri.user_info().as_deref(), Some("bob"));
//! assert_eq!(uri.to_string(), "sip:bob@192.0.2.4");
//! ```

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::uri::{absolute_uri, host, sip_uri, uri};
use crate::parser::parse_all;
use crate::types::param::{GenericParam, Params};

const URI_FIELD: &str = "URI";

/// Scheme of a SIP URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    Sip,
    Sips,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host part of a SIP URI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Host {
    /// A domain name (e.g., "atlanta.com")
    Domain(String),
    /// An IPv4 or IPv6 address
    Address(IpAddr),
}

impl Host {
    pub fn domain(domain: impl Into<String>) -> Self {
        Host::Domain(domain.into())
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Host::Domain(a), Host::Domain(b)) => a.eq_ignore_ascii_case(b),
            (Host::Address(a), Host::Address(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Host {}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(domain) => write!(f, "{}", domain),
            Host::Address(IpAddr::V4(addr)) => write!(f, "{}", addr),
            Host::Address(IpAddr::V6(addr)) => write!(f, "[{}]", addr),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_all(URI_FIELD, s, host)
    }
}

/// A `sip:` or `sips:` URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipUri {
    scheme: Scheme,
    user: Option<String>,
    password: Option<String>,
    host: Host,
    port: Option<u16>,
    params: Params,
    headers: Option<String>,
}

impl SipUri {
    pub fn new(scheme: Scheme, host: Host) -> Self {
        SipUri {
            scheme,
            user: None,
            password: None,
            host,
            port: None,
            params: Params::new(),
            headers: None,
        }
    }

    pub(crate) fn from_parts(
        scheme: Scheme,
        user: Option<String>,
        password: Option<String>,
        host: Host,
        port: Option<u16>,
        params: Params,
        headers: Option<String>,
    ) -> Self {
        SipUri { scheme, user, password, host, port, params, headers }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_param(mut self, param: GenericParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// `user[:password]`, when a user is present
    pub fn user_info(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        Some(match &self.password {
            Some(password) => format!("{}:{}", user, password),
            None => user.clone(),
        })
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(user_info) = self.user_info() {
            write!(f, "{}@", user_info)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}", self.params)?;
        if let Some(headers) = &self.headers {
            write!(f, "?{}", headers)?;
        }
        Ok(())
    }
}

impl FromStr for SipUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_all(URI_FIELD, s.trim(), sip_uri)
    }
}

/// Any URI of the form `scheme:rest`, stored verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsoluteUri {
    scheme: String,
    rest: String,
}

impl AbsoluteUri {
    pub(crate) fn from_parts(scheme: String, rest: String) -> Self {
        AbsoluteUri { scheme, rest }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Everything after the first colon
    pub fn rest(&self) -> &str {
        &self.rest
    }

    fn authority(&self) -> Option<&str> {
        let hier = self.rest.strip_prefix("//")?;
        let end = hier.find(['/', '?', '#']).unwrap_or(hier.len());
        Some(&hier[..end])
    }

    /// Host of a hierarchical URI (`scheme://[userinfo@]host[:port]/...`)
    pub fn host(&self) -> Option<&str> {
        let authority = self.authority()?;
        let host_port = match authority.rfind('@') {
            Some(at) => &authority[at + 1..],
            None => authority,
        };
        let host = if host_port.starts_with('[') {
            match host_port.find(']') {
                Some(end) => &host_port[..=end],
                None => host_port,
            }
        } else {
            host_port.split(':').next().unwrap_or(host_port)
        };
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// User info of a hierarchical URI
    pub fn user_info(&self) -> Option<&str> {
        let authority = self.authority()?;
        authority.rfind('@').map(|at| &authority[..at])
    }
}

impl PartialEq for AbsoluteUri {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme) && self.rest == other.rest
    }
}

impl Eq for AbsoluteUri {}

impl fmt::Display for AbsoluteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.rest)
    }
}

impl FromStr for AbsoluteUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_all(URI_FIELD, s.trim(), absolute_uri)
    }
}

/// addr-spec: a SIP URI or any other absolute URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uri {
    Sip(SipUri),
    Absolute(AbsoluteUri),
}

impl Uri {
    pub fn host(&self) -> Option<String> {
        match self {
            Uri::Sip(uri) => Some(uri.host().to_string()),
            Uri::Absolute(uri) => uri.host().map(str::to_string),
        }
    }

    pub fn user_info(&self) -> Option<String> {
        match self {
            Uri::Sip(uri) => uri.user_info(),
            Uri::Absolute(uri) => uri.user_info().map(str::to_string),
        }
    }

    pub fn as_sip(&self) -> Option<&SipUri> {
        match self {
            Uri::Sip(uri) => Some(uri),
            Uri::Absolute(_) => None,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uri::Sip(uri) => write!(f, "{}", uri),
            Uri::Absolute(uri) => write!(f, "{}", uri),
        }
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Same grammar as inside a header: a sip: URI that fails the SIP
        // grammar is still a valid absolute URI
        parse_all(URI_FIELD, s.trim(), uri)
    }
}

impl From<SipUri> for Uri {
    fn from(uri: SipUri) -> Self {
        Uri::Sip(uri)
    }
}

impl From<AbsoluteUri> for Uri {
    fn from(uri: AbsoluteUri) -> Self {
        Uri::Absolute(uri)
    }
}
