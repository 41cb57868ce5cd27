//! # Authentication challenges
//!
//! WWW-Authenticate and Proxy-Authenticate carry a challenge
//! ([RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1)):
//!
//! ```text
//! challenge        =  ("Digest" LWS digest-cln *(COMMA digest-cln)) / other-challenge
//! other-challenge  =  auth-scheme LWS auth-param *(COMMA auth-param)
//! digest-cln       =  realm / domain / nonce / opaque / stale / algorithm
//!                     / qop-options / auth-param
//! realm            =  "realm" EQUAL quoted-string
//! domain           =  "domain" EQUAL LDQUOT URI *( 1*SP URI ) RDQUOT
//! nonce            =  "nonce" EQUAL quoted-string
//! opaque           =  "opaque" EQUAL quoted-string
//! stale            =  "stale" EQUAL ( "true" / "false" )
//! algorithm        =  "algorithm" EQUAL ( "MD5" / "MD5-sess" / token )
//! qop-options      =  "qop" EQUAL LDQUOT qop-value *("," qop-value) RDQUOT
//! ```
//!
//! Known parameters become typed fields. Anything else is kept, in order, as a
//! generic parameter. Quoted values (realm, nonce, opaque, domain) compare case
//! sensitively; the scheme, algorithm and qop tokens do not.

use std::fmt;

use nom::{
    combinator::opt,
    multi::separated_list1,
    sequence::{pair, preceded},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::params::gen_value;
use crate::parser::quoted::{is_quotable, quote};
use crate::parser::separators::{comma, equal};
use crate::parser::token::{is_valid_token, token};
use crate::parser::utils::bytes_to_string;
use crate::parser::whitespace::lws;
use crate::parser::{parse_all, ParseResult};
use crate::resources::VALUE_REQUIRED;
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};
use crate::types::param::{GenericParam, GenericValue, Params};

// auth-param = auth-param-name EQUAL ( token / quoted-string )
fn auth_param(input: &[u8]) -> ParseResult<(&[u8], GenericValue)> {
    pair(token, preceded(equal, gen_value))(input)
}

fn challenge(input: &[u8]) -> ParseResult<(&[u8], Option<Vec<(&[u8], GenericValue)>>)> {
    pair(token, opt(preceded(lws, separated_list1(comma, auth_param))))(input)
}

// Parameters with a typed field. Generic params may not reuse these names.
const TYPED_PARAMS: [&str; 7] = ["realm", "domain", "nonce", "opaque", "stale", "algorithm", "qop"];

fn quotable(param: &str, value: &str) -> Result<String> {
    if !is_quotable(value) {
        return Err(Error::InvalidFormat(format!("line break in {}", param)));
    }
    Ok(value.to_string())
}

fn tokens_eq(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

/// An authentication challenge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Challenge {
    scheme: String,
    realm: Option<String>,
    domain: Vec<String>,
    nonce: Option<String>,
    opaque: Option<String>,
    stale: Option<bool>,
    algorithm: Option<String>,
    qop: Vec<String>,
    params: Params,
}

impl Challenge {
    /// A challenge with the given scheme and no parameters
    pub fn new(scheme: &str) -> Result<Self> {
        let scheme = scheme.trim();
        if scheme.is_empty() {
            return Err(Error::ArgumentNull("auth-scheme".to_string()));
        }
        if !is_valid_token(scheme) {
            return Err(Error::InvalidFormat(format!("invalid auth-scheme '{}'", scheme)));
        }
        Ok(Challenge { scheme: scheme.to_string(), ..Default::default() })
    }

    /// A Digest challenge with realm and nonce
    pub fn digest(realm: &str, nonce: &str) -> Result<Self> {
        Ok(Challenge {
            scheme: "Digest".to_string(),
            realm: Some(quotable("realm", realm)?),
            nonce: Some(quotable("nonce", nonce)?),
            ..Default::default()
        })
    }

    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::parse(field, VALUE_REQUIRED));
        }
        let (scheme, params) = parse_all(field, value, challenge)?;

        let mut parsed = Challenge { scheme: bytes_to_string(scheme), ..Default::default() };
        for (name, value) in params.unwrap_or_default() {
            let name = bytes_to_string(name);
            parsed.apply_param(field, name, value)?;
        }
        Ok(parsed)
    }

    fn apply_param(&mut self, field: &str, name: String, value: GenericValue) -> Result<()> {
        let text = value.as_str();
        match name.to_ascii_lowercase().as_str() {
            "realm" => self.realm = Some(text.to_string()),
            "domain" => self.domain = text.split_whitespace().map(str::to_string).collect(),
            "nonce" => self.nonce = Some(text.to_string()),
            "opaque" => self.opaque = Some(text.to_string()),
            "stale" => {
                self.stale = Some(if text.eq_ignore_ascii_case("true") {
                    true
                } else if text.eq_ignore_ascii_case("false") {
                    false
                } else {
                    return Err(Error::parse(field, format!("stale must be true or false, got '{}'", text)));
                })
            }
            "algorithm" => self.algorithm = Some(text.to_string()),
            "qop" => {
                self.qop = text
                    .split(',')
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            _ => self.params.push(GenericParam::from_parts(name, Some(value))),
        }
        Ok(())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn is_digest(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("Digest")
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    pub fn stale(&self) -> Option<bool> {
        self.stale
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    pub fn qop(&self) -> &[String] {
        &self.qop
    }

    /// Parameters with no typed field, in the order they appeared
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn with_realm(mut self, realm: &str) -> Result<Self> {
        self.realm = Some(quotable("realm", realm)?);
        Ok(self)
    }

    /// The URIs are written space-separated, so none may be empty or contain whitespace
    pub fn with_domain(mut self, uris: &[&str]) -> Result<Self> {
        if let Some(bad) = uris.iter().find(|u| u.is_empty() || u.chars().any(char::is_whitespace)) {
            return Err(Error::InvalidFormat(format!("invalid domain URI '{}'", bad.escape_debug())));
        }
        self.domain = uris.iter().map(|u| u.to_string()).collect();
        Ok(self)
    }

    pub fn with_nonce(mut self, nonce: &str) -> Result<Self> {
        self.nonce = Some(quotable("nonce", nonce)?);
        Ok(self)
    }

    pub fn with_opaque(mut self, opaque: &str) -> Result<Self> {
        self.opaque = Some(quotable("opaque", opaque)?);
        Ok(self)
    }

    pub fn with_stale(mut self, stale: bool) -> Self {
        self.stale = Some(stale);
        self
    }

    pub fn with_algorithm(mut self, algorithm: &str) -> Result<Self> {
        if !is_valid_token(algorithm) {
            return Err(Error::InvalidFormat(format!("invalid algorithm '{}'", algorithm)));
        }
        self.algorithm = Some(algorithm.to_string());
        Ok(self)
    }

    pub fn with_qop(mut self, qop: &[&str]) -> Result<Self> {
        if let Some(bad) = qop.iter().find(|q| !is_valid_token(q)) {
            return Err(Error::InvalidFormat(format!("invalid qop value '{}'", bad)));
        }
        self.qop = qop.iter().map(|q| q.to_string()).collect();
        Ok(self)
    }

    /// Appends an auth-param. It needs a value, and its name must not be one
    /// of the typed parameters.
    pub fn with_param(mut self, param: GenericParam) -> Result<Self> {
        if param.value().is_none() {
            return Err(Error::InvalidFormat(format!("auth-param '{}' needs a value", param.name())));
        }
        if TYPED_PARAMS.iter().any(|typed| param.is_named(typed)) {
            return Err(Error::InvalidFormat(format!(
                "'{}' has a typed field and cannot be added as a generic auth-param",
                param.name()
            )));
        }
        self.params.push(param);
        Ok(self)
    }

    /// Scheme present, and for Digest both realm and nonce
    pub fn is_valid(&self) -> bool {
        if self.scheme.is_empty() {
            return false;
        }
        !self.is_digest() || (self.realm.is_some() && self.nonce.is_some())
    }
}

impl PartialEq for Challenge {
    fn eq(&self, other: &Self) -> bool {
        let algorithm_eq = match (&self.algorithm, &other.algorithm) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        self.scheme.eq_ignore_ascii_case(&other.scheme)
            && self.realm == other.realm
            && self.domain == other.domain
            && self.nonce == other.nonce
            && self.opaque == other.opaque
            && self.stale == other.stale
            && algorithm_eq
            && tokens_eq(&self.qop, &other.qop)
            && self.params == other.params
    }
}

impl Eq for Challenge {}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(realm) = &self.realm {
            parts.push(format!("realm={}", quote(realm)));
        }
        if !self.domain.is_empty() {
            parts.push(format!("domain={}", quote(&self.domain.join(" "))));
        }
        if let Some(nonce) = &self.nonce {
            parts.push(format!("nonce={}", quote(nonce)));
        }
        if let Some(opaque) = &self.opaque {
            parts.push(format!("opaque={}", quote(opaque)));
        }
        if let Some(stale) = self.stale {
            parts.push(format!("stale={}", if stale { "TRUE" } else { "FALSE" }));
        }
        if let Some(algorithm) = &self.algorithm {
            parts.push(format!("algorithm={}", algorithm));
        }
        if !self.qop.is_empty() {
            parts.push(format!("qop={}", quote(&self.qop.join(","))));
        }
        parts.extend(self.params.iter().map(|p| p.to_string()));

        if parts.is_empty() {
            write!(f, "{}", self.scheme)
        } else {
            write!(f, "{} {}", self.scheme, parts.join(", "))
        }
    }
}

macro_rules! challenge_header {
    ($(#[$doc:meta])* $header:ident, $long:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $header {
            challenge: Challenge,
        }

        impl $header {
            pub fn new(challenge: Challenge) -> Self {
                $header { challenge }
            }

            pub fn challenge(&self) -> &Challenge {
                &self.challenge
            }

            pub fn challenge_mut(&mut self) -> &mut Challenge {
                &mut self.challenge
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

            fn is_comma_list(&self) -> bool {
                false
            }

            fn parse_value(&mut self, value: &str) -> Result<()> {
                self.challenge = Challenge::parse($long, value)?;
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                if self.challenge.scheme().is_empty() {
                    String::new()
                } else {
                    self.challenge.to_string()
                }
            }

            fn is_valid(&self) -> bool {
                self.challenge.is_valid()
            }

            fn clear(&mut self) {
                self.challenge = Challenge::default();
            }
        }
    };
}

challenge_header!(
    /// WWW-Authenticate: challenge from a UAS or registrar (RFC 3261 Section 20.44)
    WwwAuthenticate, "WWW-Authenticate"
);

challenge_header!(
    /// Proxy-Authenticate: challenge from a proxy (RFC 3261 Section 20.27)
    ProxyAuthenticate, "Proxy-Authenticate"
);

impl_header_conversions!(WwwAuthenticate, ProxyAuthenticate);
impl_group_equality!(WwwAuthenticate, ProxyAuthenticate);
