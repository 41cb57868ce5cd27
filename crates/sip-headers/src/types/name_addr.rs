//! # Name-addr headers
//!
//! Record-Route and Route carry a name-addr followed by generic parameters
//! ([RFC 3261 Section 20.30](https://datatracker.ietf.org/doc/html/rfc3261#section-20.30),
//! [Section 20.34](https://datatracker.ietf.org/doc/html/rfc3261#section-20.34)):
//!
//! ```text
//! Record-Route  =  "Record-Route" HCOLON rec-route *(COMMA rec-route)
//! rec-route     =  name-addr *( SEMI rr-param )
//! Route         =  "Route" HCOLON route-param *(COMMA route-param)
//! route-param   =  name-addr *( SEMI rr-param )
//! name-addr     =  [ display-name ] LAQUOT addr-spec RAQUOT
//! display-name  =  *(token LWS)/ quoted-string
//! ```
//!
//! The order of Record-Route and Route entries is significant, which is why a
//! message keeps them in a [`HeaderFieldGroup`](crate::types::group::HeaderFieldGroup)
//! with one instance per entry.

use std::fmt;

use nom::{
    branch::alt,
    combinator::{map, opt, recognize},
    multi::many1,
    sequence::{delimited, terminated, tuple},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::params::semicolon_params0;
use crate::parser::quoted::{is_quotable, quote, quoted_string, unescape_quoted};
use crate::parser::separators::{laquot, raquot};
use crate::parser::token::token;
use crate::parser::uri::uri;
use crate::parser::utils::bytes_to_string;
use crate::parser::whitespace::sws;
use crate::parser::{parse_all, ParseResult};
use crate::resources::VALUE_REQUIRED;
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};
use crate::types::param::{GenericParam, Params};
use crate::types::uri::Uri;

fn display_name(input: &[u8]) -> ParseResult<String> {
    alt((
        map(quoted_string, unescape_quoted),
        map(recognize(many1(terminated(token, sws))), |v: &[u8]| {
            bytes_to_string(v).trim_end().to_string()
        }),
    ))(input)
}

/// `[display-name] <addr-spec> *(;generic-param)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAddrValue {
    display_name: Option<String>,
    uri: Option<Uri>,
    params: Params,
}

impl NameAddrValue {
    pub fn new(uri: Uri) -> Self {
        NameAddrValue { display_name: None, uri: Some(uri), params: Params::new() }
    }

    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::parse(field, VALUE_REQUIRED));
        }
        let (display_name, uri, params) = parse_all(
            field,
            value,
            tuple((opt(display_name), delimited(laquot, uri, raquot), semicolon_params0)),
        )?;
        Ok(NameAddrValue { display_name, uri: Some(uri), params: params.into() })
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Control characters are kept and escaped on output. Line breaks are rejected.
    pub fn set_display_name(&mut self, name: Option<&str>) -> Result<()> {
        if let Some(text) = name {
            if !is_quotable(text) {
                return Err(Error::InvalidFormat(format!("line break in display name '{}'", text.escape_debug())));
            }
        }
        self.display_name = name.map(str::to_string);
        Ok(())
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

impl fmt::Display for NameAddrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(uri) = &self.uri else {
            return Ok(());
        };
        if let Some(name) = &self.display_name {
            write!(f, "{} ", quote(name))?;
        }
        write!(f, "<{}>{}", uri, self.params)
    }
}

macro_rules! name_addr_header {
    ($(#[$doc:meta])* $header:ident, $long:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $header {
            value: NameAddrValue,
        }

        impl $header {
            pub fn new(uri: Uri) -> Self {
                $header { value: NameAddrValue::new(uri) }
            }

            pub fn with_display_name(mut self, name: &str) -> Result<Self> {
                self.value.set_display_name(Some(name))?;
                Ok(self)
            }

            pub fn set_display_name(&mut self, name: Option<&str>) -> Result<()> {
                self.value.set_display_name(name)
            }

            pub fn with_param(mut self, param: GenericParam) -> Self {
                self.value.params_mut().push(param);
                self
            }

            pub fn display_name(&self) -> Option<&str> {
                self.value.display_name()
            }

            pub fn uri(&self) -> Option<&Uri> {
                self.value.uri()
            }

            pub fn params(&self) -> &Params {
                self.value.params()
            }

            pub fn params_mut(&mut self) -> &mut Params {
                self.value.params_mut()
            }

            /// True when the URI carries the `lr` parameter (RFC 3261 Section 16.12)
            pub fn is_loose_route(&self) -> bool {
                self.value
                    .uri()
                    .and_then(Uri::as_sip)
                    .map_or(false, |sip| sip.params().contains("lr"))
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
                self.value = NameAddrValue::parse($long, value)?;
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                self.value.to_string()
            }

            fn is_valid(&self) -> bool {
                self.value.uri().is_some()
            }

            fn clear(&mut self) {
                self.value = NameAddrValue::default();
            }
        }
    };
}

name_addr_header!(
    /// Record-Route: proxies that want to stay on the dialog's path
    RecordRoute, "Record-Route"
);

name_addr_header!(
    /// Route: the set of proxies a request must traverse
    Route, "Route"
);

impl_header_conversions!(RecordRoute, Route);
impl_group_equality!(RecordRoute, Route);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_route() {
        let rr = RecordRoute::from_str("Record-Route: <sip:server10.biloxi.com;lr>").unwrap();
        assert!(rr.is_loose_route());
        assert_eq!(rr.display_name(), None);
        assert_eq!(rr.uri().unwrap().host().as_deref(), Some("server10.biloxi.com"));
        assert_eq!(rr.to_canonical_string(), "<sip:server10.biloxi.com;lr>");
    }

    #[test]
    fn test_display_names() {
        let quoted = Route::from_str("Route: \"Proxy \\\"One\\\"\" <sip:p1.example.com;lr>;x=1").unwrap();
        assert_eq!(quoted.display_name(), Some("Proxy \"One\""));
        assert_eq!(quoted.params().get_value("x"), Some("1"));
        assert_eq!(quoted.to_canonical_string(), "\"Proxy \\\"One\\\"\" <sip:p1.example.com;lr>;x=1");

        let tokens = Route::from_str("Route: Edge Proxy <sip:edge.example.com>").unwrap();
        assert_eq!(tokens.display_name(), Some("Edge Proxy"));
        assert_eq!(tokens.to_canonical_string(), "\"Edge Proxy\" <sip:edge.example.com>");
        // The canonical quoted form reparses to the same value
        assert_eq!(Route::from_str(&tokens.to_canonical_string()).unwrap(), tokens);
    }

    #[test]
    fn test_display_name_with_control_characters() {
        let uri = Uri::from_str("sip:a.com").unwrap();
        let route = RecordRoute::new(uri.clone()).with_display_name("bad\u{1}name").unwrap();
        assert_eq!(route.to_canonical_string(), "\"bad\\\u{1}name\" <sip:a.com>");
        assert_eq!(RecordRoute::from_str(&route.to_header_line()).unwrap(), route);

        assert!(matches!(
            RecordRoute::new(uri).with_display_name("two\r\nlines"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_set_display_name_keeps_value_on_error() {
        let mut route = Route::from_str("\"Edge\" <sip:edge.example.com>").unwrap();
        assert!(route.set_display_name(Some("a\nb")).is_err());
        assert_eq!(route.display_name(), Some("Edge"));
        route.set_display_name(None).unwrap();
        assert_eq!(route.to_canonical_string(), "<sip:edge.example.com>");
    }

    #[test]
    fn test_absolute_addr_spec() {
        let route = Route::from_str("<tel:+1-212-555-1234>").unwrap();
        assert!(matches!(route.uri(), Some(Uri::Absolute(_))));
        assert!(!route.is_loose_route());
    }

    #[test]
    fn test_uri_matches_standalone_parse() {
        let route = Route::from_str("Route: <sip:bob@host:abc>").unwrap();
        assert_eq!(route.uri(), Some(&Uri::from_str("sip:bob@host:abc").unwrap()));
        assert!(matches!(route.uri(), Some(Uri::Absolute(_))));
        assert_eq!(route.to_canonical_string(), "<sip:bob@host:abc>");
    }

    #[test]
    fn test_requires_brackets() {
        assert!(RecordRoute::from_str("Record-Route: sip:server10.biloxi.com;lr").is_err());
        assert!(RecordRoute::from_str("Record-Route:").is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = RecordRoute::from_str("<sip:a.example.com;lr>").unwrap();
        let mut copy = original.clone();
        copy.params_mut().push(GenericParam::flag("x").unwrap());
        assert!(original.params().is_empty());
        assert_ne!(original, copy);
    }
}
