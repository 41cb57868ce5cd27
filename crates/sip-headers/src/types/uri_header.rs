//! # Absolute-URI headers
//!
//! Alert-Info, Error-Info and Call-Info share one value shape: an absolute URI in
//! angle brackets followed by generic parameters.
//!
//! ```text
//! Alert-Info   =  "Alert-Info" HCOLON alert-param *(COMMA alert-param)
//! alert-param  =  LAQUOT absoluteURI RAQUOT *( SEMI generic-param )
//! Error-Info   =  "Error-Info" HCOLON error-uri *(COMMA error-uri)
//! error-uri    =  LAQUOT absoluteURI RAQUOT *( SEMI generic-param )
//! Call-Info    =  "Call-Info" HCOLON info *(COMMA info)
//! info         =  LAQUOT absoluteURI RAQUOT *( SEMI info-param)
//! ```
//!
//! Each instance holds one element; comma lists are split by the caller and
//! collected in a [`HeaderFieldGroup`](crate::types::group::HeaderFieldGroup).
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let header = AlertInfo::from_str("Alert-Info: <http://www.example.com/sounds/moo.wav>;appearance=2").unwrap();
//! assert_eq!(header.uri().unwrap().to_string(), "http://www.example.com/sounds/moo.wav");
//! assert_eq!(header.params().get_value("appearance"), Some("2"));
//! assert_eq!(header.to_canonical_string(), "<http://www.example.com/sounds/moo.wav>;appearance=2");
//! ```

use std::fmt;

use nom::sequence::{delimited, pair};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::params::semicolon_params0;
use crate::parser::separators::{laquot, raquot};
use crate::parser::uri::absolute_uri;
use crate::parser::parse_all;
use crate::resources::VALUE_REQUIRED;
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};
use crate::types::param::{GenericParam, Params};
use crate::types::uri::AbsoluteUri;

/// `<absoluteURI> *(;generic-param)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteUriValue {
    uri: Option<AbsoluteUri>,
    params: Params,
}

impl AbsoluteUriValue {
    pub fn new(uri: AbsoluteUri) -> Self {
        AbsoluteUriValue { uri: Some(uri), params: Params::new() }
    }

    /// Parses one bracketed URI with its parameters
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::parse(field, VALUE_REQUIRED));
        }
        let (uri, params) = parse_all(
            field,
            value,
            pair(delimited(laquot, absolute_uri, raquot), semicolon_params0),
        )?;
        Ok(AbsoluteUriValue { uri: Some(uri), params: params.into() })
    }

    pub fn uri(&self) -> Option<&AbsoluteUri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: AbsoluteUri) {
        self.uri = Some(uri);
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn is_valid(&self) -> bool {
        self.uri.is_some()
    }
}

impl fmt::Display for AbsoluteUriValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(uri) = &self.uri {
            write!(f, "<{}>{}", uri, self.params)?;
        }
        Ok(())
    }
}

macro_rules! absolute_uri_header {
    ($(#[$doc:meta])* $header:ident, $long:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $header {
            value: AbsoluteUriValue,
        }

        impl $header {
            pub fn new(uri: AbsoluteUri) -> Self {
                $header { value: AbsoluteUriValue::new(uri) }
            }

            /// Builder-style parameter append
            pub fn with_param(mut self, param: GenericParam) -> Self {
                self.value.params_mut().push(param);
                self
            }

            pub fn uri(&self) -> Option<&AbsoluteUri> {
                self.value.uri()
            }

            pub fn set_uri(&mut self, uri: AbsoluteUri) {
                self.value.set_uri(uri);
            }

            pub fn params(&self) -> &Params {
                self.value.params()
            }

            pub fn params_mut(&mut self) -> &mut Params {
                self.value.params_mut()
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
                self.value = AbsoluteUriValue::parse($long, value)?;
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                self.value.to_string()
            }

            fn is_valid(&self) -> bool {
                self.value.is_valid()
            }

            fn clear(&mut self) {
                self.value = AbsoluteUriValue::default();
            }
        }
    };
}

absolute_uri_header!(
    /// Alert-Info: alternative ring tone or ringback (RFC 3261 Section 20.4)
    AlertInfo, "Alert-Info"
);

absolute_uri_header!(
    /// Error-Info: pointer to more information about an error (RFC 3261 Section 20.18)
    ErrorInfo, "Error-Info"
);

absolute_uri_header!(
    /// Call-Info: more information about the caller or callee (RFC 3261 Section 20.9)
    CallInfo, "Call-Info"
);

impl CallInfo {
    /// The `purpose` parameter (icon, info, card or a token)
    pub fn purpose(&self) -> Option<&str> {
        self.params().get_value("purpose")
    }
}

impl_header_conversions!(AlertInfo, ErrorInfo, CallInfo);
impl_group_equality!(AlertInfo, ErrorInfo, CallInfo);
