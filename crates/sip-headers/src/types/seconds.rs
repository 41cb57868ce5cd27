//! # Delta-seconds headers
//!
//! Min-Expires and Expires carry a single `delta-seconds` value
//! ([RFC 3261 Section 20.23](https://datatracker.ietf.org/doc/html/rfc3261#section-20.23),
//! [Section 20.19](https://datatracker.ietf.org/doc/html/rfc3261#section-20.19)).
//!
//! The value is optional: an unset header is different from one set to zero.
//! A value that does not fit in 32 bits is reported as [`Error::Overflow`]
//! rather than as a parse error.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::parse_all;
use crate::parser::utils::bytes_to_string;
use crate::parser::values::delta_seconds;
use crate::resources::VALUE_REQUIRED;
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};

fn parse_seconds(field: &str, value: &str) -> Result<u32> {
    if value.is_empty() {
        return Err(Error::parse(field, VALUE_REQUIRED));
    }
    let digits = bytes_to_string(parse_all(field, value, delta_seconds)?);
    digits.parse::<u32>().map_err(|_| Error::Overflow {
        field: field.to_string(),
        value: digits.clone(),
    })
}

macro_rules! seconds_header {
    ($(#[$doc:meta])* $header:ident, $long:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $header {
            seconds: Option<u32>,
        }

        impl $header {
            pub fn new(seconds: u32) -> Self {
                $header { seconds: Some(seconds) }
            }

            pub fn seconds(&self) -> Option<u32> {
                self.seconds
            }

            pub fn set_seconds(&mut self, seconds: Option<u32>) {
                self.seconds = seconds;
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
                false
            }

            fn parse_value(&mut self, value: &str) -> Result<()> {
                self.seconds = Some(parse_seconds($long, value)?);
                Ok(())
            }

            fn to_canonical_string(&self) -> String {
                self.seconds.map(|s| s.to_string()).unwrap_or_default()
            }

            fn is_valid(&self) -> bool {
                self.seconds.is_some()
            }

            fn clear(&mut self) {
                self.seconds = None;
            }
        }
    };
}

seconds_header!(
    /// Min-Expires: shortest refresh interval a server accepts
    MinExpires, "Min-Expires"
);

seconds_header!(
    /// Expires: relative time after which a message or registration expires
    Expires, "Expires"
);

impl_header_conversions!(MinExpires, Expires);
impl_group_equality!(MinExpires, Expires);
