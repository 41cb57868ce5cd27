//! # The HeaderField contract
//!
//! Every typed header implements [`HeaderField`]. The trait fixes the name
//! metadata, the multiplicity flag and the parse/serialize pair that a message
//! assembler relies on:
//!
//! - [`HeaderField::parse`] accepts a full `Name: value` line or a bare value,
//!   unfolds continuation lines, strips a matching long or compact name and hands
//!   the rest to the type's own grammar
//! - [`HeaderField::to_canonical_string`] renders the value part only, and is the
//!   exact inverse of `parse` for anything it produced
//! - [`HeaderField::coalesce`] gives the canonical single value of a group of
//!   occurrences, which is what group/single equality compares against
//!
//! Parsing is atomic. Implementations build the new value first and replace
//! `self` only on success, so a failed parse leaves the previous value in place.
//!
//! Instances are plain owned data. `Clone` is a deep copy and nothing is cached,
//! so shared read-only access from several threads is fine while mutation needs
//! exclusive access.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut min_expires = MinExpires::default();
//! min_expires.parse("Min-Expires: 60").unwrap();
//! assert_eq!(min_expires.seconds(), Some(60));
//! assert_eq!(min_expires.to_canonical_string(), "60");
//! assert_eq!(min_expires.to_header_line(), "Min-Expires: 60");
//! ```

use std::fmt::Debug;

use crate::error::Result;
use crate::parser::utils::{strip_header_name, unfold};

/// Capability set shared by every typed header
pub trait HeaderField: Clone + Debug + PartialEq {
    /// Canonical long name, e.g. `Call-ID`
    fn field_name(&self) -> &str;

    /// Compact alias, e.g. `i`. Same as the long name when none is defined.
    fn compact_name(&self) -> &str;

    /// Whether several lines with this name may coexist in one message
    fn allow_multiple(&self) -> bool;

    /// Whether one line may carry several values separated by top-level commas.
    /// Challenge headers use commas inside a single value and return false.
    fn is_comma_list(&self) -> bool {
        self.allow_multiple()
    }

    /// Parses a bare, unfolded, trimmed value and replaces the current state
    fn parse_value(&mut self, value: &str) -> Result<()>;

    /// Value portion in canonical form, without the header name
    fn to_canonical_string(&self) -> String;

    /// True when every mandatory sub-field is present and in range
    fn is_valid(&self) -> bool;

    /// Resets the value to its default
    fn clear(&mut self);

    /// Parses a header line or a bare value
    fn parse(&mut self, raw: &str) -> Result<()> {
        let unfolded = unfold(raw);
        let value = strip_header_name(&unfolded, self.field_name(), self.compact_name()).trim();
        self.parse_value(value)
    }

    /// Like [`HeaderField::parse`], but an absent input clears the value
    fn parse_opt(&mut self, raw: Option<&str>) -> Result<()> {
        match raw {
            Some(raw) => self.parse(raw),
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    /// `Name: value` with the long name
    fn to_header_line(&self) -> String {
        format!("{}: {}", self.field_name(), self.to_canonical_string())
    }

    /// Case-insensitive match against the long or compact name
    fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.field_name().eq_ignore_ascii_case(name) || self.compact_name().eq_ignore_ascii_case(name)
    }

    /// Single value equivalent to all of `fields`, if there is one.
    ///
    /// By default only a one-member slice has a single-valued rendering.
    /// List headers override this to merge their members.
    fn coalesce(fields: &[Self]) -> Option<Self>
    where
        Self: Sized,
    {
        match fields {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

/// Implements `FromStr` and `Display` for a header with a `Default` value
macro_rules! impl_header_conversions {
    ($($header:ty),+ $(,)?) => {
        $(
            impl ::std::str::FromStr for $header {
                type Err = $crate::error::Error;

                fn from_str(s: &str) -> $crate::error::Result<Self> {
                    let mut header = <$header>::default();
                    $crate::types::header_field::HeaderField::parse(&mut header, s)?;
                    Ok(header)
                }
            }

            impl ::std::fmt::Display for $header {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::types::header_field::HeaderField::to_canonical_string(self))
                }
            }
        )+
    };
}

pub(crate) use impl_header_conversions;
