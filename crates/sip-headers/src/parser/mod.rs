//! nom parsers for the RFC 3261 grammar shared by every header type.
//!
//! Parsers work on `&[u8]` and follow the ABNF names of
//! [RFC 3261 Section 25](https://datatracker.ietf.org/doc/html/rfc3261#section-25).
//! Header types never call a combinator directly on user input; they go through
//! [`parse_all`], which requires the whole value to match and turns a nom failure
//! into an [`Error::ParseError`] naming the header.

pub mod params;
pub mod quoted;
pub mod separators;
pub mod token;
pub mod uri;
pub mod utils;
pub mod values;
pub mod whitespace;

use nom::{combinator::all_consuming, IResult};
use tracing::trace;

use crate::error::{Error, Result};

// Type alias for parser result
pub type ParseResult<'a, O> = IResult<&'a [u8], O>;

/// Runs `parser` over all of `input`, reporting any failure against `field`.
pub fn parse_all<'a, O, F>(field: &str, input: &'a str, parser: F) -> Result<O>
where
    F: FnMut(&'a [u8]) -> ParseResult<'a, O>,
{
    match all_consuming(parser)(input.as_bytes()) {
        Ok((_, value)) => Ok(value),
        Err(err) => {
            let reason = describe(&err);
            trace!(field, input, %reason, "header value rejected");
            Err(Error::parse(field, reason))
        }
    }
}

fn describe(err: &nom::Err<nom::error::Error<&[u8]>>) -> String {
    match err {
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            if e.input.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected input at '{}'", String::from_utf8_lossy(e.input))
            }
        }
    }
}
