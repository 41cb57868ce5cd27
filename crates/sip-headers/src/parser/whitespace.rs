use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{opt, recognize},
    multi::{many0, many1},
    sequence::pair,
};

use super::ParseResult;

/// Parses a single whitespace character (SP or HTAB)
pub fn wsp(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(alt((tag(b" "), tag(b"\t"))))(input)
}

/// Parses optional whitespace (0 or more SP or HTAB)
pub fn owsp(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(wsp))(input)
}

/// Parses CRLF.
/// With the `lenient_parsing` feature a bare LF is accepted as well.
#[cfg(not(feature = "lenient_parsing"))]
pub fn crlf(input: &[u8]) -> ParseResult<&[u8]> {
    tag(b"\r\n")(input)
}

/// Parses CRLF.
/// With the `lenient_parsing` feature a bare LF is accepted as well.
#[cfg(feature = "lenient_parsing")]
pub fn crlf(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(alt((tag(b"\r\n"), tag(b"\n"))))(input)
}

/// Parses Linear White Space (LWS) according to RFC 3261 Section 25.1
/// LWS = [*WSP CRLF] 1*WSP ; linear whitespace
pub fn lws(input: &[u8]) -> ParseResult<&[u8]> {
    alt((
        // Folded line - *WSP CRLF 1*WSP
        recognize(pair(pair(owsp, crlf), many1(wsp))),
        // Simple whitespace - 1*WSP
        recognize(many1(wsp)),
    ))(input)
}

/// Parses optional whitespace (SWS) according to RFC 3261
/// SWS = [LWS] ; sep whitespace
pub fn sws(input: &[u8]) -> ParseResult<&[u8]> {
    opt(lws)(input).map(|(rem, val)| (rem, val.unwrap_or(&[])))
}
