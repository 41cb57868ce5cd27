use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    combinator::{all_consuming, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use super::separators::dquote;
use super::whitespace::{lws, sws};
use super::ParseResult;

// quoted-pair = "\" (%x00-09 / %x0B-0C / %x0E-7F)
pub fn quoted_pair(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        tag(b"\\"),
        take_while_m_n(1, 1, |c: u8| c <= 0x09 || c == 0x0B || c == 0x0C || (0x0E..=0x7F).contains(&c)),
    ))(input)
}

fn is_qdtext_char(c: u8) -> bool {
    c == 0x21 || (0x23..=0x5B).contains(&c) || (0x5D..=0x7E).contains(&c) || c >= 0x80
}

// qdtext = LWS / %x21 / %x23-5B / %x5D-7E / UTF8-NONASCII
pub fn qdtext(input: &[u8]) -> ParseResult<&[u8]> {
    alt((take_while1(is_qdtext_char), lws))(input)
}

/// quoted-string = SWS DQUOTE *(qdtext / quoted-pair ) DQUOTE
///
/// Returns the raw content between the quotes, escapes still in place.
pub fn quoted_string(input: &[u8]) -> ParseResult<&[u8]> {
    preceded(
        sws,
        delimited(dquote, recognize(many0(alt((qdtext, quoted_pair)))), dquote),
    )(input)
}

/// Resolves quoted-pairs in raw quoted-string content.
pub fn unescape_quoted(raw: &[u8]) -> String {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter();
    while let Some(&b) = bytes.next() {
        if b == b'\\' {
            if let Some(&escaped) = bytes.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(b);
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Whether `value` can be written as a quoted-string.
/// CR and LF have no quoted-pair form.
pub fn is_quotable(value: &str) -> bool {
    !value.contains(['\r', '\n'])
}

/// Wraps `value` in double quotes. `"`, `\` and control characters other
/// than HTAB are written as quoted-pairs.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' || (c.is_ascii_control() && c != '\t') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn is_ctext_char(c: u8) -> bool {
    (0x21..=0x27).contains(&c) || (0x2A..=0x5B).contains(&c) || (0x5D..=0x7E).contains(&c) || c >= 0x80
}

// ctext = %x21-27 / %x2A-5B / %x5D-7E / UTF8-NONASCII / LWS
pub fn ctext(input: &[u8]) -> ParseResult<&[u8]> {
    alt((take_while1(is_ctext_char), lws))(input)
}

fn comment_body(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(alt((ctext, quoted_pair, nested_comment))))(input)
}

fn nested_comment(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(delimited(tag(b"("), comment_body, tag(b")")))(input)
}

/// comment = LPAREN *(ctext / quoted-pair / comment) RPAREN
///
/// Returns the text between the outer parentheses verbatim.
pub fn comment(input: &[u8]) -> ParseResult<&[u8]> {
    preceded(sws, delimited(tag(b"("), comment_body, tag(b")")))(input)
}

/// Whether `text` can stand between the parentheses of a comment
pub fn is_valid_comment_text(text: &str) -> bool {
    all_consuming(comment_body)(text.as_bytes()).is_ok()
}
