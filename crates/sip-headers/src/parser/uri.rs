// URI grammar used inside header values (RFC 3261 Section 19.1 and 25.1)
//
// SIP-URI  = "sip:" [ userinfo ] hostport uri-parameters [ headers ]
// SIPS-URI = "sips:" [ userinfo ] hostport uri-parameters [ headers ]
// absoluteURI = scheme ":" ( hier-part / opaque-part )

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1, take_while_m_n},
    character::complete::{alpha1, digit1},
    combinator::{map, map_res, not, opt, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use super::utils::bytes_to_string;
use super::ParseResult;
use crate::types::param::{GenericParam, GenericValue};
use crate::types::uri::{AbsoluteUri, Host, Scheme, SipUri, Uri};

fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn is_user_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'%' | b'&' | b'=' | b'+' | b'$' | b',' | b';' | b'?' | b'/')
}

fn is_password_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'%' | b'&' | b'=' | b'+' | b'$' | b',')
}

fn is_param_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'%' | b'[' | b']' | b'/' | b':' | b'&' | b'+' | b'$')
}

fn is_header_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'%' | b'[' | b']' | b'/' | b'?' | b':' | b'+' | b'$' | b'=' | b'&')
}

fn is_hostname_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'.'
}

// Anything printable except the characters that delimit a URI inside a header
fn is_uric_char(c: u8) -> bool {
    (0x21..=0x7E).contains(&c) && !matches!(c, b'<' | b'>' | b'"')
}

fn scheme(input: &[u8]) -> ParseResult<Scheme> {
    alt((
        value(Scheme::Sips, tag_no_case(b"sips:")),
        value(Scheme::Sip, tag_no_case(b"sip:")),
    ))(input)
}

// userinfo = ( user / telephone-subscriber ) [ ":" password ] "@"
fn userinfo(input: &[u8]) -> ParseResult<(String, Option<String>)> {
    terminated(
        pair(
            map(take_while1(is_user_char), bytes_to_string),
            opt(preceded(tag(b":"), map(take_while(is_password_char), bytes_to_string))),
        ),
        tag(b"@"),
    )(input)
}

fn ipv6_reference(input: &[u8]) -> ParseResult<Host> {
    map_res(
        delimited(
            tag(b"["),
            take_while1(|c: u8| c.is_ascii_hexdigit() || c == b':' || c == b'.'),
            tag(b"]"),
        ),
        |addr: &[u8]| {
            bytes_to_string(addr)
                .parse::<Ipv6Addr>()
                .map(|a| Host::Address(IpAddr::V6(a)))
        },
    )(input)
}

fn hostname_or_ipv4(input: &[u8]) -> ParseResult<Host> {
    map(take_while1(is_hostname_char), |h: &[u8]| {
        let text = bytes_to_string(h);
        match text.parse::<Ipv4Addr>() {
            Ok(addr) => Host::Address(IpAddr::V4(addr)),
            Err(_) => Host::Domain(text),
        }
    })(input)
}

// host = hostname / IPv4address / IPv6reference
pub fn host(input: &[u8]) -> ParseResult<Host> {
    alt((ipv6_reference, hostname_or_ipv4))(input)
}

fn port(input: &[u8]) -> ParseResult<u16> {
    preceded(
        tag(b":"),
        map_res(digit1, |d: &[u8]| bytes_to_string(d).parse::<u16>()),
    )(input)
}

// uri-parameter = pname [ "=" pvalue ]
fn uri_param(input: &[u8]) -> ParseResult<GenericParam> {
    map(
        pair(
            take_while1(is_param_char),
            opt(preceded(tag(b"="), take_while1(is_param_char))),
        ),
        |(name, value): (&[u8], Option<&[u8]>)| {
            GenericParam::from_parts(
                bytes_to_string(name),
                value.map(|v| GenericValue::Token(bytes_to_string(v))),
            )
        },
    )(input)
}

fn uri_headers(input: &[u8]) -> ParseResult<String> {
    preceded(tag(b"?"), map(take_while1(is_header_char), bytes_to_string))(input)
}

pub fn sip_uri(input: &[u8]) -> ParseResult<SipUri> {
    map(
        tuple((
            scheme,
            opt(userinfo),
            host,
            opt(port),
            many0(preceded(tag(b";"), uri_param)),
            opt(uri_headers),
        )),
        |(scheme, userinfo, host, port, params, headers)| {
            let (user, password) = match userinfo {
                Some((user, password)) => (Some(user), password),
                None => (None, None),
            };
            SipUri::from_parts(scheme, user, password, host, port, params.into(), headers)
        },
    )(input)
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub fn absolute_uri(input: &[u8]) -> ParseResult<AbsoluteUri> {
    map(
        tuple((
            recognize(pair(
                alpha1,
                take_while(|c: u8| c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.')),
            )),
            tag(b":"),
            take_while1(is_uric_char),
        )),
        |(scheme, _, rest)| AbsoluteUri::from_parts(bytes_to_string(scheme), bytes_to_string(rest)),
    )(input)
}

/// addr-spec = SIP-URI / SIPS-URI / absoluteURI
///
/// A SIP URI only wins when it ends where the URI text ends. Otherwise the
/// whole text is read as an absolute URI, so `sip:bob@host:abc` is kept
/// rather than cut short at the port.
pub fn uri(input: &[u8]) -> ParseResult<Uri> {
    alt((
        map(terminated(sip_uri, not(take_while_m_n(1, 1, is_uric_char))), Uri::Sip),
        map(absolute_uri, Uri::Absolute),
    ))(input)
}
