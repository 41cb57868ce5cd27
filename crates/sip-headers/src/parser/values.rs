use nom::{
    bytes::complete::{tag, take_while1, take_while_m_n},
    character::complete::digit1,
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
};

use super::token::word;
use super::utils::bytes_to_string;
use super::ParseResult;

// callid = word [ "@" word ]
pub fn callid(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(word, opt(preceded(tag(b"@"), word))))(input)
}

// delta-seconds = 1*DIGIT
// The range check happens at the header so overflow can be reported on its own.
pub fn delta_seconds(input: &[u8]) -> ParseResult<&[u8]> {
    digit1(input)
}

// Status-Code = 3DIGIT
pub fn status_code(input: &[u8]) -> ParseResult<u16> {
    map(take_while_m_n(3, 3, |c: u8| c.is_ascii_digit()), |digits: &[u8]| {
        digits.iter().fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'))
    })(input)
}

pub fn version_number(input: &[u8]) -> ParseResult<u8> {
    map_res(digit1, |d: &[u8]| bytes_to_string(d).parse::<u8>())(input)
}

/// SIP-Version = "SIP" "/" 1*DIGIT "." 1*DIGIT
///
/// The protocol name is returned as found so the caller can decide how to
/// report a name other than SIP.
pub fn sip_version(input: &[u8]) -> ParseResult<(&[u8], u8, u8)> {
    map(
        tuple((
            take_while1(|c: u8| c.is_ascii_alphabetic()),
            tag(b"/"),
            version_number,
            tag(b"."),
            version_number,
        )),
        |(name, _, major, _, minor)| (name, major, minor),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callid() {
        let (rem, val) = callid(b"f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com").unwrap();
        assert!(rem.is_empty());
        assert_eq!(val, b"f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com");

        let (rem, val) = callid(b"a84b4c76e66710, next").unwrap();
        assert_eq!(val, b"a84b4c76e66710");
        assert_eq!(rem, b", next");

        // A dangling "@" is not part of the call-id
        let (rem, val) = callid(b"abc@").unwrap();
        assert_eq!(val, b"abc");
        assert_eq!(rem, b"@");
    }

    #[test]
    fn test_status_code() {
        let (rem, code) = status_code(b"180 Ringing").unwrap();
        assert_eq!(code, 180);
        assert_eq!(rem, b" Ringing");
        assert!(status_code(b"99 ").is_err());
    }

    #[test]
    fn test_sip_version() {
        let (rem, (name, major, minor)) = sip_version(b"SIP/2.0").unwrap();
        assert!(rem.is_empty());
        assert_eq!(name, b"SIP");
        assert_eq!((major, minor), (2, 0));

        let (_, (name, _, _)) = sip_version(b"sip/2.0").unwrap();
        assert_eq!(name, b"sip");

        assert!(sip_version(b"SIP/2").is_err());
        assert!(sip_version(b"SIP/999.0").is_err());
    }
}
