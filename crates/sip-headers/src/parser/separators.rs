use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::recognize,
    multi::many0,
    sequence::{pair, tuple},
};

use super::whitespace::sws;
use super::ParseResult;

pub fn hcolon(input: &[u8]) -> ParseResult<&[u8]> {
    // HCOLON = *( SP / HTAB ) ":" SWS
    recognize(tuple((many0(alt((tag(b" "), tag(b"\t")))), tag(b":"), sws)))(input)
}

pub fn dquote(input: &[u8]) -> ParseResult<&[u8]> {
    tag(b"\"")(input)
}

pub fn slash(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((sws, tag(b"/"), sws)))(input)
}

pub fn equal(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((sws, tag(b"="), sws)))(input)
}

pub fn raquot(input: &[u8]) -> ParseResult<&[u8]> {
    // RAQUOT = ">" SWS
    recognize(pair(tag(b">"), sws))(input)
}

pub fn laquot(input: &[u8]) -> ParseResult<&[u8]> {
    // LAQUOT = SWS "<"
    recognize(pair(sws, tag(b"<")))(input)
}

pub fn comma(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((sws, tag(b","), sws)))(input)
}

pub fn semi(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((sws, tag(b";"), sws)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcolon() {
        let (rem, _) = hcolon(b": value").unwrap();
        assert_eq!(rem, b"value");
        let (rem, _) = hcolon(b" \t:value").unwrap();
        assert_eq!(rem, b"value");
        assert!(hcolon(b"value").is_err());
    }

    #[test]
    fn test_list_separators_absorb_whitespace() {
        let (rem, _) = comma(b" , next").unwrap();
        assert_eq!(rem, b"next");
        let (rem, _) = semi(b";lr").unwrap();
        assert_eq!(rem, b"lr");
        let (rem, _) = equal(b" = value").unwrap();
        assert_eq!(rem, b"value");
        let (rem, _) = slash(b"/1.0").unwrap();
        assert_eq!(rem, b"1.0");
    }

    #[test]
    fn test_angle_quotes() {
        let (rem, _) = laquot(b"  <sip:a@b>").unwrap();
        assert_eq!(rem, b"sip:a@b>");
        let (rem, _) = raquot(b"> ;lr").unwrap();
        assert_eq!(rem, b";lr");
    }
}
