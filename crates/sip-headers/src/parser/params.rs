use nom::{
    branch::alt,
    bytes::complete::take_while1,
    combinator::{map, opt},
    multi::many0,
    sequence::{pair, preceded},
};

use super::quoted::{quoted_string, unescape_quoted};
use super::separators::{equal, semi};
use super::token::{is_token_char, token};
use super::utils::bytes_to_string;
use super::ParseResult;
use crate::types::param::{GenericParam, GenericValue};

/// Characters of an unquoted gen-value (token or host, IPv6 references included)
pub fn is_gen_value_char(c: u8) -> bool {
    is_token_char(c) || c == b'[' || c == b']' || c == b':'
}

// gen-value = token / host / quoted-string
pub fn gen_value(input: &[u8]) -> ParseResult<GenericValue> {
    alt((
        map(quoted_string, |v| GenericValue::Quoted(unescape_quoted(v))),
        map(take_while1(is_gen_value_char), |v| GenericValue::Token(bytes_to_string(v))),
    ))(input)
}

// generic-param = token [ EQUAL gen-value ]
pub fn generic_param(input: &[u8]) -> ParseResult<GenericParam> {
    map(pair(token, opt(preceded(equal, gen_value))), |(name, value)| {
        GenericParam::from_parts(bytes_to_string(name), value)
    })(input)
}

/// Zero or more `;name[=value]` parameters
pub fn semicolon_params0(input: &[u8]) -> ParseResult<Vec<GenericParam>> {
    many0(preceded(semi, generic_param))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_value() {
        let (_, val) = gen_value(b"\"quoted, value\"").unwrap();
        assert_eq!(val, GenericValue::Quoted("quoted, value".to_string()));

        let (rem, val) = gen_value(b"[2001:db8::1];x").unwrap();
        assert_eq!(val, GenericValue::Token("[2001:db8::1]".to_string()));
        assert_eq!(rem, b";x");
    }

    #[test]
    fn test_generic_param() {
        let (_, param) = generic_param(b"appearance=2").unwrap();
        assert_eq!(param.name(), "appearance");
        assert_eq!(param.value_str(), Some("2"));

        let (_, param) = generic_param(b"lr").unwrap();
        assert_eq!(param.name(), "lr");
        assert!(param.value().is_none());
    }

    #[test]
    fn test_semicolon_params() {
        let (rem, params) = semicolon_params0(b";purpose=icon ; a = \"b c\";flag").unwrap();
        assert!(rem.is_empty());
        assert_eq!(params.len(), 3);
        assert_eq!(params[0].value_str(), Some("icon"));
        assert_eq!(params[1].value(), Some(&GenericValue::Quoted("b c".to_string())));
        assert!(params[2].value().is_none());

        let (rem, params) = semicolon_params0(b"").unwrap();
        assert!(rem.is_empty());
        assert!(params.is_empty());
    }
}
