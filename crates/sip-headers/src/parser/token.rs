use nom::bytes::complete::take_while1;

use super::ParseResult;

/// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
pub fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, b'-' | b'.' | b'!' | b'%' | b'*' | b'_' | b'+' | b'`' | b'\'' | b'~')
}

pub fn token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_token_char)(input)
}

// word = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~" /
//        "(" / ")" / "<" / ">" / ":" / "\" / DQUOTE / "/" / "[" / "]" / "?" / "{" / "}")
pub fn is_word_char(c: u8) -> bool {
    is_token_char(c)
        || matches!(
            c,
            b'(' | b')' | b'<' | b'>' | b':' | b'\\' | b'"' | b'/' | b'[' | b']' | b'?' | b'{' | b'}'
        )
}

pub fn word(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_word_char)(input)
}

/// Whether the whole string is one RFC 3261 token
pub fn is_valid_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let (rem, val) = token(b"100rel, timer").unwrap();
        assert_eq!(val, b"100rel");
        assert_eq!(rem, b", timer");

        let (rem, val) = token(b"a-b.c!d%e*f_g+h`i'j~k rest").unwrap();
        assert_eq!(val, b"a-b.c!d%e*f_g+h`i'j~k");
        assert_eq!(rem, b" rest");

        assert!(token(b"").is_err());
        assert!(token(b"@host").is_err());
    }

    #[test]
    fn test_word_allows_separators() {
        let (rem, val) = word(b"f81d4fae-7dec<>:/[]?{}@host").unwrap();
        assert_eq!(val, b"f81d4fae-7dec<>:/[]?{}");
        assert_eq!(rem, b"@host");
        assert!(word(b" x").is_err());
    }

    #[test]
    fn test_is_valid_token() {
        assert!(is_valid_token("INVITE"));
        assert!(is_valid_token("100rel"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("two words"));
        assert!(!is_valid_token("semi;colon"));
    }
}
