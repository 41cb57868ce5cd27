use nom::{bytes::complete::tag_no_case, sequence::preceded};

use super::separators::hcolon;
use super::ParseResult;

/// Converts parsed bytes back into an owned string.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn line_break_len(bytes: &[u8]) -> usize {
    if bytes.starts_with(b"\r\n") {
        2
    } else if cfg!(feature = "lenient_parsing") && bytes.starts_with(b"\n") {
        1
    } else {
        0
    }
}

/// Unfolds header continuation lines.
///
/// Every CRLF followed by SP or HTAB, together with the whitespace around it,
/// becomes a single space (RFC 3261 Section 7.3.1). A CRLF that is not followed by
/// whitespace is left untouched.
pub fn unfold(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let eol = line_break_len(&bytes[i..]);
        if eol > 0 && matches!(bytes.get(i + eol), Some(b' ') | Some(b'\t')) {
            while matches!(out.last(), Some(b' ') | Some(b'\t')) {
                out.pop();
            }
            out.push(b' ');
            i += eol;
            while matches!(bytes.get(i), Some(b' ') | Some(b'\t')) {
                i += 1;
            }
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Removes a leading `Name:` from a header line.
///
/// Either `long_name` or `compact_name` is matched case-insensitively, followed by
/// HCOLON. When neither matches the line is returned unchanged, so applying this
/// twice is the same as applying it once.
pub fn strip_header_name<'a>(line: &'a str, long_name: &str, compact_name: &str) -> &'a str {
    for name in [long_name, compact_name] {
        if name.is_empty() {
            continue;
        }
        let result: ParseResult<&[u8]> =
            preceded(tag_no_case(name.as_bytes()), hcolon)(line.as_bytes());
        if let Ok((rest, _)) = result {
            return line.get(line.len() - rest.len()..).unwrap_or(line);
        }
    }
    line
}

/// Splits a header value at top-level commas.
///
/// Commas inside quoted strings, `<...>` and comments do not split. Empty
/// elements are dropped and each element is trimmed.
pub fn split_comma_list(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut angle_depth = 0usize;
    let mut paren_depth = 0usize;

    for (idx, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes || paren_depth > 0 => escaped = true,
            '"' if paren_depth == 0 => in_quotes = !in_quotes,
            '<' if !in_quotes && paren_depth == 0 => angle_depth += 1,
            '>' if !in_quotes && paren_depth == 0 => angle_depth = angle_depth.saturating_sub(1),
            '(' if !in_quotes && angle_depth == 0 => paren_depth += 1,
            ')' if !in_quotes && angle_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            ',' if !in_quotes && angle_depth == 0 && paren_depth == 0 => {
                let part = value[start..idx].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = idx + 1;
            }
            _ => {}
        }
    }

    let last = value[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}
