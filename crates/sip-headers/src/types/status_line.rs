//! # Status-Line
//!
//! First line of a SIP response
//! ([RFC 3261 Section 7.2](https://datatracker.ietf.org/doc/html/rfc3261#section-7.2)):
//!
//! ```text
//! Status-Line    =  SIP-Version SP Status-Code SP Reason-Phrase CRLF
//! Status-Code    =  3DIGIT
//! Reason-Phrase  =  *(reserved / unreserved / escaped / UTF8-NONASCII / UTF8-CONT / SP / HTAB)
//! ```
//!
//! Once set, the status code is always within 100-699.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let line = StatusLine::from_str("SIP/2.0 180 Ringing").unwrap();
//! assert_eq!(line.status_code().map(|c| c.as_u16()), Some(180));
//! assert_eq!(line.reason_phrase(), "Ringing");
//!
//! let busy = StatusLine::new(486, None).unwrap();
//! assert_eq!(busy.to_string(), "SIP/2.0 486 Busy Here");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::parse_all;
use crate::parser::values::status_code;
use crate::resources::{
    reason_phrase, REASON_PHRASE_INVALID, SIP_SCHEME, SP, STATUS_CODE_INVALID, STATUS_CODE_REQUIRED, STATUS_LINE,
    VERSION_REQUIRED,
};
use crate::types::request_line::parse_start_line_version;
use crate::types::version::Version;

/// A response status code in 100-699
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatusCode(u16);

impl StatusCode {
    pub fn new(code: u16) -> Result<Self> {
        if (100..=699).contains(&code) {
            Ok(StatusCode(code))
        } else {
            Err(Error::InvalidStatusCode(code))
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// 1xx
    pub fn is_provisional(&self) -> bool {
        self.0 < 200
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Standard phrase from RFC 3261 Section 21, if the code has one
    pub fn default_reason_phrase(&self) -> Option<&'static str> {
        reason_phrase(self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        StatusCode::new(code)
    }
}

fn is_valid_reason_phrase(text: &str) -> bool {
    !text.chars().any(|c| c.is_control() && c != '\t')
}

/// Version, status code and reason phrase of a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    version: Version,
    status_code: Option<StatusCode>,
    reason_phrase: String,
}

impl StatusLine {
    /// A SIP/2.0 status line. Without a reason the standard phrase is used.
    pub fn new(code: u16, reason: Option<&str>) -> Result<Self> {
        let status_code = StatusCode::new(code)?;
        let mut line = StatusLine {
            version: Version::sip_2_0(),
            status_code: Some(status_code),
            reason_phrase: String::new(),
        };
        match reason {
            Some(reason) => line.set_reason_phrase(reason)?,
            None => line.reason_phrase = status_code.default_reason_phrase().unwrap_or_default().to_string(),
        }
        Ok(line)
    }

    /// Parses a start line, replacing the current value only on success
    pub fn parse(&mut self, raw: &str) -> Result<()> {
        let line = raw.trim();
        let mut parts = line.splitn(3, ' ');

        let version_text = parts.next().unwrap_or_default();
        if version_text.is_empty() {
            return Err(Error::parse(STATUS_LINE, VERSION_REQUIRED));
        }
        let version = parse_start_line_version(STATUS_LINE, version_text)?;

        let code_text = parts.next().unwrap_or_default();
        if code_text.is_empty() {
            return Err(Error::parse(STATUS_LINE, STATUS_CODE_REQUIRED));
        }
        let code = parse_all(STATUS_LINE, code_text, status_code)
            .and_then(StatusCode::new)
            .map_err(|_| Error::parse(STATUS_LINE, STATUS_CODE_INVALID))?;

        let phrase = parts.next().unwrap_or_default();
        if !is_valid_reason_phrase(phrase) {
            return Err(Error::parse(STATUS_LINE, REASON_PHRASE_INVALID));
        }

        self.version = version;
        self.status_code = Some(code);
        self.reason_phrase = phrase.to_string();
        Ok(())
    }

    /// Like [`StatusLine::parse`], but an absent input clears the value
    pub fn parse_opt(&mut self, raw: Option<&str>) -> Result<()> {
        match raw {
            Some(raw) => self.parse(raw),
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Protocol name, always `SIP`
    pub fn scheme(&self) -> &'static str {
        SIP_SCHEME
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    /// Rejects codes outside 100-699 and leaves the current code in place
    pub fn set_status_code(&mut self, code: u16) -> Result<()> {
        self.status_code = Some(StatusCode::new(code)?);
        Ok(())
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    pub fn set_reason_phrase(&mut self, reason: &str) -> Result<()> {
        let reason = reason.trim();
        if !is_valid_reason_phrase(reason) {
            return Err(Error::InvalidFormat(REASON_PHRASE_INVALID.to_string()));
        }
        self.reason_phrase = reason.to_string();
        Ok(())
    }

    /// `SIP/x.y SP Status-Code SP Reason-Phrase`
    pub fn to_canonical_string(&self) -> String {
        let code = self.status_code.map(|c| c.to_string()).unwrap_or_default();
        [format!("{}/{}", SIP_SCHEME, self.version), code, self.reason_phrase.clone()].join(SP)
    }

    pub fn is_valid(&self) -> bool {
        self.status_code.is_some()
    }

    pub fn clear(&mut self) {
        *self = StatusLine::default();
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for StatusLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut line = StatusLine::default();
        line.parse(s)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_boundaries() {
        assert_eq!(StatusCode::new(99), Err(Error::InvalidStatusCode(99)));
        assert_eq!(StatusCode::new(700), Err(Error::InvalidStatusCode(700)));
        assert!(StatusCode::new(100).is_ok());
        assert!(StatusCode::new(699).is_ok());
    }

    #[test]
    fn test_set_status_code_keeps_previous_on_error() {
        let mut line = StatusLine::new(200, None).unwrap();
        assert!(line.set_status_code(99).is_err());
        assert!(line.set_status_code(700).is_err());
        assert_eq!(line.status_code().unwrap().as_u16(), 200);
        line.set_status_code(699).unwrap();
        line.set_status_code(100).unwrap();
        assert_eq!(line.status_code().unwrap().as_u16(), 100);
    }

    #[test]
    fn test_parse_out_of_range_code() {
        let err = StatusLine::from_str("SIP/2.0 700 Nope").unwrap_err();
        assert_eq!(err, Error::parse(STATUS_LINE, STATUS_CODE_INVALID));
        let err = StatusLine::from_str("SIP/2.0 099 Nope").unwrap_err();
        assert_eq!(err, Error::parse(STATUS_LINE, STATUS_CODE_INVALID));
        let err = StatusLine::from_str("SIP/2.0 20x OK").unwrap_err();
        assert_eq!(err, Error::parse(STATUS_LINE, STATUS_CODE_INVALID));
    }

    #[test]
    fn test_missing_code() {
        let err = StatusLine::from_str("SIP/2.0").unwrap_err();
        assert_eq!(err, Error::parse(STATUS_LINE, STATUS_CODE_REQUIRED));
    }

    #[test]
    fn test_non_sip_scheme() {
        assert!(matches!(StatusLine::from_str("HTTP/1.1 200 OK"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_reason_phrase_with_spaces() {
        let line = StatusLine::from_str("SIP/2.0 481 Call/Transaction Does Not Exist").unwrap();
        assert_eq!(line.reason_phrase(), "Call/Transaction Does Not Exist");
        assert_eq!(line.to_string(), "SIP/2.0 481 Call/Transaction Does Not Exist");
    }

    #[test]
    fn test_custom_and_default_phrases() {
        let line = StatusLine::new(200, Some("Fine")).unwrap();
        assert_eq!(line.to_string(), "SIP/2.0 200 Fine");

        let line = StatusLine::new(299, None).unwrap();
        assert_eq!(line.reason_phrase(), "");
        let reparsed = StatusLine::from_str(&line.to_canonical_string()).unwrap();
        assert_eq!(reparsed, line);
    }
}
