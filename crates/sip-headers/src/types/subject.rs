// Subject header (RFC 3261 Section 20.36)
//
// Subject  =  ( "Subject" / "s" ) HCOLON [TEXT-UTF8-TRIM]

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::group::impl_group_equality;
use crate::types::header_field::{impl_header_conversions, HeaderField};

fn is_text_utf8(text: &str) -> bool {
    !text.chars().any(|c| c.is_control() && c != '\t')
}

/// Subject: summary of the call. Free text, compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    text: String,
}

impl Subject {
    /// Creates a subject; surrounding whitespace is trimmed
    pub fn new(text: &str) -> Result<Self> {
        let mut subject = Subject::default();
        subject.set_text(text)?;
        Ok(subject)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if !is_text_utf8(text) {
            return Err(Error::InvalidFormat("Subject contains control characters".to_string()));
        }
        self.text = text.to_string();
        Ok(())
    }
}

impl HeaderField for Subject {
    fn field_name(&self) -> &str {
        "Subject"
    }

    fn compact_name(&self) -> &str {
        "s"
    }

    fn allow_multiple(&self) -> bool {
        false
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        if !is_text_utf8(value) {
            return Err(Error::parse("Subject", "Subject contains control characters"));
        }
        self.text = value.trim().to_string();
        Ok(())
    }

    fn to_canonical_string(&self) -> String {
        self.text.clone()
    }

    fn is_valid(&self) -> bool {
        is_text_utf8(&self.text)
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}

impl_header_conversions!(Subject);
impl_group_equality!(Subject);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_subject() {
        let subject = Subject::from_str("Subject: Need more boxes").unwrap();
        assert_eq!(subject.text(), "Need more boxes");

        let compact = Subject::from_str("s: Tech Support").unwrap();
        assert_eq!(compact.text(), "Tech Support");
    }

    #[test]
    fn test_folded_subject() {
        let subject = Subject::from_str("Subject: I know you're there,\r\n pick up the phone").unwrap();
        assert_eq!(subject.text(), "I know you're there, pick up the phone");
    }

    #[test]
    fn test_subject_is_case_sensitive() {
        assert_ne!(Subject::new("Lunch").unwrap(), Subject::new("lunch").unwrap());
        assert_eq!(Subject::new("  Lunch ").unwrap(), Subject::new("Lunch").unwrap());
    }

    #[test]
    fn test_empty_and_utf8_subjects() {
        let empty = Subject::from_str("Subject:").unwrap();
        assert_eq!(empty.text(), "");
        assert!(empty.is_valid());

        let utf8 = Subject::from_str("Subject: Réunion à 15h").unwrap();
        assert_eq!(utf8.to_canonical_string(), "Réunion à 15h");
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(Subject::new("bad\u{0}text").is_err());
        let mut subject = Subject::new("keep").unwrap();
        assert!(subject.parse("Subject: a\u{7}b").is_err());
        assert_eq!(subject.text(), "keep");
    }
}
