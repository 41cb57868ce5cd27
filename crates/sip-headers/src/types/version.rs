use std::fmt;
use std::str::FromStr;

use nom::{bytes::complete::tag, sequence::separated_pair};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::parse_all;
use crate::parser::values::version_number;

/// Protocol version of a start line, printed as `major.minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Version { major, minor }
    }

    /// SIP/2.0
    pub fn sip_2_0() -> Self {
        Version { major: 2, minor: 0 }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::sip_2_0()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (major, minor) = parse_all(
            "Version",
            s.trim(),
            separated_pair(version_number, tag(b"."), version_number),
        )?;
        Ok(Version { major, minor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display_and_parse() {
        assert_eq!(Version::sip_2_0().to_string(), "2.0");
        assert_eq!(Version::from_str("2.0").unwrap(), Version::sip_2_0());
        assert_eq!(Version::from_str("3.11").unwrap(), Version::new(3, 11));
        assert!(Version::from_str("2").is_err());
        assert!(Version::from_str("x.y").is_err());
    }
}
