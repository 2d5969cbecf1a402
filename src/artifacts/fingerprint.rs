//! Content fingerprints (SHA-1 digests)
//!
//! A fingerprint is a 40-character lowercase hexadecimal string. It identifies
//! the content of a staged file and doubles as the identifier of a commit.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "356a192b7913b04c54574d18c28d46e6395428ab")
//! - Short: First 7 characters (e.g., "356a192")

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::io;

pub const FINGERPRINT_LENGTH: usize = 40;
pub const SHORT_FINGERPRINT_LENGTH: usize = 7;

/// SHA-1 digest rendered as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parse and validate a fingerprint from a string
    ///
    /// # Returns
    ///
    /// Validated fingerprint, or `None` if the length or alphabet is wrong
    pub fn try_parse(id: &str) -> Option<Self> {
        if id.len() != FINGERPRINT_LENGTH {
            return None;
        }
        if !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return None;
        }
        Some(Self(id.to_string()))
    }

    /// Stream everything from `reader` through SHA-1
    pub fn of_reader<R: io::Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut hasher = Sha1::new();
        io::copy(reader, &mut hasher)?;

        Ok(Self::from_digest(hasher))
    }

    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        Self::from_digest(hasher)
    }

    fn from_digest(hasher: Sha1) -> Self {
        Self(format!("{:x}", hasher.finalize()))
    }

    /// First 7 characters, for display
    pub fn to_short(&self) -> &str {
        &self.0[..SHORT_FINGERPRINT_LENGTH]
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(&value).ok_or_else(|| format!("invalid fingerprint: {value}"))
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
