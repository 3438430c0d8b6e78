use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

const ID_BYTES: usize = 32;
const SHORT_BYTES: usize = 4;

/// Fingerprint of a document revision, or of a cached comparison.
///
/// Reports name the revisions they compare by fingerprint so that two exports
/// of the same pair can be matched without embedding either text. The only
/// ways to obtain one are hashing a revision's text or finishing a BLAKE3
/// hasher, so every id in circulation stands for real content.
///
/// Written as 64 lowercase hex characters in reports and logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContentId([u8; ID_BYTES]);

impl ContentId {
    /// Fingerprint the exact text of a revision. Whitespace counts.
    pub fn of_text(text: &str) -> Self {
        Self::from_hash(blake3::hash(text.as_bytes()))
    }

    /// Adopt a hash finished by a caller that mixes in more than one text.
    pub fn from_hash(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters, for log lines.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..SHORT_BYTES])
    }
}

impl FromStr for ContentId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let id: [u8; ID_BYTES] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypeError::InvalidLength {
                expected: ID_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(id))
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentId").field(&self.short_hex()).finish()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> Self {
        id.to_hex()
    }
}

impl TryFrom<String> for ContentId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
