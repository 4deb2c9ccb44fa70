// Tue Jan 13 2026 - Alex

use crate::pattern::PatternError;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Wildcard marker for a single byte in signature text.
pub const WILDCARD_TOKEN: &str = "??";

/// Byte signature where `None` matches any byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<Option<u8>>,
}

impl Pattern {
    pub fn new(bytes: Vec<Option<u8>>) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { bytes })
    }

    /// Parses compact signature text such as `"4889??24"`: two characters per
    /// byte, either hex digits or `??`. Whitespace must already be stripped.
    pub fn from_hex(text: &str) -> Result<Self, PatternError> {
        let raw = text.as_bytes();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if raw.len() % 2 != 0 {
            return Err(PatternError::OddLength(raw.len()));
        }

        let bytes = raw.chunks(2)
            .enumerate()
            .map(|(index, pair)| parse_token(index, pair))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[Option<u8>] {
        &self.bytes
    }

    pub fn significant_byte_count(&self) -> usize {
        self.bytes.iter().filter(|b| b.is_some()).count()
    }

    pub fn wildcard_byte_count(&self) -> usize {
        self.bytes.len() - self.significant_byte_count()
    }

    /// True when `data` starts with bytes satisfying every pattern position.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes.iter()
            .zip(data.iter())
            .all(|(expected, &actual)| expected.map_or(true, |b| b == actual))
    }

    /// First position holding a concrete byte, used to pre-filter candidates.
    pub fn first_significant(&self) -> Option<(usize, u8)> {
        self.bytes.iter()
            .enumerate()
            .find_map(|(i, b)| b.map(|b| (i, b)))
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter()
            .map(|b| match b {
                Some(b) => format!("{:02X}", b),
                None => WILDCARD_TOKEN.to_string(),
            })
            .join(" ")
    }
}

fn parse_token(index: usize, pair: &[u8]) -> Result<Option<u8>, PatternError> {
    let invalid = || PatternError::InvalidToken {
        index,
        token: String::from_utf8_lossy(pair).into_owned(),
    };

    if pair == WILDCARD_TOKEN.as_bytes() {
        return Ok(None);
    }
    if !pair.iter().all(u8::is_ascii_hexdigit) {
        return Err(invalid());
    }

    let text = std::str::from_utf8(pair).map_err(|_| invalid())?;
    u8::from_str_radix(text, 16).map(Some).map_err(|_| invalid())
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
