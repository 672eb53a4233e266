//! Brazilian postal code (CEP).

use std::fmt;
use std::str::FromStr;

/// An 8-digit CEP with separators stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postal code: {0:?}")]
pub struct InvalidPostalCode(pub String);

impl PostalCode {
    pub const LEN: usize = 8;

    /// Accepts `01001000`, `01001-000` and `01.001-000`.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostalCode> {
        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '.' | ' '))
            .collect();
        if digits.len() != Self::LEN || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidPostalCode(raw.to_owned()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = InvalidPostalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
