//! dbSNP reference SNP identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Prefix used by dbSNP when printing reference SNP identifiers.
pub const RS_PREFIX: &str = "rs";

/// A reference SNP identifier (the numeric part of `rs123`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RsId(u32);

impl RsId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parse a bare base-10 number, as found in column 1 of the dbSNP table.
    ///
    /// Only ASCII digits are accepted; a sign is an error.
    pub fn parse_bare(s: &str) -> Result<Self, Error> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse(format!(
                "invalid rs identifier '{s}': expected decimal digits"
            )));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|e| Error::Parse(format!("invalid rs identifier '{s}': {e}")))
    }
}

impl FromStr for RsId {
    type Err = Error;

    /// Accepts `123` as well as `rs123`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(RS_PREFIX).unwrap_or(s);
        Self::parse_bare(digits)
    }
}

impl fmt::Display for RsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
