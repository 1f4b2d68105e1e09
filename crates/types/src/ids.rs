//! Entity identifiers
//!
//! Paints and mappings are addressed by numeric ids: documents may declare
//! them explicitly, and the project builder assigns one to every entity it
//! creates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A numeric identity for a paint or mapping.
///
/// [`Uid::NULL`] is the reserved value meaning "no identity": a document that
/// omits an `id` attribute resolves to it, and the builder is expected to
/// assign a fresh id in that case.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Uid(i64);

impl Uid {
    /// The reserved "no identity" value.
    pub const NULL: Uid = Uid(0);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Returns the raw numeric value of this id.
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<i64> for Uid {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for Uid {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Uid)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_uid() {
        assert!(Uid::NULL.is_null());
        assert!(!Uid::new(7).is_null());
        assert_eq!(Uid::default(), Uid::NULL);
    }

    #[test]
    fn test_uid_parsing() {
        assert_eq!("42".parse::<Uid>().unwrap(), Uid::new(42));
        assert_eq!("-3".parse::<Uid>().unwrap(), Uid::new(-3));
        assert!("".parse::<Uid>().is_err());
        assert!("abc".parse::<Uid>().is_err());
    }

    #[test]
    fn test_uid_display() {
        assert_eq!(Uid::new(12).to_string(), "12");
        assert_eq!(Uid::NULL.to_string(), "0");
    }
}
