//! The key/value domain of the map demos.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A demo key or value: either a string or an integer.
///
/// Scenario data only ever carries these two shapes, and modeling them as a
/// closed union keeps `Eq + Hash` derivable so a `Scalar` can serve as a map
/// key directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
}

impl Scalar {
    /// Borrow the string form, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Int(_) => None,
        }
    }

    /// The integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Text(_) => None,
            Scalar::Int(n) => Some(*n),
        }
    }
}

/// `Display` yields the form the bucket hash consumes: the string itself for
/// `Text`, the decimal rendering for `Int`.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_hash_input() {
        assert_eq!(Scalar::from("name").to_string(), "name");
        assert_eq!(Scalar::from(25).to_string(), "25");
        assert_eq!(Scalar::from(-3).to_string(), "-3");
    }

    #[test]
    fn test_text_and_int_are_distinct_keys() {
        assert_ne!(Scalar::from("25"), Scalar::from(25));
    }

    #[test]
    fn test_untagged_json() {
        assert_eq!(
            serde_json::to_string(&Scalar::from("John")).unwrap(),
            "\"John\""
        );
        assert_eq!(serde_json::to_string(&Scalar::from(25)).unwrap(), "25");
        let back: Scalar = serde_json::from_str("26").unwrap();
        assert_eq!(back, Scalar::Int(26));
    }
}
