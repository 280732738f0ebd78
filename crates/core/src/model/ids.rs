use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::rng::seed_from_token;

/// Opaque identifier for one test attempt.
///
/// The token is hashed into the generator seed, so the same token always
/// yields the same assembled attempt.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptId(String);

impl AttemptId {
    /// Wraps a caller-supplied token.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the token is empty or only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ParseIdError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ParseIdError {
                kind: "AttemptId".to_string(),
            });
        }
        Ok(Self(token))
    }

    /// Fresh random token for a brand new attempt.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable generator seed for this attempt.
    #[must_use]
    pub fn seed(&self) -> i64 {
        seed_from_token(&self.0)
    }
}

impl fmt::Debug for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttemptId({})", self.0)
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for parsing identifiers from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    pub(crate) kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for AttemptId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_id_display_roundtrip() {
        let id: AttemptId = "T1".parse().unwrap();
        assert_eq!(id.to_string(), "T1");
        assert_eq!(id.as_str(), "T1");
    }

    #[test]
    fn blank_attempt_id_is_rejected() {
        assert!("   ".parse::<AttemptId>().is_err());
        assert!(AttemptId::new("").is_err());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(AttemptId::generate(), AttemptId::generate());
    }

    #[test]
    fn seed_is_stable_for_token() {
        let id = AttemptId::new("T1").unwrap();
        assert_eq!(id.seed(), 663_435_453_709_889_526);
    }
}
