//! Submission record type
//!
//! One stored submission with five text fields. Records carry no intrinsic
//! identifier; identity is solely their position in the collection at the
//! time of the operation.

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// A single submitted record.
///
/// All fields must be non-empty. No format validation is applied beyond
/// presence; the contract is deliberately minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    #[serde(rename = "stopwatchTime")]
    pub stopwatch_time: String,
}

impl Submission {
    /// Create a new submission from its five fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        github: impl Into<String>,
        stopwatch_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            github: github.into(),
            stopwatch_time: stopwatch_time.into(),
        }
    }

    /// Validate that every field is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidArgument` if any field is empty. Callers
    /// run this before touching the backing file.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.github.is_empty()
            || self.stopwatch_time.is_empty()
        {
            return Err(StoreError::invalid_argument("All fields are required."));
        }
        Ok(())
    }

    /// Whether `query` is a case-insensitive substring of any of the four
    /// searchable fields (`name`, `email`, `phone`, `github`).
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.phone.to_lowercase().contains(&query)
            || self.github.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission::new("Alice", "alice@example.com", "555-0100", "alice-gh", "00:42")
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_field_rejected() {
        for field in 0..5 {
            let mut s = sample();
            match field {
                0 => s.name.clear(),
                1 => s.email.clear(),
                2 => s.phone.clear(),
                3 => s.github.clear(),
                _ => s.stopwatch_time.clear(),
            }
            let err = s.validate().unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_serde_field_name() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"stopwatchTime\""));
        assert!(!json.contains("stopwatch_time"));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let s = sample();
        assert!(s.matches("ALICE"));
        assert!(s.matches("example.COM"));
        assert!(s.matches("555"));
        assert!(s.matches("-gh"));
    }

    #[test]
    fn test_matches_ignores_stopwatch_time() {
        let s = sample();
        assert!(!s.matches("00:42"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(sample().matches(""));
    }
}
