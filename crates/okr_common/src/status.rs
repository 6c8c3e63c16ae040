//! Canonical status vocabulary and the token mapper.
//!
//! The API has used two overlapping status vocabularies (objectives and key
//! results). Both collapse onto the same four internal states here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical status of an objective or key result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OkrStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    AtRisk,
}

impl OkrStatus {
    /// Map an external status token to a canonical status.
    ///
    /// Total over all inputs: unknown or absent tokens degrade to
    /// `NotStarted` rather than erroring.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("completed") => OkrStatus::Completed,
            Some("active") | Some("in_progress") => OkrStatus::InProgress,
            Some("paused") | Some("cancelled") | Some("at_risk") => OkrStatus::AtRisk,
            _ => OkrStatus::NotStarted,
        }
    }

    /// Wire/display form, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            OkrStatus::NotStarted => "not_started",
            OkrStatus::InProgress => "in_progress",
            OkrStatus::Completed => "completed",
            OkrStatus::AtRisk => "at_risk",
        }
    }
}

impl fmt::Display for OkrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_vocabulary_maps_to_canonical() {
        assert_eq!(OkrStatus::from_token(Some("draft")), OkrStatus::NotStarted);
        assert_eq!(OkrStatus::from_token(Some("active")), OkrStatus::InProgress);
        assert_eq!(OkrStatus::from_token(Some("paused")), OkrStatus::AtRisk);
        assert_eq!(OkrStatus::from_token(Some("cancelled")), OkrStatus::AtRisk);
        assert_eq!(OkrStatus::from_token(Some("completed")), OkrStatus::Completed);
    }

    #[test]
    fn test_key_result_vocabulary_maps_to_canonical() {
        assert_eq!(
            OkrStatus::from_token(Some("not_started")),
            OkrStatus::NotStarted
        );
        assert_eq!(
            OkrStatus::from_token(Some("in_progress")),
            OkrStatus::InProgress
        );
        assert_eq!(
            OkrStatus::from_token(Some("completed")),
            OkrStatus::Completed
        );
        assert_eq!(OkrStatus::from_token(Some("at_risk")), OkrStatus::AtRisk);
    }

    #[test]
    fn test_absent_and_unknown_tokens_default() {
        assert_eq!(OkrStatus::from_token(None), OkrStatus::NotStarted);
        assert_eq!(OkrStatus::from_token(Some("")), OkrStatus::NotStarted);
        assert_eq!(
            OkrStatus::from_token(Some("ON_TRACK")),
            OkrStatus::NotStarted
        );
    }

    #[test]
    fn test_wire_form_round_trip() {
        for status in [
            OkrStatus::NotStarted,
            OkrStatus::InProgress,
            OkrStatus::Completed,
            OkrStatus::AtRisk,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: OkrStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            // The wire form is also in the mapper's domain.
            assert_eq!(OkrStatus::from_token(Some(status.as_str())), status);
        }
    }
}
