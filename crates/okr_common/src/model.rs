//! Canonical view model consumed by the rendering layer.
//!
//! All entities here are derived and stateless: recomputed on every fetch,
//! never persisted. The wire form deliberately uses the same camelCase field
//! names the API uses, so a canonical record is itself a valid raw record
//! and normalization is idempotent.

use crate::raw::OwnerRef;
use crate::status::OkrStatus;
use serde::{Deserialize, Serialize};

/// Canonical progress record on a key result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<String>,
}

/// Canonical key result.
///
/// `current` and `target` are present only when they satisfy their validity
/// predicates (current >= 0, target > 0); an invalid value is treated as
/// unset rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyResult {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    pub unit: String,
    pub status: OkrStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_updates: Option<Vec<ProgressRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<OwnerRef>>,
}

impl KeyResult {
    /// Completion percentage when both sides of the current/target pair are
    /// present. Not clamped: overachieving key results read above 100.
    pub fn percent_complete(&self) -> Option<f64> {
        match (self.current, self.target) {
            (Some(current), Some(target)) => Some(current / target * 100.0),
            _ => None,
        }
    }
}

/// Canonical objective. `progress` always lies in [0, 100].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objective {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub progress: f64,
    pub status: OkrStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub key_results: Vec<KeyResult>,
}

/// A named grouping of objectives. Ids are synthetic (`cat-1`, `cat-2`, ...)
/// and assigned in first-seen order by the grouper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub objectives: Vec<Objective>,
}
