//! Stable JSON output types for `okrctl list --json`.
//!
//! These types provide machine-readable output for scripts and monitoring
//! tools; the schema version only changes on breaking layout changes.

use crate::feed::FetchState;
use okr_common::{Category, KeyResult, Objective, OwnerRef};
use serde::Serialize;

/// JSON schema version for stable scripting.
pub const SCHEMA_VERSION: &str = "1";

/// Top-level JSON output for the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardJson {
    pub schema_version: String,
    /// Timestamp in ISO 8601 format.
    pub generated_at: String,
    /// Error string when the fetch failed (categories then hold the last
    /// successful result, possibly empty).
    pub error: Option<String>,
    pub category_count: usize,
    pub objective_count: usize,
    pub categories: Vec<CategoryJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryJson {
    pub id: String,
    pub name: String,
    pub objectives: Vec<ObjectiveJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveJson {
    pub id: String,
    pub title: String,
    /// Always within [0, 100].
    pub progress: f64,
    /// One of "not_started", "in_progress", "completed", "at_risk".
    pub status: String,
    pub due_date: Option<String>,
    pub updated_at: Option<String>,
    pub key_results: Vec<KeyResultJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyResultJson {
    pub id: String,
    pub description: String,
    pub current: Option<f64>,
    pub target: Option<f64>,
    pub unit: String,
    pub status: String,
    /// current/target as a percentage, when both are present.
    pub percent_complete: Option<f64>,
    /// Owner user ids; embedded user summaries are reduced to their id.
    pub owners: Vec<String>,
}

impl KeyResultJson {
    fn from_key_result(kr: &KeyResult) -> Self {
        let owners = kr
            .owners
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|owner| match owner {
                OwnerRef::Id(id) => Some(id.clone()),
                OwnerRef::User(user) => user.id.clone(),
            })
            .collect();

        Self {
            id: kr.id.clone(),
            description: kr.description.clone(),
            current: kr.current,
            target: kr.target,
            unit: kr.unit.clone(),
            status: kr.status.to_string(),
            percent_complete: kr.percent_complete(),
            owners,
        }
    }
}

impl ObjectiveJson {
    fn from_objective(objective: &Objective) -> Self {
        Self {
            id: objective.id.clone(),
            title: objective.title.clone(),
            progress: objective.progress,
            status: objective.status.to_string(),
            due_date: objective.due_date.clone(),
            updated_at: objective.updated_at.clone(),
            key_results: objective
                .key_results
                .iter()
                .map(KeyResultJson::from_key_result)
                .collect(),
        }
    }
}

impl CategoryJson {
    fn from_category(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            objectives: category
                .objectives
                .iter()
                .map(ObjectiveJson::from_objective)
                .collect(),
        }
    }
}

impl BoardJson {
    /// Build the JSON view of a fetch state snapshot.
    pub fn from_state(state: &FetchState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            error: state.error.clone(),
            category_count: state.categories.len(),
            objective_count: state.categories.iter().map(|c| c.objectives.len()).sum(),
            categories: state
                .categories
                .iter()
                .map(CategoryJson::from_category)
                .collect(),
        }
    }
}
