//! Normalizers: raw, alias-laden API records into the canonical model.
//!
//! These are total functions. Every field access is defensive with a
//! fallback, so malformed or partially-missing records never abort
//! processing; at worst they produce default/zeroed canonical values.

use crate::model::{KeyResult, Objective, ProgressRecord};
use crate::raw::{RawKeyResult, RawObjective, RawProgressRecord};
use crate::status::OkrStatus;

/// First non-empty string out of an alias pair.
fn first_nonempty(primary: &Option<String>, fallback: &Option<String>) -> Option<String> {
    primary
        .as_ref()
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.as_ref().filter(|s| !s.is_empty()))
        .cloned()
}

fn normalize_progress_record(raw: &RawProgressRecord) -> ProgressRecord {
    ProgressRecord {
        id: first_nonempty(&raw.id, &raw.alt_id).unwrap_or_default(),
        value: raw.value,
        note: raw.note.clone(),
        recorded_at: raw.recorded_at.clone(),
    }
}

/// Normalize one raw key result. `index` is its position within the parent
/// objective's list and seeds the synthetic id fallback.
pub fn normalize_key_result(raw: &RawKeyResult, index: usize) -> KeyResult {
    let id = first_nonempty(&raw.id, &raw.alt_id).unwrap_or_else(|| format!("kr-{}", index));

    let description = first_nonempty(&raw.description, &raw.title).unwrap_or_default();

    // Defaulted to 0, then retained only when valid: a negative current or a
    // non-positive target is treated as unset rather than zero.
    let current = raw.current_value.or(raw.current).unwrap_or(0.0);
    let current = (current >= 0.0).then_some(current);

    let target = raw.target_value.or(raw.target).unwrap_or(0.0);
    let target = (target > 0.0).then_some(target);

    KeyResult {
        id,
        description,
        current,
        target,
        unit: raw.unit.clone().unwrap_or_default(),
        status: OkrStatus::from_token(raw.status.as_deref()),
        progress_updates: raw
            .progress_updates
            .as_ref()
            .map(|records| records.iter().map(normalize_progress_record).collect()),
        owners: raw.owners.clone(),
    }
}

/// Normalize one raw objective, mapping its key results in original order.
pub fn normalize_objective(raw: &RawObjective, index: usize) -> Objective {
    let id = first_nonempty(&raw.id, &raw.alt_id).unwrap_or_else(|| format!("obj-{}", index));

    let progress = raw
        .overall_progress
        .or(raw.progress)
        .unwrap_or(0.0)
        .max(0.0)
        .min(100.0);

    // Due date comes from the end date when present (string end dates pass
    // through, rich ones reduce to their calendar date), else from the
    // explicit dueDate string.
    let due_date = raw
        .end_date
        .as_ref()
        .map(|d| d.as_text())
        .or_else(|| raw.due_date.clone());

    Objective {
        id,
        title: raw.title.clone().unwrap_or_default(),
        description: raw.description.clone(),
        progress,
        status: OkrStatus::from_token(raw.status.as_deref()),
        due_date,
        start_date: raw.start_date.clone(),
        end_date: raw.end_date.as_ref().map(|d| d.as_text()),
        updated_at: raw.updated_at.clone().or_else(|| raw.created_at.clone()),
        key_results: raw
            .key_results
            .as_ref()
            .map(|krs| {
                krs.iter()
                    .enumerate()
                    .map(|(i, kr)| normalize_key_result(kr, i))
                    .collect()
            })
            .unwrap_or_default(),
    }
}
