//! Raw API shapes, exactly as the backend sends them.
//!
//! Every field is optional or defaulted so a malformed record can always be
//! deserialized; the normalizers in [`crate::normalize`] fill in the gaps.
//! Alias pairs (`id`/`_id`, `overallProgress`/`progress`, ...) are kept as
//! separate fields so precedence stays explicit.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A date as the API may send it: an ISO string or an epoch-milliseconds
/// number (the JSON rendering of a rich date object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Millis(i64),
}

impl DateValue {
    /// Textual form. Strings pass through unchanged; a rich date value is
    /// rendered to its calendar-date-only form (`YYYY-MM-DD`).
    pub fn as_text(&self) -> String {
        match self {
            DateValue::Text(s) => s.clone(),
            DateValue::Millis(ms) => match Utc.timestamp_millis_opt(*ms).single() {
                Some(dt) => dt.format("%Y-%m-%d").to_string(),
                None => String::new(),
            },
        }
    }
}

/// Key-result owner: either a plain user id or an embedded user summary.
/// Downstream consumers must handle both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    User(OwnerSummary),
}

/// Embedded user summary as the API sends it on expanded owner lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Raw progress record attached to a key result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProgressRecord {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub alt_id: Option<String>,
    pub value: Option<f64>,
    pub note: Option<String>,
    pub recorded_at: Option<String>,
}

/// Raw key result, alias-laden and untrusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawKeyResult {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub alt_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub current_value: Option<f64>,
    pub current: Option<f64>,
    pub target_value: Option<f64>,
    pub target: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<String>,
    pub progress_updates: Option<Vec<RawProgressRecord>>,
    pub owners: Option<Vec<OwnerRef>>,
}

/// Raw objective, alias-laden and untrusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawObjective {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub alt_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub overall_progress: Option<f64>,
    pub progress: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<DateValue>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub key_results: Option<Vec<RawKeyResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_dates_pass_through_unchanged() {
        let d = DateValue::Text("2026-03-31T23:59:59Z".to_string());
        assert_eq!(d.as_text(), "2026-03-31T23:59:59Z");

        let d = DateValue::Text("2026-03-31".to_string());
        assert_eq!(d.as_text(), "2026-03-31");
    }

    #[test]
    fn test_rich_date_reduces_to_calendar_date() {
        // 2026-01-15T12:00:00Z
        let d = DateValue::Millis(1_768_478_400_000);
        assert_eq!(d.as_text(), "2026-01-15");
    }

    #[test]
    fn test_owner_list_accepts_both_shapes() {
        let json = r#"["u-1", {"id": "u-2", "name": "Dana"}]"#;
        let owners: Vec<OwnerRef> = serde_json::from_str(json).unwrap();
        assert_eq!(owners[0], OwnerRef::Id("u-1".to_string()));
        match &owners[1] {
            OwnerRef::User(user) => assert_eq!(user.name.as_deref(), Some("Dana")),
            other => panic!("expected embedded user, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_deserializes() {
        let obj: RawObjective = serde_json::from_str("{}").unwrap();
        assert!(obj.id.is_none());
        assert!(obj.key_results.is_none());
    }

    #[test]
    fn test_alias_fields_parse_independently() {
        let obj: RawObjective =
            serde_json::from_str(r#"{"_id": "o1", "overallProgress": 40, "progress": 10}"#)
                .unwrap();
        assert_eq!(obj.alt_id.as_deref(), Some("o1"));
        assert_eq!(obj.overall_progress, Some(40.0));
        assert_eq!(obj.progress, Some(10.0));
    }
}
