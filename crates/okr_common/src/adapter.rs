//! Response adapter: resolves the API payload's shape once at the boundary.
//!
//! The backend's response shape has changed over time; four historical
//! shapes are still in the wild. They are classified into an explicit
//! variant here so the dispatch precedence stays exhaustive and testable,
//! instead of being probed field-by-field at each call site.

use crate::group::group_objectives;
use crate::model::Category;
use crate::raw::RawObjective;
use serde_json::Value;
use tracing::debug;

/// The four accepted payload shapes, in dispatch precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Object carrying pre-grouped categories (`categories` or `groups`).
    Categorized(Vec<Category>),
    /// Object carrying a non-empty flat objective list (`okrs` or
    /// `objectives`).
    Flat(Vec<RawObjective>),
    /// Bare array, already a category list.
    Bare(Vec<Category>),
    /// Anything else.
    Empty,
}

/// Lenient element-wise decode: entries that fail to parse degrade to their
/// fully-defaulted form rather than dropping the whole payload.
fn decode_list<T>(value: &Value) -> Vec<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match value.as_array() {
        Some(items) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}

impl ResponseShape {
    /// Classify a payload. First match wins, evaluated in this exact order;
    /// the precedence is a compatibility contract over historical API
    /// shapes and must not be reordered.
    pub fn classify(payload: &Value) -> ResponseShape {
        if let Some(categories) = payload.get("categories").or_else(|| payload.get("groups")) {
            return ResponseShape::Categorized(decode_list(categories));
        }

        if let Some(okrs) = payload.get("okrs").or_else(|| payload.get("objectives")) {
            let list: Vec<RawObjective> = decode_list(okrs);
            if !list.is_empty() {
                return ResponseShape::Flat(list);
            }
        }

        if payload.is_array() {
            return ResponseShape::Bare(decode_list(payload));
        }

        ResponseShape::Empty
    }
}

/// Adapt an API payload into the canonical category list.
pub fn adapt(payload: &Value) -> Vec<Category> {
    match ResponseShape::classify(payload) {
        // Pre-grouped and bare payloads are assumed canonical already.
        ResponseShape::Categorized(categories) | ResponseShape::Bare(categories) => categories,
        ResponseShape::Flat(objectives) => group_objectives(&objectives),
        ResponseShape::Empty => {
            debug!("payload matched no known shape, returning empty board");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pre_grouped_categories_pass_through() {
        let payload = json!({
            "categories": [
                {"id": "cat-1", "name": "Sales", "objectives": []},
                {"name": "malformed entry, still kept"}
            ]
        });
        let categories = adapt(&payload);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Sales");
        assert_eq!(categories[1].name, "malformed entry, still kept");
    }

    #[test]
    fn test_groups_alias_is_accepted() {
        let payload = json!({"groups": [{"id": "cat-1", "name": "Ops", "objectives": []}]});
        assert_eq!(adapt(&payload)[0].name, "Ops");
    }

    #[test]
    fn test_categories_take_precedence_over_okrs() {
        let payload = json!({
            "categories": [{"id": "cat-1", "name": "Pinned", "objectives": []}],
            "okrs": [{"title": "ignored"}]
        });
        let categories = adapt(&payload);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Pinned");
    }

    #[test]
    fn test_flat_okrs_are_grouped() {
        let payload = json!({
            "okrs": [
                {"id": "o1", "title": "Grow ARR", "category": "Sales"},
                {"id": "o2", "title": "Ship v2"}
            ]
        });
        let shape = ResponseShape::classify(&payload);
        assert!(matches!(shape, ResponseShape::Flat(_)));

        let categories = adapt(&payload);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Sales");
        assert_eq!(categories[1].name, crate::group::DEFAULT_CATEGORY);
    }

    #[test]
    fn test_objectives_alias_is_accepted() {
        let payload = json!({"objectives": [{"id": "o1", "category": "Ops"}]});
        assert_eq!(adapt(&payload)[0].name, "Ops");
    }

    #[test]
    fn test_empty_okr_list_yields_empty_board() {
        let payload = json!({"okrs": []});
        assert_eq!(ResponseShape::classify(&payload), ResponseShape::Empty);
        assert!(adapt(&payload).is_empty());
    }

    #[test]
    fn test_bare_array_is_taken_verbatim() {
        let payload = json!([{"id": "cat-9", "name": "Imported", "objectives": []}]);
        let categories = adapt(&payload);
        assert_eq!(categories[0].id, "cat-9");
    }

    #[test]
    fn test_unknown_shape_yields_empty_board() {
        assert!(adapt(&json!({"message": "no data"})).is_empty());
        assert!(adapt(&json!(null)).is_empty());
        assert!(adapt(&json!(42)).is_empty());
    }
}
