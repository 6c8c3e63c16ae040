//! Category grouper: partitions a flat objective list into named categories.

use crate::model::Category;
use crate::normalize::normalize_objective;
use crate::raw::RawObjective;
use indexmap::IndexMap;

/// Label used for objectives that carry no category.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Partition raw objectives into categories, preserving first-seen label
/// order and the original relative order of objectives within a label.
///
/// Single pass, no sorting. Synthetic category ids are 1-based (`cat-1`,
/// `cat-2`, ...) in first-seen order.
pub fn group_objectives(raws: &[RawObjective]) -> Vec<Category> {
    let mut buckets: IndexMap<String, Vec<_>> = IndexMap::new();

    for (index, raw) in raws.iter().enumerate() {
        let label = raw
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();
        buckets
            .entry(label)
            .or_default()
            .push(normalize_objective(raw, index));
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(n, (name, objectives))| Category {
            id: format!("cat-{}", n + 1),
            name,
            objectives,
        })
        .collect()
}
