//! Fetch filter parameters recognized by the OKR endpoint.

use serde::Serialize;

/// Optional filter set for an OKR fetch. Every field maps to one query
/// parameter; unset fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OkrFilter {
    pub owner: Option<String>,
    pub period: Option<String>,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub team: Option<String>,
    pub visibility: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl OkrFilter {
    /// Query-string pairs for the set fields, in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(owner) = &self.owner {
            pairs.push(("owner", owner.clone()));
        }
        if let Some(period) = &self.period {
            pairs.push(("period", period.clone()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(team) = &self.team {
            pairs.push(("team", team.clone()));
        }
        if let Some(visibility) = &self.visibility {
            pairs.push(("visibility", visibility.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// True when no filter field is set.
    pub fn is_empty(&self) -> bool {
        *self == OkrFilter::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let filter = OkrFilter {
            owner: Some("dana".to_string()),
            year: Some(2026),
            limit: Some(25),
            ..OkrFilter::default()
        };
        assert_eq!(
            filter.to_query_pairs(),
            vec![
                ("owner", "dana".to_string()),
                ("year", "2026".to_string()),
                ("limit", "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_filter_is_empty() {
        assert!(OkrFilter::default().is_empty());
        assert!(OkrFilter::default().to_query_pairs().is_empty());
    }
}
