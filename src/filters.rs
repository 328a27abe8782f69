//! Translation of the subscriptions filter form into query parameters.

/// Raw filter form state. Text fields stay exactly as typed; the selects
/// hold the option's value attribute ("" means "Todos").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionFilters {
    pub email: String,
    pub status: String,
    pub project: String,
    pub overdue_range: String,
}

/// Sparse query derived from `SubscriptionFilters`: only active filters are
/// present, and the overdue-range bucket is decomposed into numeric bounds.
///
/// A fresh value is derived on every render; the fetching hook compares it by
/// value against the previous one, so any filter edit triggers a re-fetch and
/// an unchanged form does not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionQuery {
    pub email: Option<String>,
    pub status: Option<String>,
    pub project: Option<String>,
    pub overdue_min: Option<i64>,
    pub overdue_max: Option<i64>,
}

impl SubscriptionQuery {
    pub fn from_filters(filters: &SubscriptionFilters) -> Self {
        let (overdue_min, overdue_max) = decompose_overdue_range(&filters.overdue_range);
        Self {
            email: non_empty(&filters.email),
            status: non_empty(&filters.status),
            project: non_empty(&filters.project),
            overdue_min,
            overdue_max,
        }
    }

    /// Flat key/value pairs for the request URL, in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(email) = &self.email {
            pairs.push(("email", email.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(project) = &self.project {
            pairs.push(("project", project.clone()));
        }
        if let Some(min) = self.overdue_min {
            pairs.push(("overdueMin", min.to_string()));
        }
        if let Some(max) = self.overdue_max {
            pairs.push(("overdueMax", max.to_string()));
        }
        pairs
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Bucket tokens come from the overdue-range select. The bounds must stay in
/// lockstep with the backend's own bucketing; an unknown token falls open to
/// "no filter" instead of failing.
fn decompose_overdue_range(token: &str) -> (Option<i64>, Option<i64>) {
    match token {
        "0" => (Some(0), Some(0)),
        "1-500000" => (Some(1), Some(500_000)),
        "500001-1000000" => (Some(500_001), Some(1_000_000)),
        "1000001+" => (Some(1_000_001), None),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(email: &str, status: &str, project: &str, overdue_range: &str) -> SubscriptionFilters {
        SubscriptionFilters {
            email: email.into(),
            status: status.into(),
            project: project.into(),
            overdue_range: overdue_range.into(),
        }
    }

    #[test]
    fn empty_filters_produce_an_empty_query() {
        let query = SubscriptionQuery::from_filters(&SubscriptionFilters::default());
        assert_eq!(query, SubscriptionQuery::default());
        assert!(query.to_pairs().is_empty());
    }

    #[test]
    fn only_non_empty_fields_are_included() {
        let query = SubscriptionQuery::from_filters(&filters("ana@lokl.co", "", "", ""));
        assert_eq!(
            query,
            SubscriptionQuery {
                email: Some("ana@lokl.co".into()),
                ..SubscriptionQuery::default()
            }
        );
    }

    #[test]
    fn text_fields_pass_through_verbatim() {
        // No trimming, no case folding; matching is the backend's problem.
        let query = SubscriptionQuery::from_filters(&filters(" Ana@LOKL.co ", "", "Green Tower", ""));
        assert_eq!(query.email.as_deref(), Some(" Ana@LOKL.co "));
        assert_eq!(query.project.as_deref(), Some("Green Tower"));
    }

    #[test]
    fn overdue_buckets_decompose_into_bounds() {
        let cases = [
            ("0", Some(0), Some(0)),
            ("1-500000", Some(1), Some(500_000)),
            ("500001-1000000", Some(500_001), Some(1_000_000)),
            ("1000001+", Some(1_000_001), None),
            ("", None, None),
        ];
        for (token, min, max) in cases {
            let query = SubscriptionQuery::from_filters(&filters("", "", "", token));
            assert_eq!(query.overdue_min, min, "bucket {token:?}");
            assert_eq!(query.overdue_max, max, "bucket {token:?}");
        }
    }

    #[test]
    fn unknown_bucket_token_falls_open_to_no_filter() {
        let query = SubscriptionQuery::from_filters(&filters("", "", "", "2000000-3000000"));
        assert_eq!(query.overdue_min, None);
        assert_eq!(query.overdue_max, None);
    }

    #[test]
    fn middle_bucket_yields_exactly_the_two_bounds() {
        let query = SubscriptionQuery::from_filters(&filters("", "", "", "500001-1000000"));
        assert_eq!(
            query.to_pairs(),
            vec![
                ("overdueMin", "500001".to_string()),
                ("overdueMax", "1000000".to_string()),
            ]
        );
    }

    #[test]
    fn translation_is_idempotent_by_value() {
        let input = filters("ana@lokl.co", "active", "Green Tower", "1-500000");
        let first = SubscriptionQuery::from_filters(&input);
        let second = SubscriptionQuery::from_filters(&input);
        assert_eq!(first, second);
        assert_eq!(first.to_pairs(), second.to_pairs());
    }

    #[test]
    fn pairs_render_all_active_filters() {
        let input = filters("ana@lokl.co", "active", "Green Tower", "1000001+");
        let pairs = SubscriptionQuery::from_filters(&input).to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("email", "ana@lokl.co".to_string()),
                ("status", "active".to_string()),
                ("project", "Green Tower".to_string()),
                ("overdueMin", "1000001".to_string()),
            ]
        );
    }
}
