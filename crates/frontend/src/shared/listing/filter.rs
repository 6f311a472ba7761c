use super::column::Column;
use chrono::NaiveDate;
use std::sync::Arc;

/// Per-page filter configuration.
///
/// `search_keys` name the columns whose values participate in free-text
/// search. An empty list (or keys that match no column) degenerates to
/// "match everything" — a misconfigured page still renders. The date filter
/// exists exactly when `date_of` is supplied; a row for which the extractor
/// yields `None` is excluded from date-bounded results instead of failing.
pub struct FilterConfig<T> {
    pub search_keys: Vec<&'static str>,
    pub date_of: Option<Arc<dyn Fn(&T) -> Option<NaiveDate> + Send + Sync>>,
}

impl<T> Clone for FilterConfig<T> {
    fn clone(&self) -> Self {
        Self {
            search_keys: self.search_keys.clone(),
            date_of: self.date_of.clone(),
        }
    }
}

impl<T> Default for FilterConfig<T> {
    fn default() -> Self {
        Self {
            search_keys: Vec::new(),
            date_of: None,
        }
    }
}

impl<T> FilterConfig<T> {
    pub fn search(keys: Vec<&'static str>) -> Self {
        Self {
            search_keys: keys,
            date_of: None,
        }
    }

    pub fn with_date(
        mut self,
        date_of: impl Fn(&T) -> Option<NaiveDate> + Send + Sync + 'static,
    ) -> Self {
        self.date_of = Some(Arc::new(date_of));
        self
    }

    pub fn date_filter_enabled(&self) -> bool {
        self.date_of.is_some()
    }
}

/// Inclusive date range; an unset bound is unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// User-driven filter state, owned by the table shell's controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub date_range: Option<DateRange>,
}

/// Apply search + date predicates to `rows`, AND-composed.
///
/// Output order equals input order; the input is never mutated. Search is a
/// case-insensitive substring match over the configured columns' values
/// (a row matches if any configured field matches).
pub fn apply_filters<T: Clone>(
    rows: &[T],
    columns: &[Column<T>],
    config: &FilterConfig<T>,
    state: &FilterState,
) -> Vec<T> {
    let term = state.search_term.trim().to_lowercase();

    let search_columns: Vec<&Column<T>> = columns
        .iter()
        .filter(|c| config.search_keys.contains(&c.key))
        .collect();

    rows.iter()
        .filter(|row| matches_search(*row, &search_columns, &term))
        .filter(|row| matches_date(*row, config, state))
        .cloned()
        .collect()
}

fn matches_search<T>(row: &T, search_columns: &[&Column<T>], term: &str) -> bool {
    if term.is_empty() || search_columns.is_empty() {
        return true;
    }
    search_columns.iter().any(|col| {
        col.value(row)
            .map(|v| v.to_lowercase().contains(term))
            .unwrap_or(false)
    })
}

fn matches_date<T>(row: &T, config: &FilterConfig<T>, state: &FilterState) -> bool {
    let (Some(date_of), Some(range)) = (&config.date_of, &state.date_range) else {
        return true;
    };
    if !range.is_bounded() {
        return true;
    }
    match date_of(row) {
        Some(date) => range.contains(date),
        // No parseable date on the row: excluded from bounded results.
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: String,
        sku: String,
        created: Option<NaiveDate>,
    }

    fn item(name: &str, sku: &str, created: Option<&str>) -> Item {
        Item {
            name: name.to_string(),
            sku: sku.to_string(),
            created: created.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        }
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::text("name", "Name", |i: &Item| i.name.clone()),
            Column::text("sku", "SKU", |i: &Item| i.sku.clone()),
        ]
    }

    fn dataset() -> Vec<Item> {
        vec![
            item("Phone Case", "SKU-1", Some("2024-01-15")),
            item("Laptop Stand", "SKU-2", Some("2023-12-31")),
            item("Smartphone", "SKU-3", Some("2024-01-20")),
            item("Desk Lamp", "PHN-4", None),
        ]
    }

    fn search(term: &str) -> FilterState {
        FilterState {
            search_term: term.to_string(),
            date_range: None,
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let cfg = FilterConfig::search(vec!["name"]);
        let out = apply_filters(&dataset(), &columns(), &cfg, &search(""));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_substring_over_any_field() {
        let cfg = FilterConfig::search(vec!["name", "sku"]);
        let out = apply_filters(&dataset(), &columns(), &cfg, &search("phone"));
        // "Phone Case" and "Smartphone" by name; "PHN-4" does not contain it.
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Phone Case");
        assert_eq!(out[1].name, "Smartphone");

        let out = apply_filters(&dataset(), &columns(), &cfg, &search("phn"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sku, "PHN-4");
    }

    #[test]
    fn empty_search_keys_degenerate_to_always_true() {
        let cfg: FilterConfig<Item> = FilterConfig::default();
        let out = apply_filters(&dataset(), &columns(), &cfg, &search("zzz"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn unknown_search_keys_are_ignored() {
        let cfg = FilterConfig::search(vec!["no_such_column"]);
        let out = apply_filters(&dataset(), &columns(), &cfg, &search("zzz"));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn filtering_preserves_input_order() {
        let cfg = FilterConfig::search(vec!["sku"]);
        let out = apply_filters(&dataset(), &columns(), &cfg, &search("sku"));
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Phone Case", "Laptop Stand", "Smartphone"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let cfg = FilterConfig::search(vec!["name"]).with_date(|i: &Item| i.created);
        let state = FilterState {
            search_term: "a".to_string(),
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2023, 1, 1),
                to: None,
            }),
        };
        let once = apply_filters(&dataset(), &columns(), &cfg, &state);
        let twice = apply_filters(&once, &columns(), &cfg, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn date_range_is_inclusive_and_bounds_are_optional() {
        let cfg = FilterConfig::search(vec![]).with_date(|i: &Item| i.created);
        let range = |from: Option<&str>, to: Option<&str>| FilterState {
            search_term: String::new(),
            date_range: Some(DateRange {
                from: from.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
                to: to.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
            }),
        };

        // 2023-12-31 is excluded, 2024-01-15 and 2024-01-20 are included.
        let out = apply_filters(
            &dataset(),
            &columns(),
            &cfg,
            &range(Some("2024-01-01"), Some("2024-01-31")),
        );
        assert_eq!(out.len(), 2);

        // Inclusive upper bound.
        let out = apply_filters(
            &dataset(),
            &columns(),
            &cfg,
            &range(Some("2024-01-20"), Some("2024-01-20")),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Smartphone");

        // Unbounded upper side.
        let out = apply_filters(&dataset(), &columns(), &cfg, &range(Some("2024-01-01"), None));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn row_without_date_is_excluded_from_bounded_results_only() {
        let cfg = FilterConfig::search(vec![]).with_date(|i: &Item| i.created);

        let bounded = FilterState {
            search_term: String::new(),
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2000, 1, 1),
                to: None,
            }),
        };
        let out = apply_filters(&dataset(), &columns(), &cfg, &bounded);
        assert!(out.iter().all(|i| i.name != "Desk Lamp"));

        // A present-but-unbounded range does not exclude the dateless row.
        let unbounded = FilterState {
            search_term: String::new(),
            date_range: Some(DateRange::default()),
        };
        let out = apply_filters(&dataset(), &columns(), &cfg, &unbounded);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn search_and_date_compose_with_and() {
        let cfg = FilterConfig::search(vec!["name"]).with_date(|i: &Item| i.created);
        let state = FilterState {
            search_term: "phone".to_string(),
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2024, 1, 16),
                to: None,
            }),
        };
        let out = apply_filters(&dataset(), &columns(), &cfg, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Smartphone");
    }
}
