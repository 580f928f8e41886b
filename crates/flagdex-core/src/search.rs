// crates/flagdex-core/src/search.rs

//! # Search Filter
//!
//! Filtering is a pure, synchronous pass over the loaded list: no index,
//! no ranking, no mutation. Linear scan is fine for ~250 countries.
//! Results keep the loaded list's order and are a subset by identity.

use crate::normalize::{extract_name, CountryRecord};
use crate::text::{fold_key, tokens};

/// The rule deciding whether a record's name satisfies a query.
///
/// Both policies are case-insensitive (and accent-insensitive via
/// [`fold_key`]); both treat the empty query as "match everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The folded name contains the folded query as a contiguous
    /// substring ("man" matches "Germany", "Oman", "Isle of Man").
    #[default]
    Substring,
    /// Some word of the folded name starts with the folded query
    /// ("ind" matches "India" and "Independent State of Samoa" but
    /// not "Canada").
    WordPrefix,
}

impl MatchPolicy {
    /// Whether `name` satisfies `query` under this policy.
    ///
    /// `query` must already be normalized ([`crate::text::normalize_query`]);
    /// `name` is folded here.
    pub fn matches(&self, name: &str, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let folded = fold_key(name);
        match self {
            MatchPolicy::Substring => folded.contains(query),
            MatchPolicy::WordPrefix => tokens(&folded).any(|t| t.starts_with(query)),
        }
    }
}

/// Filter the loaded list by a normalized query.
///
/// Returns references into `records` in their original order. The empty
/// query returns every record.
pub fn filter_records<'a>(
    records: &'a [CountryRecord],
    query: &str,
    policy: MatchPolicy,
) -> Vec<&'a CountryRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| policy.matches(extract_name(r), query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_query;
    use serde_json::{json, Value};

    fn list() -> Vec<Value> {
        [
            "Independent State of Samoa",
            "India",
            "Indonesia",
            "Canada",
            "Germany",
        ]
        .iter()
        .map(|n| json!({ "name": { "common": n } }))
        .collect()
    }

    fn names(matches: &[&Value]) -> Vec<String> {
        matches
            .iter()
            .map(|r| crate::normalize::extract_name(r).to_string())
            .collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let l = list();
        for policy in [MatchPolicy::Substring, MatchPolicy::WordPrefix] {
            let out = filter_records(&l, "", policy);
            assert_eq!(out.len(), l.len());
            for (a, b) in out.iter().zip(l.iter()) {
                assert!(std::ptr::eq(*a, b));
            }
        }
    }

    #[test]
    fn substring_matches_anywhere() {
        let l = list();
        let out = filter_records(&l, &normalize_query("nad"), MatchPolicy::Substring);
        assert_eq!(names(&out), vec!["Canada"]);

        let out = filter_records(&l, &normalize_query("IND"), MatchPolicy::Substring);
        assert_eq!(
            names(&out),
            vec!["Independent State of Samoa", "India", "Indonesia"]
        );
    }

    #[test]
    fn word_prefix_requires_token_start() {
        let l = list();
        let out = filter_records(&l, &normalize_query("ind"), MatchPolicy::WordPrefix);
        assert_eq!(
            names(&out),
            vec!["Independent State of Samoa", "India", "Indonesia"]
        );

        // "nad" sits inside "Canada" but starts no word.
        let out = filter_records(&l, &normalize_query("nad"), MatchPolicy::WordPrefix);
        assert!(out.is_empty());

        // A later word counts.
        let out = filter_records(&l, &normalize_query("samoa"), MatchPolicy::WordPrefix);
        assert_eq!(names(&out), vec!["Independent State of Samoa"]);
    }

    #[test]
    fn results_preserve_order_and_identity() {
        let l = list();
        let out = filter_records(&l, &normalize_query("an"), MatchPolicy::Substring);
        assert!(!out.is_empty());
        // Subsequence of the original order.
        let mut last = 0;
        for m in &out {
            let pos = l.iter().position(|r| std::ptr::eq(r, *m)).unwrap();
            assert!(pos >= last);
            last = pos;
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let l = list();
        let q = normalize_query("ind");
        let once = filter_records(&l, &q, MatchPolicy::Substring);
        let owned: Vec<Value> = once.iter().map(|r| (*r).clone()).collect();
        let twice = filter_records(&owned, &q, MatchPolicy::Substring);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn matching_folds_accents() {
        let l = vec![json!({ "name": { "common": "Côte d'Ivoire" } })];
        let out = filter_records(&l, &normalize_query("cote"), MatchPolicy::Substring);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn unnamed_records_only_match_everything() {
        let l = vec![json!({})];
        assert_eq!(filter_records(&l, "", MatchPolicy::Substring).len(), 1);
        assert!(filter_records(&l, "x", MatchPolicy::Substring).is_empty());
    }
}
