//! Case-insensitive substring matching over catalog records.
//!
//! Matching is a stable filter: no ranking, no fuzzy comparison, no
//! tokenization. A record matches when its title or its author contains
//! the normalized query.

use crate::Record;

/// Trim and lower-case a raw query. Returns `None` for blank input.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn record_matches(record: &Record, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || (!record.author.is_empty() && record.author.to_lowercase().contains(needle))
}

/// Every matching record, in catalog order. Blank queries match nothing.
pub fn match_all<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|r| record_matches(r, &needle))
        .collect()
}

/// The first matching record in catalog order.
pub fn match_first<'a>(query: &str, records: &'a [Record]) -> Option<&'a Record> {
    let needle = normalize_query(query)?;
    records.iter().find(|r| record_matches(r, &needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, author: &str, id: &str) -> Record {
        Record {
            title: title.to_string(),
            author: author.to_string(),
            date: String::new(),
            kind: String::new(),
            category: String::new(),
            detail_id: id.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("Dune", "Frank Herbert", "B-1965-013"),
            rec("The Martian", "Andy Weir", "d-2"),
            rec("Dune Messiah", "Frank Herbert", "d-3"),
            rec("Time Magazine", "", "d-4"),
            rec("Arrival", "Denis Villeneuve", "d-5"),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.detail_id.clone()).collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  DuNe \t"), Some("dune".to_string()));
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \n "), None);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let records = sample();
        assert!(match_all("", &records).is_empty());
        assert!(match_all("   ", &records).is_empty());
        assert!(match_first("\t", &records).is_none());
    }

    #[test]
    fn test_title_substring() {
        let records = sample();
        assert_eq!(ids(&match_all("une", &records)), vec!["B-1965-013", "d-3"]);
    }

    #[test]
    fn test_author_substring() {
        let records = sample();
        assert_eq!(ids(&match_all("weir", &records)), vec!["d-2"]);
        assert_eq!(ids(&match_all("herbert", &records)), vec!["B-1965-013", "d-3"]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample();
        let lower = match_all("dune", &records);
        assert_eq!(lower, match_all("DUNE", &records));
        assert_eq!(lower, match_all("DuNe", &records));
    }

    #[test]
    fn test_query_is_trimmed() {
        let records = sample();
        assert_eq!(match_all("  arrival  ", &records).len(), 1);
    }

    #[test]
    fn test_no_word_boundary_required() {
        let records = sample();
        // "e mar" spans the space between two title words
        assert_eq!(ids(&match_all("e mar", &records)), vec!["d-2"]);
    }

    #[test]
    fn test_match_first_returns_first_in_catalog_order() {
        let records = sample();
        let first = match_first("frank", &records).unwrap();
        assert_eq!(first.detail_id, "B-1965-013");
        assert!(match_first("zzzznotfound", &records).is_none());
    }

    #[test]
    fn test_results_are_ordered_subsequence() {
        let records = sample();
        for q in ["a", "e", "dune", "i", "ti", "x", "frank herbert", " "] {
            let matched = match_all(q, &records);
            let mut positions = matched.iter().map(|m| {
                records
                    .iter()
                    .position(|r| std::ptr::eq(r, *m))
                    .expect("match must come from the input")
            });
            let mut last = None;
            for pos in &mut positions {
                if let Some(prev) = last {
                    assert!(pos > prev, "query {q:?} broke catalog order");
                }
                last = Some(pos);
            }
            if let Some(first) = match_first(q, &records) {
                assert!(std::ptr::eq(first, matched[0]));
            } else {
                assert!(matched.is_empty());
            }
        }
    }

    #[test]
    fn test_unicode_lowercase() {
        let records = vec![rec("ÉTUDE", "Ève", "u-1")];
        assert_eq!(match_all("étude", &records).len(), 1);
        assert_eq!(match_all("ÈVE", &records).len(), 1);
    }
}
