use serde::Serialize;

use crate::Record;

/// Summary of one matching record, as shown in a result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub title: String,
    pub author: String,
    pub category: String,
    pub detail_id: String,
}

impl From<&Record> for ResultItem {
    fn from(r: &Record) -> Self {
        Self {
            title: r.title.clone(),
            author: r.author.clone(),
            category: r.category.clone(),
            detail_id: r.detail_id.clone(),
        }
    }
}

/// What the result area should show after a search.
///
/// This is data only; presentation layers are responsible for escaping
/// every field they interpolate into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RenderResult {
    /// The query was blank: ask the user for input.
    EmptyQueryPrompt,
    NoResults {
        query_raw: String,
    },
    Results {
        query_raw: String,
        items: Vec<ResultItem>,
    },
}

impl RenderResult {
    pub fn items(&self) -> &[ResultItem] {
        match self {
            Self::Results { items, .. } => items,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Plain-text status message for the result area header.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyQueryPrompt => "Please enter a search term.".to_string(),
            Self::NoResults { query_raw } => format!("No results found for \"{query_raw}\"."),
            Self::Results { query_raw, items } => {
                let noun = if items.len() == 1 { "result" } else { "results" };
                format!("{} {noun} for \"{query_raw}\"", items.len())
            }
        }
    }
}

/// Turn a match result into a [`RenderResult`].
///
/// A whitespace-only `query_raw` always yields the prompt, whatever
/// `matches` holds.
pub fn render(query_raw: &str, matches: &[&Record]) -> RenderResult {
    if query_raw.trim().is_empty() {
        return RenderResult::EmptyQueryPrompt;
    }
    if matches.is_empty() {
        return RenderResult::NoResults {
            query_raw: query_raw.to_string(),
        };
    }
    RenderResult::Results {
        query_raw: query_raw.to_string(),
        items: matches.iter().map(|r| ResultItem::from(*r)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Record {
        Record {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            date: "1965".to_string(),
            kind: "Book".to_string(),
            category: "Science Fiction".to_string(),
            detail_id: "B-1965-013".to_string(),
        }
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let value = serde_json::to_value(render("dune", &[&dune()])).unwrap();
        assert_eq!(value["kind"], "results");
        assert_eq!(value["queryRaw"], "dune");
        assert_eq!(value["items"][0]["detailId"], "B-1965-013");
        assert!(value["items"][0].get("detail_id").is_none());
    }

    #[test]
    fn test_blank_query_prompts() {
        assert_eq!(render("", &[]), RenderResult::EmptyQueryPrompt);
        assert_eq!(render("  \t", &[]), RenderResult::EmptyQueryPrompt);
    }

    #[test]
    fn test_blank_query_ignores_matches() {
        let d = dune();
        assert_eq!(render(" ", &[&d]), RenderResult::EmptyQueryPrompt);
    }

    #[test]
    fn test_no_results_keeps_raw_query() {
        let r = render(" Zzzz ", &[]);
        assert_eq!(
            r,
            RenderResult::NoResults {
                query_raw: " Zzzz ".to_string()
            }
        );
        assert!(r.is_empty());
    }

    #[test]
    fn test_results_carry_summary_fields() {
        let d = dune();
        let r = render("dune", &[&d]);
        assert_eq!(r.len(), 1);
        let item = &r.items()[0];
        assert_eq!(item.title, "Dune");
        assert_eq!(item.author, "Frank Herbert");
        assert_eq!(item.category, "Science Fiction");
        assert_eq!(item.detail_id, "B-1965-013");
    }

    #[test]
    fn test_messages() {
        let d = dune();
        assert_eq!(
            RenderResult::EmptyQueryPrompt.message(),
            "Please enter a search term."
        );
        assert_eq!(
            render("xyz", &[]).message(),
            "No results found for \"xyz\"."
        );
        assert_eq!(render("dune", &[&d]).message(), "1 result for \"dune\"");
        assert_eq!(render("d", &[&d, &d]).message(), "2 results for \"d\"");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(render("q", &[])).unwrap();
        assert_eq!(json["kind"], "no_results");
        assert_eq!(json["queryRaw"], "q");
    }
}
