//! HTML rendering of search results and image suggestions.
//!
//! Every record-derived and user-derived string goes through
//! [`escape_html`] before it is interpolated.

use std::fmt::Write as _;

use crate::autocomplete::ImageEntry;
use crate::render::RenderResult;
use crate::{DefaultPanel, Record};

const MESSAGE_STYLE: &str = "font-style: italic; color: #555;";

/// Escape `&`, `<`, `>`, `"` and `'` for safe insertion into markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the contents of the results container.
pub fn render_results(result: &RenderResult) -> String {
    match result {
        RenderResult::EmptyQueryPrompt => {
            format!("<p style=\"{MESSAGE_STYLE}\">Please enter a search term.</p>")
        }
        RenderResult::NoResults { query_raw } => format!(
            "<p style=\"{MESSAGE_STYLE}\">No results found for \"{}\".</p>",
            escape_html(query_raw)
        ),
        RenderResult::Results { items, .. } => {
            let mut out = String::new();
            for item in items {
                let _ = write!(
                    out,
                    "<div class=\"search-result-item\">\n  <h4>{}</h4>\n  <p>By: {} ({})</p>\n  \
                     <button class=\"search-detail-button\" data-target=\"{}\">View Details</button>\n</div>\n",
                    escape_html(&item.title),
                    escape_html(&item.author),
                    escape_html(&item.category),
                    escape_html(&item.detail_id),
                );
            }
            out
        }
    }
}

/// Render the image suggestion strip as clickable thumbnails.
pub fn render_suggestions(images: &[&ImageEntry]) -> String {
    let mut out = String::new();
    for img in images {
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"{}\" title=\"{}\" data-link=\"{}\" style=\"cursor: pointer;\">",
            escape_html(&img.src),
            escape_html(&img.name),
            escape_html(&img.name),
            escape_html(&img.link),
        );
    }
    out
}

/// Render a record's detail panel block.
pub fn render_detail_panel(record: &Record, active: bool) -> String {
    let class = if active {
        "media-detail-block is-active"
    } else {
        "media-detail-block"
    };
    format!(
        "<section id=\"{}\" class=\"{class}\">\n  <h3>{}</h3>\n  <dl>\n    \
         <dt>Author</dt><dd>{}</dd>\n    <dt>Date</dt><dd>{}</dd>\n    \
         <dt>Type</dt><dd>{}</dd>\n    <dt>Category</dt><dd>{}</dd>\n  </dl>\n</section>\n",
        escape_html(&record.detail_id),
        escape_html(&record.title),
        escape_html(&record.author),
        escape_html(&record.date),
        escape_html(&record.kind),
        escape_html(&record.category),
    )
}

/// Render the default (welcome) panel block.
pub fn render_default_panel(panel: &DefaultPanel, active: bool) -> String {
    let class = if active {
        "media-detail-block is-active"
    } else {
        "media-detail-block"
    };
    format!(
        "<section id=\"{}\" class=\"{class}\">\n  <h3>{}</h3>\n  <p>{}</p>\n</section>\n",
        escape_html(&panel.id),
        escape_html(&panel.title),
        escape_html(&panel.body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ResultItem, render};

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_existing_entity_and_plain_text() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_prompt_markup() {
        let html = render_results(&RenderResult::EmptyQueryPrompt);
        assert!(html.contains("font-style: italic"));
        assert!(html.contains("Please enter a search term."));
    }

    #[test]
    fn test_no_results_quotes_escaped_query() {
        let html = render_results(&RenderResult::NoResults {
            query_raw: "<b>x</b>".to_string(),
        });
        assert!(html.contains("No results found for \"&lt;b&gt;x&lt;/b&gt;\"."));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_title_is_escaped() {
        let result = RenderResult::Results {
            query_raw: "script".to_string(),
            items: vec![ResultItem {
                title: "<script>alert('x')</script>".to_string(),
                author: "Mallory".to_string(),
                category: "Book".to_string(),
                detail_id: "d\"1".to_string(),
            }],
        };
        let html = render_results(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("data-target=\"d&quot;1\""));
    }

    #[test]
    fn test_one_block_per_item() {
        let a = Record {
            title: "A".to_string(),
            author: "X".to_string(),
            date: String::new(),
            kind: String::new(),
            category: "Book".to_string(),
            detail_id: "a".to_string(),
        };
        let b = Record {
            detail_id: "b".to_string(),
            ..a.clone()
        };
        let html = render_results(&render("a", &[&a, &b]));
        assert_eq!(html.matches("class=\"search-result-item\"").count(), 2);
        assert!(html.contains("<p>By: X (Book)</p>"));
    }

    #[test]
    fn test_suggestion_markup() {
        let img = ImageEntry {
            name: "Tom & Jerry".to_string(),
            src: "tj.jpg".to_string(),
            link: "#detail-tj".to_string(),
        };
        let html = render_suggestions(&[&img]);
        assert!(html.contains("alt=\"Tom &amp; Jerry\""));
        assert!(html.contains("data-link=\"#detail-tj\""));
    }

    #[test]
    fn test_detail_panel_active_class() {
        let r = Record {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            date: "1965".to_string(),
            kind: "Book".to_string(),
            category: "Science Fiction".to_string(),
            detail_id: "B-1965-013".to_string(),
        };
        assert!(render_detail_panel(&r, true).contains("class=\"media-detail-block is-active\""));
        assert!(render_detail_panel(&r, false).contains("class=\"media-detail-block\""));
    }
}
