//! Image-name autocomplete, independent of the text search.

use serde::{Deserialize, Serialize};

/// A thumbnail that can be suggested while typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub src: String,
    #[serde(default)]
    pub link: String,
}

/// Where clicking a suggestion leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A `#detail-...` fragment: activate that detail panel.
    Panel(String),
    /// Any other fragment: jump to that anchor.
    Anchor(String),
    /// A non-fragment link, opened as-is.
    External(String),
    None,
}

impl ClickTarget {
    /// Treat a plain anchor as a panel when `is_panel` knows its id.
    ///
    /// Links like `#B-1965-013` name a detail panel without the `detail-`
    /// prefix; every front end resolves them the same way.
    pub fn prefer_panel(self, is_panel: impl Fn(&str) -> bool) -> Self {
        match self {
            Self::Anchor(id) if is_panel(&id) => Self::Panel(id),
            other => other,
        }
    }
}

impl ImageEntry {
    pub fn click_target(&self) -> ClickTarget {
        let link = self.link.trim();
        if let Some(fragment) = link.strip_prefix('#') {
            if fragment.is_empty() {
                ClickTarget::None
            } else if fragment.starts_with("detail-") {
                ClickTarget::Panel(fragment.to_string())
            } else {
                ClickTarget::Anchor(fragment.to_string())
            }
        } else if link.is_empty() {
            ClickTarget::None
        } else {
            ClickTarget::External(link.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageAutocomplete {
    images: Vec<ImageEntry>,
}

impl ImageAutocomplete {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self { images }
    }

    /// Entries whose name contains the trimmed, lower-cased query.
    /// Blank queries suggest nothing.
    pub fn suggest(&self, query: &str) -> Vec<&ImageEntry> {
        let Some(needle) = crate::matcher::normalize_query(query) else {
            return Vec::new();
        };
        self.images
            .iter()
            .filter(|img| img.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(name: &str, link: &str) -> ImageEntry {
        ImageEntry {
            name: name.to_string(),
            src: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
            link: link.to_string(),
        }
    }

    fn images() -> ImageAutocomplete {
        ImageAutocomplete::new(vec![
            img("The Martian", "#detail-book1"),
            img("Dune", "#detail-film1"),
            img("Time Magazine", "#detail-mag1"),
        ])
    }

    #[test]
    fn test_suggest_substring_case_insensitive() {
        let ac = images();
        let names: Vec<&str> = ac.suggest(" MA ").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["The Martian", "Time Magazine"]);
    }

    #[test]
    fn test_suggest_blank_is_empty() {
        assert!(images().suggest("  ").is_empty());
    }

    #[test]
    fn test_suggest_no_match() {
        assert!(images().suggest("zzz").is_empty());
    }

    #[test]
    fn test_click_target_panel() {
        assert_eq!(
            img("x", "#detail-book1").click_target(),
            ClickTarget::Panel("detail-book1".to_string())
        );
    }

    #[test]
    fn test_click_target_anchor() {
        assert_eq!(
            img("x", "#section-books").click_target(),
            ClickTarget::Anchor("section-books".to_string())
        );
    }

    #[test]
    fn test_prefer_panel_only_rewrites_known_anchors() {
        let known = |id: &str| id == "B-1965-013";
        assert_eq!(
            img("x", "#B-1965-013").click_target().prefer_panel(known),
            ClickTarget::Panel("B-1965-013".to_string())
        );
        assert_eq!(
            img("x", "#section-books").click_target().prefer_panel(known),
            ClickTarget::Anchor("section-books".to_string())
        );
        assert_eq!(
            img("x", "https://example.org/a").click_target().prefer_panel(|_| true),
            ClickTarget::External("https://example.org/a".to_string())
        );
    }

    #[test]
    fn test_click_target_external_and_none() {
        assert_eq!(
            img("x", "https://example.org/a").click_target(),
            ClickTarget::External("https://example.org/a".to_string())
        );
        assert_eq!(img("x", "").click_target(), ClickTarget::None);
        assert_eq!(img("x", "#").click_target(), ClickTarget::None);
    }
}
