use mediashelf_core::{ImageAutocomplete, ImageEntry};

/// Rows in the suggestion strip; matches past this are not offered.
pub const MAX_SUGGESTIONS: usize = 5;

/// Live image suggestions under the search bar.
///
/// `cursor` is `None` until the user cycles into the list; Enter then
/// clicks the highlighted suggestion instead of running a text search.
#[derive(Debug, Clone, Default)]
pub struct SuggestionState {
    pub items: Vec<ImageEntry>,
    pub cursor: Option<usize>,
}

impl SuggestionState {
    /// Recompute suggestions for `query`. The highlight is dropped because
    /// the list it pointed into is gone.
    pub fn refresh(&mut self, autocomplete: &ImageAutocomplete, query: &str) {
        self.items = autocomplete
            .suggest(query)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = Some(match self.cursor {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn selected(&self) -> Option<&ImageEntry> {
        self.cursor.and_then(|i| self.items.get(i))
    }
}
