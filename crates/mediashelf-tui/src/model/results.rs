use mediashelf_core::{RenderResult, ResultItem};

/// The rendered search result plus the cursor over its items.
///
/// `result` is `None` until the first search resolves, which the view
/// shows as an idle hint rather than the empty-query prompt.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    pub result: Option<RenderResult>,
    pub cursor: usize,
}

impl ResultsState {
    /// Replace the shown result and move the cursor back to the top.
    pub fn replace(&mut self, result: RenderResult) {
        self.result = Some(result);
        self.cursor = 0;
    }

    pub fn items(&self) -> &[ResultItem] {
        self.result.as_ref().map(|r| r.items()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn selected(&self) -> Option<&ResultItem> {
        self.items().get(self.cursor)
    }

    pub fn move_by(&mut self, delta: isize) {
        let len = self.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn go_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_bottom(&mut self) {
        self.cursor = self.len().saturating_sub(1);
    }
}
