use crate::matcher::{match_all, match_first};
use crate::panel::{DetailPanelController, PanelChange};
use crate::render::{RenderResult, render};
use crate::{Catalog, MatchMode, Record, Result};

/// Outcome of one search: what to show, and how the detail panel moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub result: RenderResult,
    pub panel: PanelChange,
}

/// Search pipeline over a catalog: match, render, reset the detail panel.
///
/// Every resolved search (prompt, no results, or results) puts the default
/// panel back in front; a result only becomes the active panel through
/// [`SearchSession::show_detail`].
#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    panels: DetailPanelController,
    mode: MatchMode,
}

impl SearchSession {
    pub fn new(catalog: Catalog, mode: MatchMode) -> Result<Self> {
        let panels = DetailPanelController::for_catalog(&catalog)?;
        Ok(Self {
            catalog,
            panels,
            mode,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn panels(&self) -> &DetailPanelController {
        &self.panels
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatchMode) {
        self.mode = mode;
    }

    pub fn search(&mut self, query_raw: &str) -> SearchOutcome {
        let records = self.catalog.all();
        let matches: Vec<&Record> = match self.mode {
            MatchMode::All => match_all(query_raw, records),
            MatchMode::First => match_first(query_raw, records).into_iter().collect(),
        };
        let result = render(query_raw, &matches);
        tracing::debug!(
            query = query_raw,
            mode = self.mode.label(),
            hits = result.len(),
            "search resolved"
        );
        let panel = self.panels.reset();
        SearchOutcome { result, panel }
    }

    /// Activate the detail panel `detail_id`. Unknown ids leave the active
    /// panel unchanged.
    pub fn show_detail(&mut self, detail_id: &str) -> Result<PanelChange> {
        self.panels.activate(detail_id)
    }

    pub fn reset_panel(&mut self) -> PanelChange {
        self.panels.reset()
    }

    pub fn active_panel(&self) -> &str {
        self.panels.active()
    }

    /// The record shown in the active panel, or `None` for the default panel.
    pub fn active_record(&self) -> Option<&Record> {
        self.catalog.get(self.panels.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: MatchMode) -> SearchSession {
        SearchSession::new(Catalog::builtin().unwrap(), mode).unwrap()
    }

    #[test]
    fn test_search_resets_to_default_after_selection() {
        let mut s = session(MatchMode::All);
        s.show_detail("detail-martian").unwrap();
        assert_eq!(s.active_record().map(|r| r.title.as_str()), Some("The Martian"));

        let outcome = s.search("dune");
        assert_eq!(outcome.panel.previous, "detail-martian");
        assert_eq!(s.active_panel(), "detail-default");
        assert!(s.active_record().is_none());
    }

    #[test]
    fn test_first_mode_returns_single_result() {
        let mut s = session(MatchMode::First);
        let outcome = s.search("various");
        assert_eq!(outcome.result.len(), 1);
        assert_eq!(outcome.result.items()[0].title, "Time Magazine");

        s.set_mode(MatchMode::All);
        assert_eq!(s.search("various").result.len(), 2);
    }

    #[test]
    fn test_first_mode_no_match() {
        let mut s = session(MatchMode::First);
        assert!(matches!(
            s.search("zzzznotfound").result,
            RenderResult::NoResults { .. }
        ));
    }

    #[test]
    fn test_show_unknown_detail_keeps_panel() {
        let mut s = session(MatchMode::All);
        s.show_detail("detail-book1").unwrap();
        assert!(s.show_detail("unknown-id").is_err());
        assert_eq!(s.active_panel(), "detail-book1");
    }
}
