mod update;


use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use mediashelf_core::config_file::{ConfigFile, Settings};
use mediashelf_core::{
    ClickTarget, ImageAutocomplete, Navigation, NavigationController, PanelChange, Record,
    SearchSession, SiteDefinition,
};

use crate::model::results::ResultsState;
use crate::model::suggestions::SuggestionState;
use crate::theme::Theme;

/// Input mode determines how key events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Which pane j/k and paging act on when no dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Detail,
}

/// How many ticks the detail border stays highlighted after a reveal.
const REVEAL_TICKS: usize = 8;

/// Main application state.
pub struct App {
    pub session: SearchSession,
    pub navigation: Navigation,
    pub nav: NavigationController,
    /// `None` when autocomplete is disabled or the site has no images.
    pub autocomplete: Option<ImageAutocomplete>,

    pub input_mode: InputMode,
    pub focus: Focus,
    pub search_query: String,
    pub results: ResultsState,
    pub suggestions: SuggestionState,
    pub dropdown_cursor: usize,
    pub detail_scroll: u16,
    pub status: Option<String>,

    pub theme: Theme,
    /// Settings the app started with; saved back with the live values.
    pub settings: Settings,
    pub show_help: bool,
    pub confirm_quit: bool,
    pub should_quit: bool,
    pub tick: usize,
    pub reveal_tick: Option<usize>,
    pub visible_rows: usize,

    // Hit regions from the last frame, used for mouse clicks.
    pub nav_area: Option<Rect>,
    pub menu_hits: Vec<(usize, Rect)>,
    pub dropdown_area: Option<Rect>,
    pub results_area: Option<Rect>,
    pub results_offset: usize,
    pub suggestions_area: Option<Rect>,
}

impl App {
    pub fn new(site: SiteDefinition, settings: &Settings, theme: Theme) -> mediashelf_core::Result<Self> {
        let SiteDefinition {
            catalog,
            images,
            navigation,
        } = site;
        let session = SearchSession::new(catalog, settings.match_mode)?;
        let nav = NavigationController::for_navigation(&navigation);
        let autocomplete = if settings.autocomplete && !images.is_empty() {
            Some(ImageAutocomplete::new(images))
        } else {
            tracing::info!("image autocomplete disabled");
            None
        };

        Ok(Self {
            session,
            navigation,
            nav,
            autocomplete,
            input_mode: InputMode::Normal,
            focus: Focus::Results,
            search_query: String::new(),
            results: ResultsState::default(),
            suggestions: SuggestionState::default(),
            dropdown_cursor: 0,
            detail_scroll: 0,
            status: None,
            theme,
            settings: settings.clone(),
            show_help: false,
            confirm_quit: false,
            should_quit: false,
            tick: 0,
            reveal_tick: None,
            visible_rows: 20,
            nav_area: None,
            menu_hits: Vec::new(),
            dropdown_area: None,
            results_area: None,
            results_offset: 0,
            suggestions_area: None,
        })
    }

    /// Startup settings with the match mode the user is running now.
    pub fn current_settings(&self) -> Settings {
        Settings {
            match_mode: self.session.mode(),
            ..self.settings.clone()
        }
    }

    pub(crate) fn save_config(&mut self) {
        let config = ConfigFile::from(&self.current_settings());
        match mediashelf_core::config_file::save_config(&config) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "config saved");
                self.status = Some(format!("Saved config to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save config");
                self.status = Some(e.to_string());
            }
        }
    }

    /// Index into `navigation.menus` of the open dropdown.
    pub fn open_menu_index(&self) -> Option<usize> {
        let open = self.nav.open_dropdown()?;
        self.navigation.menus.iter().position(|m| m.id == open)
    }

    /// Record in the active detail panel, `None` for the default panel.
    pub fn active_record(&self) -> Option<&Record> {
        self.session.active_record()
    }

    /// Whether the detail border should still show the reveal highlight.
    pub fn is_revealing(&self) -> bool {
        self.reveal_tick
            .is_some_and(|t| self.tick.wrapping_sub(t) < REVEAL_TICKS)
    }

    /// Bring a newly activated panel into view: scroll to its top and flash
    /// its border.
    pub(crate) fn reveal(&mut self, change: PanelChange) {
        if !change.changed() {
            return;
        }
        tracing::debug!(from = %change.previous, to = %change.current, "detail panel revealed");
        self.detail_scroll = 0;
        self.reveal_tick = Some(self.tick);
    }

    /// Run the text search over the current query and show the outcome.
    pub(crate) fn run_search(&mut self) {
        let outcome = self.session.search(&self.search_query);
        self.results.replace(outcome.result);
        self.reveal(outcome.panel);
        self.focus = Focus::Results;
        self.status = None;
    }

    /// Activate the detail panel of the result under the cursor.
    pub(crate) fn activate_selected_result(&mut self) {
        let Some(id) = self.results.selected().map(|item| item.detail_id.clone()) else {
            return;
        };
        self.show_detail(&id);
    }

    pub(crate) fn show_detail(&mut self, id: &str) {
        match self.session.show_detail(id) {
            Ok(change) => {
                self.reveal(change);
                self.focus = Focus::Detail;
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Show the section behind item `item` of menu `menu`.
    pub(crate) fn select_menu_item(&mut self, menu: usize, item: usize) {
        let Some(target) = self
            .navigation
            .menus
            .get(menu)
            .and_then(|m| m.items.get(item))
            .map(|i| i.target.clone())
        else {
            return;
        };
        if let Err(e) = self.nav.select_accordion_target(&target) {
            self.status = Some(e.to_string());
        }
    }

    /// Follow a clicked image suggestion.
    ///
    /// Plain anchors resolve to a detail panel first, then to an accordion
    /// section; external links cannot be opened from a terminal, so they are
    /// only echoed in the status line.
    pub(crate) fn follow_click_target(&mut self, target: ClickTarget) {
        let panels = self.session.panels();
        match target.prefer_panel(|id| panels.contains(id)) {
            ClickTarget::Panel(id) => self.show_detail(&id),
            ClickTarget::Anchor(id) => {
                if self.navigation.section(&id).is_some() {
                    if let Err(e) = self.nav.select_accordion_target(&id) {
                        self.status = Some(e.to_string());
                    }
                } else {
                    tracing::warn!(anchor = %id, "suggestion points at an unknown anchor");
                    self.status = Some(format!("Nothing to show for #{id}"));
                }
            }
            ClickTarget::External(url) => {
                tracing::info!(url = %url, "external suggestion link");
                self.status = Some(format!("Open in a browser: {url}"));
            }
            ClickTarget::None => {}
        }
    }

    pub fn view(&mut self, f: &mut Frame) {
        let area = f.area();
        let [nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        crate::view::nav::render_bar(f, self, nav_area);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);
        crate::view::search::render_in(f, self, left);

        if self.nav.visible_section().is_some() {
            let [section_area, detail_area] =
                Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(right);
            crate::view::section::render_in(f, self, section_area);
            crate::view::detail::render_in(f, self, detail_area);
        } else {
            crate::view::detail::render_in(f, self, right);
        }

        crate::view::render_footer(f, self, footer_area);

        // Overlays last so they draw on top of the body
        crate::view::nav::render_dropdown(f, self, body_area);
        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}
