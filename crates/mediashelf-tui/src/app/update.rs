use ratatui::layout::{Position, Rect};

use mediashelf_core::MatchMode;

use super::{App, Focus, InputMode};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(6);
                return false;
            }
            _ => {}
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack | Action::SearchCancel => {
                    self.confirm_quit = false;
                }
                _ => {}
            }
            return false;
        }

        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => self.confirm_quit = true,
                _ => {}
            }
            return false;
        }

        match self.input_mode {
            InputMode::Search => self.update_search(action),
            InputMode::Normal => self.update_normal(action),
        }
        false
    }

    fn update_search(&mut self, action: Action) {
        match action {
            Action::SearchInput('\x08') => {
                self.search_query.pop();
                self.refresh_suggestions();
            }
            Action::SearchInput(c) => {
                self.search_query.push(c);
                self.refresh_suggestions();
            }
            Action::NextSuggestion => self.suggestions.next(),
            Action::PrevSuggestion => self.suggestions.prev(),
            Action::SearchConfirm => {
                self.input_mode = InputMode::Normal;
                let picked = self.suggestions.selected().cloned();
                self.suggestions.clear();
                match picked {
                    Some(entry) => self.follow_click_target(entry.click_target()),
                    None => self.run_search(),
                }
            }
            Action::SearchCancel => {
                self.input_mode = InputMode::Normal;
                self.suggestions.clear();
            }
            Action::ClickAt(x, y) => self.handle_click(x, y),
            Action::Quit => self.confirm_quit = true,
            _ => {}
        }
    }

    fn update_normal(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.confirm_quit = true;
                return;
            }
            Action::ToggleHelp => {
                self.show_help = true;
                return;
            }
            Action::SaveConfig => {
                self.save_config();
                return;
            }
            Action::StartSearch => {
                self.nav.close_all();
                self.input_mode = InputMode::Search;
                self.refresh_suggestions();
                return;
            }
            Action::ToggleMenu(index) => {
                self.toggle_menu(index);
                return;
            }
            Action::ClickAt(x, y) => {
                self.handle_click(x, y);
                return;
            }
            _ => {}
        }

        // An open dropdown owns the cursor keys until it closes
        if let Some(menu) = self.open_menu_index() {
            let len = self.navigation.menus[menu].items.len();
            match action {
                Action::MoveDown => {
                    if self.dropdown_cursor + 1 < len {
                        self.dropdown_cursor += 1;
                    }
                }
                Action::MoveUp => self.dropdown_cursor = self.dropdown_cursor.saturating_sub(1),
                Action::GoTop => self.dropdown_cursor = 0,
                Action::GoBottom => self.dropdown_cursor = len.saturating_sub(1),
                Action::DrillIn => self.select_menu_item(menu, self.dropdown_cursor),
                Action::NavigateBack => self.nav.close_all(),
                _ => {}
            }
            return;
        }

        match action {
            Action::NavigateBack => {
                if self.nav.visible_section().is_some() {
                    self.nav.hide_sections();
                } else if !self.session.panels().is_default_active() {
                    let change = self.session.reset_panel();
                    self.reveal(change);
                    self.focus = Focus::Results;
                } else {
                    self.status = None;
                }
            }
            Action::ResetPanel => {
                let change = self.session.reset_panel();
                self.reveal(change);
            }
            Action::ToggleMatchMode => {
                let mode = match self.session.mode() {
                    MatchMode::All => MatchMode::First,
                    MatchMode::First => MatchMode::All,
                };
                self.session.set_mode(mode);
                if self.results.result.is_some() {
                    self.run_search();
                }
                self.status = Some(format!("Match mode: {}", mode.label()));
            }
            Action::CycleFocus => {
                self.focus = match self.focus {
                    Focus::Results => Focus::Detail,
                    Focus::Detail => Focus::Results,
                };
            }
            Action::DrillIn => {
                if self.focus == Focus::Results {
                    self.activate_selected_result();
                }
            }
            Action::MoveDown => self.scroll(1),
            Action::MoveUp => self.scroll(-1),
            Action::PageDown => self.scroll(self.visible_rows.max(1) as isize),
            Action::PageUp => self.scroll(-(self.visible_rows.max(1) as isize)),
            Action::GoTop => match self.focus {
                Focus::Results => self.results.go_top(),
                Focus::Detail => self.detail_scroll = 0,
            },
            Action::GoBottom => match self.focus {
                Focus::Results => self.results.go_bottom(),
                Focus::Detail => {}
            },
            _ => {}
        }
    }

    fn scroll(&mut self, delta: isize) {
        match self.focus {
            Focus::Results => self.results.move_by(delta),
            Focus::Detail => {
                let magnitude = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
                self.detail_scroll = if delta < 0 {
                    self.detail_scroll.saturating_sub(magnitude)
                } else {
                    self.detail_scroll.saturating_add(magnitude)
                };
            }
        }
    }

    fn toggle_menu(&mut self, index: usize) {
        let Some(id) = self.navigation.menus.get(index).map(|m| m.id.clone()) else {
            return;
        };
        if let Err(e) = self.nav.toggle_dropdown(&id) {
            self.status = Some(e.to_string());
            return;
        }
        self.dropdown_cursor = 0;
    }

    fn refresh_suggestions(&mut self) {
        match &self.autocomplete {
            Some(ac) => self.suggestions.refresh(ac, &self.search_query),
            None => self.suggestions.clear(),
        }
    }

    /// Route a left click using the hit regions recorded by the last frame.
    fn handle_click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);

        if let Some(area) = self.suggestions_area
            && area.contains(pos)
            && !self.suggestions.is_empty()
        {
            if let Some(row) = bordered_row(area, y)
                && let Some(entry) = self.suggestions.items.get(row).cloned()
            {
                self.input_mode = InputMode::Normal;
                self.suggestions.clear();
                self.follow_click_target(entry.click_target());
            }
            return;
        }

        // Clicking anywhere else takes focus away from the search box
        if self.input_mode == InputMode::Search {
            self.input_mode = InputMode::Normal;
            self.suggestions.clear();
        }

        if let Some(&(menu, _)) = self.menu_hits.iter().find(|(_, r)| r.contains(pos)) {
            self.toggle_menu(menu);
            return;
        }

        if let Some(area) = self.dropdown_area
            && area.contains(pos)
            && let Some(menu) = self.open_menu_index()
        {
            if let Some(row) = bordered_row(area, y) {
                self.select_menu_item(menu, row);
            }
            return;
        }

        // Blank space in the nav bar still counts as inside the navigation
        if self.nav_area.is_some_and(|area| area.contains(pos)) {
            return;
        }

        self.nav.close_all();

        if let Some(area) = self.results_area
            && area.contains(pos)
            && let Some(row) = bordered_row(area, y)
        {
            let index = self.results_offset + row;
            if index < self.results.len() {
                self.results.cursor = index;
                self.focus = Focus::Results;
                self.activate_selected_result();
            }
        }
    }
}

/// Zero-based content row of `y` inside a block with a one-cell border.
fn bordered_row(area: Rect, y: u16) -> Option<usize> {
    if y <= area.y || y >= area.y + area.height.saturating_sub(1) {
        return None;
    }
    Some((y - area.y - 1) as usize)
}
