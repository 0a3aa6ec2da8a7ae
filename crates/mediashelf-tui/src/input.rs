use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Search => map_key_search(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::Down(MouseButton::Left) => Action::ClickAt(mouse.column, mouse.row),
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('m') => Action::ToggleMatchMode,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SaveConfig,
        KeyCode::Char('h') => Action::ResetPanel,
        KeyCode::Char(c @ '1'..='9') => Action::ToggleMenu(c as usize - '1' as usize),
        KeyCode::Tab => Action::CycleFocus,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

fn map_key_search(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::SearchCancel,
        KeyCode::Enter => Action::SearchConfirm,
        KeyCode::Tab | KeyCode::Down => Action::NextSuggestion,
        KeyCode::BackTab | KeyCode::Up => Action::PrevSuggestion,
        KeyCode::Char(c) => Action::SearchInput(c),
        KeyCode::Backspace => Action::SearchInput('\x08'), // sentinel for backspace
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_toggle_menus() {
        assert_eq!(
            map_event(&press(KeyCode::Char('1')), &InputMode::Normal),
            Action::ToggleMenu(0)
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('3')), &InputMode::Normal),
            Action::ToggleMenu(2)
        );
    }

    #[test]
    fn test_search_mode_captures_letters() {
        assert_eq!(
            map_event(&press(KeyCode::Char('q')), &InputMode::Search),
            Action::SearchInput('q')
        );
        assert_eq!(
            map_event(&press(KeyCode::Backspace), &InputMode::Search),
            Action::SearchInput('\x08')
        );
        assert_eq!(
            map_event(&press(KeyCode::Tab), &InputMode::Search),
            Action::NextSuggestion
        );
    }

    #[test]
    fn test_ctrl_s_saves_config_only_in_normal_mode() {
        let ctrl_s = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_s, &InputMode::Normal), Action::SaveConfig);
        assert_ne!(map_event(&ctrl_s, &InputMode::Search), Action::SaveConfig);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c, &InputMode::Search), Action::Quit);
        assert_eq!(map_event(&ctrl_c, &InputMode::Normal), Action::Quit);
    }
}
