pub mod detail;
pub mod help;
pub mod nav;
pub mod quit_confirm;
pub mod search;
pub mod section;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Focus, InputMode};

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// Key hints for the current mode, or the status message when there is one.
pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = match (app.input_mode, app.nav.open_dropdown().is_some(), app.focus) {
            (InputMode::Search, _, _) => {
                " Enter:search  Tab:next suggestion  Esc:cancel".to_string()
            }
            (_, true, _) => " j/k:move  Enter:show section  Esc:close menu".to_string(),
            (_, false, Focus::Results) => format!(
                " /:search  j/k:move  Enter:details  1-{}:menus  m:mode ({})  ^s:save  ?:help  q:quit",
                app.navigation.menus.len().max(1),
                app.session.mode().label()
            ),
            (_, false, Focus::Detail) => {
                " j/k:scroll  h:home panel  Tab:results  Esc:back  ?:help  q:quit".to_string()
            }
        };
        Line::from(Span::styled(hints, theme.footer_style()))
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Dune", 10), "Dune");
        assert_eq!(truncate("Blade Runner", 6), "Blade\u{2026}");
        assert_eq!(truncate("Bl\u{e9}de", 5), "Bl\u{e9}de");
        assert_eq!(truncate("anything", 0), "");
    }
}
