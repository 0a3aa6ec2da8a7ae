use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;

/// The visible accordion section, above the detail panel.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let Some(section) = app
        .nav
        .visible_section()
        .and_then(|id| app.navigation.section(id))
    else {
        return;
    };
    let theme = &app.theme;
    let title = if section.title.is_empty() {
        section.id.as_str()
    } else {
        section.title.as_str()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        section.body.clone(),
        Style::default().fg(theme.text),
    )))
    .block(block)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
