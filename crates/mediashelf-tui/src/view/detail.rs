use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, Focus};
use crate::theme::Theme;

/// The active detail panel: a record, or the default welcome panel.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    let panel_id = match app.active_record() {
        Some(record) => {
            lines.push(Line::from(Span::styled(
                record.title.clone(),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            push_field(&mut lines, "Author", &record.author, theme);
            push_field(&mut lines, "Date", &record.date, theme);
            push_field(&mut lines, "Type", &record.kind, theme);
            push_field(&mut lines, "Category", &record.category, theme);
            record.detail_id.as_str()
        }
        None => {
            let panel = app.session.catalog().default_panel();
            lines.push(Line::from(Span::styled(
                panel.title.clone(),
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            if !panel.body.is_empty() {
                lines.push(Line::from(Span::styled(
                    panel.body.clone(),
                    Style::default().fg(theme.text),
                )));
            }
            panel.id.as_str()
        }
    };

    let border = if app.is_revealing() {
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD)
    } else if app.focus == Focus::Detail {
        theme.focused_border_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {panel_id} "));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}

fn push_field<'a>(lines: &mut Vec<Line<'a>>, label: &'a str, value: &str, theme: &Theme) {
    if value.is_empty() {
        return;
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(theme.dim)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ]));
}
