use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use mediashelf_core::{ClickTarget, RenderResult};

use super::truncate;
use crate::app::{App, Focus, InputMode};

/// Left pane: search box, image suggestions, and the result list.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let suggestion_rows = app.suggestions.items.len() as u16;
    let suggestion_height = if suggestion_rows > 0 {
        suggestion_rows + 2
    } else {
        0
    };
    let [input_area, suggestions_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(suggestion_height),
        Constraint::Min(3),
    ])
    .areas(area);

    render_input(f, app, input_area);

    if suggestion_height > 0 {
        render_suggestions(f, app, suggestions_area);
        app.suggestions_area = Some(suggestions_area);
    } else {
        app.suggestions_area = None;
    }

    render_results(f, app, results_area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Search;
    let mut spans = vec![Span::styled(
        app.search_query.clone(),
        Style::default().fg(theme.text),
    )];
    if editing {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(theme.active),
        ));
    } else if app.search_query.is_empty() {
        spans.push(Span::styled(
            "press / to search titles and authors",
            Style::default().fg(theme.dim),
        ));
    }
    let border = if editing {
        theme.focused_border_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Search ");
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .suggestions
        .items
        .iter()
        .map(|img| {
            let hint = match img.click_target() {
                ClickTarget::Panel(_) | ClickTarget::Anchor(_) => "",
                ClickTarget::External(_) => " \u{2197}",
                ClickTarget::None => " -",
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate(&img.name, width.saturating_sub(hint.len())),
                    Style::default().fg(theme.title),
                ),
                Span::styled(hint, Style::default().fg(theme.dim)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Images "),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(app.suggestions.cursor);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_results(f: &mut Frame, app: &mut App, area: Rect) {
    app.results_area = Some(area);
    let border = if app.focus == Focus::Results && app.input_mode == InputMode::Normal {
        app.theme.focused_border_style()
    } else {
        app.theme.border_style()
    };

    let result = match &app.results.result {
        Some(RenderResult::Results { .. }) => None,
        Some(other) => Some(other.message()),
        None => Some("Type / then a title or author, and press Enter.".to_string()),
    };
    if let Some(message) = result {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Results ");
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        app.results_offset = 0;
        return;
    }

    let theme = &app.theme;
    let width = area.width.saturating_sub(4) as usize;
    let header = app
        .results
        .result
        .as_ref()
        .map(|r| format!(" {} ", r.message()))
        .unwrap_or_default();
    let items: Vec<ListItem> = app
        .results
        .items()
        .iter()
        .map(|item| {
            let mut spans = vec![Span::styled(
                truncate(&item.title, width),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )];
            if !item.author.is_empty() {
                spans.push(Span::styled(" by ", Style::default().fg(theme.dim)));
                spans.push(Span::styled(
                    item.author.clone(),
                    Style::default().fg(theme.author),
                ));
            }
            if !item.category.is_empty() {
                spans.push(Span::styled(
                    format!(" ({})", item.category),
                    Style::default().fg(theme.category),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(header),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.results.cursor));
    f.render_stateful_widget(list, area, &mut state);
    app.results_offset = state.offset();
}
