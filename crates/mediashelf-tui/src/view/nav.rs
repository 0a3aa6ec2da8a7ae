use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::App;

const BRAND: &str = " MEDIASHELF ";

/// Top bar: brand plus one clickable title per menu.
pub fn render_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let mut hits = Vec::with_capacity(app.navigation.menus.len());
    let mut x = area.x + BRAND.len() as u16 + 1;
    for (i, menu) in app.navigation.menus.iter().enumerate() {
        let width = menu_label(i, &menu.label).chars().count() as u16;
        if x >= area.right() {
            break;
        }
        let clipped = width.min(area.right() - x);
        hits.push((i, Rect::new(x, area.y, clipped, 1)));
        x = x.saturating_add(width + 1);
    }
    app.menu_hits = hits;
    app.nav_area = Some(area);

    let theme = &app.theme;
    let mut spans = vec![Span::styled(BRAND, theme.header_style()), Span::raw(" ")];
    for (i, menu) in app.navigation.menus.iter().enumerate() {
        let style = if app.nav.is_open(&menu.id) {
            theme.highlight_style().fg(theme.active)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(menu_label(i, &menu.label), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn menu_label(index: usize, label: &str) -> String {
    format!("[{}] {label} \u{25be}", index + 1)
}

/// The open dropdown, drawn under its menu title on top of the body.
pub fn render_dropdown(f: &mut Frame, app: &mut App, body: Rect) {
    let Some(menu_index) = app.open_menu_index() else {
        app.dropdown_area = None;
        return;
    };
    let anchor_x = app
        .menu_hits
        .iter()
        .find(|(i, _)| *i == menu_index)
        .map(|(_, r)| r.x)
        .unwrap_or(body.x);

    let menu = &app.navigation.menus[menu_index];
    let inner_width = menu
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let width = (inner_width + 2).min(body.right().saturating_sub(anchor_x));
    let height = (menu.items.len() as u16 + 2).min(body.height);
    let area = Rect::new(anchor_x, body.y, width, height);
    if width < 3 || height < 3 {
        app.dropdown_area = None;
        return;
    }

    let theme = &app.theme;
    let items: Vec<ListItem> = menu
        .items
        .iter()
        .map(|item| {
            let visible = app.nav.is_visible(&item.target);
            let marker = if visible { "\u{25cf} " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.active)),
                Span::styled(item.label.clone(), Style::default().fg(theme.text)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.focused_border_style())
                .title(Span::styled(
                    format!(" {} ", menu.label),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(theme.highlight_style());
    let mut state = ListState::default().with_selected(Some(app.dropdown_cursor));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
    app.dropdown_area = Some(area);
}
