use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::theme::Theme;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(64, 31, area);

    let lines = vec![
        Line::from(Span::styled(" Keyboard Shortcuts ", theme.header_style())),
        Line::from(""),
        section_header("Search", theme),
        key_line("/", "Focus the search box", theme),
        key_line("Enter", "Run the search / open suggestion", theme),
        key_line("Tab / \u{2193}", "Next image suggestion", theme),
        key_line("Shift+Tab / \u{2191}", "Previous image suggestion", theme),
        key_line("m", "Toggle all / first match", theme),
        Line::from(""),
        section_header("Results & Details", theme),
        key_line("j / \u{2193}", "Move down (or scroll details)", theme),
        key_line("k / \u{2191}", "Move up", theme),
        key_line("g / G", "Go to top / bottom", theme),
        key_line("Enter", "Show the selected record", theme),
        key_line("Tab", "Switch results / details", theme),
        key_line("h", "Back to the welcome panel", theme),
        Line::from(""),
        section_header("Menus", theme),
        key_line("1-9", "Open / close a menu", theme),
        key_line("Enter", "Show the highlighted section", theme),
        key_line("Esc", "Close menu / hide section", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("?", "Toggle this help", theme),
        key_line("Ctrl+s", "Save theme and search settings", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
        Line::from(""),
        section_header("Mouse", theme),
        key_line("Click", "Menus, items, results, suggestions", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<20}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
