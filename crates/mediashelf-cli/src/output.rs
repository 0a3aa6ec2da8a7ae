use std::io::Write;

use mediashelf_core::{
    ClickTarget, DefaultPanel, DetailPanelController, ImageEntry, Record, RenderResult,
};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a search result as plain (optionally colored) text.
pub fn print_results(
    w: &mut dyn Write,
    result: &RenderResult,
    color: ColorMode,
) -> std::io::Result<()> {
    match result {
        RenderResult::EmptyQueryPrompt | RenderResult::NoResults { .. } => {
            if color.enabled() {
                writeln!(w, "{}", result.message().italic().dimmed())?;
            } else {
                writeln!(w, "{}", result.message())?;
            }
        }
        RenderResult::Results { items, .. } => {
            if color.enabled() {
                writeln!(w, "{}", result.message().bold())?;
            } else {
                writeln!(w, "{}", result.message())?;
            }
            writeln!(w)?;
            for item in items {
                let by = if item.author.is_empty() {
                    String::new()
                } else {
                    format!(" by {}", item.author)
                };
                if color.enabled() {
                    writeln!(
                        w,
                        "  {}{} ({})  {}",
                        item.title.green(),
                        by,
                        item.category,
                        format!("[{}]", item.detail_id).dimmed()
                    )?;
                } else {
                    writeln!(
                        w,
                        "  {}{} ({})  [{}]",
                        item.title, by, item.category, item.detail_id
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn labeled(w: &mut dyn Write, label: &str, value: &str, color: ColorMode) -> std::io::Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if color.enabled() {
        writeln!(w, "  {:<10}{}", format!("{label}:").dimmed(), value)
    } else {
        writeln!(w, "  {:<10}{}", format!("{label}:"), value)
    }
}

/// Print the full record shown in a detail panel.
pub fn print_record(w: &mut dyn Write, record: &Record, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", record.title.bold())?;
    } else {
        writeln!(w, "{}", record.title)?;
    }
    labeled(w, "Author", &record.author, color)?;
    labeled(w, "Date", &record.date, color)?;
    labeled(w, "Type", &record.kind, color)?;
    labeled(w, "Category", &record.category, color)?;
    labeled(w, "Panel", &record.detail_id, color)?;
    Ok(())
}

pub fn print_default_panel(
    w: &mut dyn Write,
    panel: &DefaultPanel,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", panel.title.bold())?;
    } else {
        writeln!(w, "{}", panel.title)?;
    }
    if !panel.body.is_empty() {
        writeln!(w, "  {}", panel.body)?;
    }
    Ok(())
}

/// Print one catalog row for `list`.
pub fn print_catalog_row(w: &mut dyn Write, record: &Record, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{:<22} {} ({}, {})",
            record.detail_id.dimmed(),
            record.title,
            record.kind.cyan(),
            record.date
        )
    } else {
        writeln!(
            w,
            "{:<22} {} ({}, {})",
            record.detail_id, record.title, record.kind, record.date
        )
    }
}

/// Print image suggestions with where each one leads. Anchors that name a
/// known detail panel are reported as that panel.
pub fn print_suggestions(
    w: &mut dyn Write,
    images: &[&ImageEntry],
    panels: &DetailPanelController,
    color: ColorMode,
) -> std::io::Result<()> {
    if images.is_empty() {
        return Ok(());
    }
    for img in images {
        let target = match img.click_target().prefer_panel(|id| panels.contains(id)) {
            ClickTarget::Panel(id) => format!("panel {id}"),
            ClickTarget::Anchor(id) => format!("anchor #{id}"),
            ClickTarget::External(url) => url,
            ClickTarget::None => "-".to_string(),
        };
        if color.enabled() {
            writeln!(w, "  {} {} {}", img.name.green(), "->".dimmed(), target)?;
        } else {
            writeln!(w, "  {} -> {}", img.name, target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediashelf_core::render::ResultItem;

    fn plain(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_results_plain() {
        let result = RenderResult::Results {
            query_raw: "dune".to_string(),
            items: vec![ResultItem {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                category: "Science Fiction".to_string(),
                detail_id: "B-1965-013".to_string(),
            }],
        };
        let out = plain(|w| print_results(w, &result, ColorMode(false)));
        assert!(out.starts_with("1 result for \"dune\"\n"));
        assert!(out.contains("  Dune by Frank Herbert (Science Fiction)  [B-1965-013]"));
    }

    #[test]
    fn test_print_prompt_plain() {
        let out = plain(|w| print_results(w, &RenderResult::EmptyQueryPrompt, ColorMode(false)));
        assert_eq!(out, "Please enter a search term.\n");
    }

    #[test]
    fn test_print_record_skips_empty_fields() {
        let record = Record {
            title: "Time Magazine".to_string(),
            author: String::new(),
            date: "2023".to_string(),
            kind: "Magazine".to_string(),
            category: "News".to_string(),
            detail_id: "detail-time".to_string(),
        };
        let out = plain(|w| print_record(w, &record, ColorMode(false)));
        assert!(!out.contains("Author:"));
        assert!(out.contains("Date:     2023"));
    }

    #[test]
    fn test_print_suggestions_targets() {
        let panel = ImageEntry {
            name: "The Martian".to_string(),
            src: "martian.jpg".to_string(),
            link: "#detail-martian".to_string(),
        };
        let external = ImageEntry {
            name: "Moby Dick".to_string(),
            src: "moby.jpg".to_string(),
            link: "https://example.org/moby".to_string(),
        };
        let anchored = ImageEntry {
            name: "Dune".to_string(),
            src: "dune.jpg".to_string(),
            link: "#B-1965-013".to_string(),
        };
        let section = ImageEntry {
            name: "Magazine Rack".to_string(),
            src: "magazines.jpg".to_string(),
            link: "#section-magazines".to_string(),
        };
        let panels = DetailPanelController::new(
            ["detail-default", "detail-martian", "B-1965-013"],
            "detail-default",
        )
        .unwrap();
        let out = plain(|w| {
            print_suggestions(
                w,
                &[&panel, &anchored, &section, &external],
                &panels,
                ColorMode(false),
            )
        });
        assert!(out.contains("The Martian -> panel detail-martian"));
        assert!(out.contains("Dune -> panel B-1965-013"));
        assert!(out.contains("Magazine Rack -> anchor #section-magazines"));
        assert!(out.contains("Moby Dick -> https://example.org/moby"));
    }
}
