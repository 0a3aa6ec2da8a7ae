use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediashelf_core::config_file::{self, CATALOG_ENV, Settings};
use mediashelf_core::{
    Catalog, CoreError, DetailPanelController, ImageAutocomplete, MatchMode, SearchSession,
    SiteDefinition, html,
};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Mediashelf - search and browse a small media catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a site definition JSON file (overrides MEDIASHELF_CATALOG and config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search titles and authors (case-insensitive substring)
    Search {
        /// Search text; blank input prompts for a term
        query: String,

        /// Only return the first match (same as `--match-mode first`)
        #[arg(long, conflicts_with = "match_mode")]
        first: bool,

        /// Which matches to return: all or first (overrides config)
        #[arg(long, value_parser = parse_match_mode)]
        match_mode: Option<MatchMode>,

        /// Print the results container as escaped HTML
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the render result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail panel for a record (or the default panel)
    Show {
        /// Detail panel id, e.g. B-1965-013
        #[arg(required_unless_present = "title")]
        detail_id: Option<String>,

        /// Look the record up by its exact title instead (case-insensitive)
        #[arg(long, conflicts_with = "detail_id")]
        title: Option<String>,

        /// Print the panel as escaped HTML
        #[arg(long)]
        html: bool,
    },

    /// List catalog records
    List {
        /// Only records in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// List the distinct categories instead of records
        #[arg(long, conflicts_with = "category")]
        categories: bool,
    },

    /// Suggest images whose name contains the query
    Images {
        query: String,

        /// Print thumbnails as escaped HTML
        #[arg(long)]
        html: bool,
    },
}

fn parse_match_mode(s: &str) -> Result<MatchMode, String> {
    MatchMode::parse(s).ok_or_else(|| format!("unknown match mode {s:?} (expected all or first)"))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let settings = config_file::load_config().settings();
    let catalog_path = config_file::resolve_catalog_path(
        cli.catalog.clone(),
        std::env::var_os(CATALOG_ENV),
        &settings,
    );

    let site = SiteDefinition::load(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(p) => format!("failed to load site definition from {}", p.display()),
        None => "failed to load the built-in site definition".to_string(),
    })?;

    let color = ColorMode(!cli.no_color);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Search {
            query,
            first,
            match_mode,
            html: as_html,
            json,
        } => {
            let mode = if first {
                MatchMode::First
            } else {
                match_mode.unwrap_or(settings.match_mode)
            };
            search(&mut stdout, site, mode, &query, as_html, json, color)
        }
        Command::Show {
            detail_id,
            title,
            html: as_html,
        } => {
            let id = show_target(&site.catalog, detail_id, title.as_deref())?;
            show(&mut stdout, site, &settings, &id, as_html, color)
        }
        Command::List {
            category,
            categories,
        } => list(&mut stdout, &site, category.as_deref(), categories, color),
        Command::Images { query, html: as_html } => {
            images(&mut stdout, site, &settings, &query, as_html, color)
        }
    }
}

fn search(
    w: &mut dyn Write,
    site: SiteDefinition,
    mode: MatchMode,
    query: &str,
    as_html: bool,
    json: bool,
    color: ColorMode,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(site.catalog, mode)?;
    let outcome = session.search(query);

    if json {
        serde_json::to_writer_pretty(&mut *w, &outcome.result)?;
        writeln!(w)?;
    } else if as_html {
        write!(w, "{}", html::render_results(&outcome.result))?;
    } else {
        output::print_results(w, &outcome.result, color)?;
    }
    Ok(())
}

/// The panel id `show` should open: the positional id, or the record whose
/// whole title matches `--title`.
fn show_target(
    catalog: &Catalog,
    detail_id: Option<String>,
    title: Option<&str>,
) -> anyhow::Result<String> {
    match (detail_id, title) {
        (Some(id), _) => Ok(id),
        (None, Some(title)) => catalog
            .find_by_title_exact(title)
            .map(|r| r.detail_id.clone())
            .with_context(|| format!("no record titled {title:?}; try `mediashelf search`")),
        (None, None) => anyhow::bail!("give a detail panel id or --title"),
    }
}

fn show(
    w: &mut dyn Write,
    site: SiteDefinition,
    settings: &Settings,
    detail_id: &str,
    as_html: bool,
    color: ColorMode,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(site.catalog, settings.match_mode)?;
    match session.show_detail(detail_id) {
        Ok(_) => {}
        Err(CoreError::MissingPanel(id)) => {
            anyhow::bail!("no record or panel with id {id:?}; try `mediashelf list`")
        }
        Err(e) => return Err(e.into()),
    }

    match session.active_record() {
        Some(record) if as_html => write!(w, "{}", html::render_detail_panel(record, true))?,
        Some(record) => output::print_record(w, record, color)?,
        None => {
            let panel = session.catalog().default_panel();
            if as_html {
                write!(w, "{}", html::render_default_panel(panel, true))?;
            } else {
                output::print_default_panel(w, panel, color)?;
            }
        }
    }
    Ok(())
}

fn list(
    w: &mut dyn Write,
    site: &SiteDefinition,
    category: Option<&str>,
    categories: bool,
    color: ColorMode,
) -> anyhow::Result<()> {
    let catalog = &site.catalog;
    if categories {
        for c in catalog.categories() {
            writeln!(w, "{c}")?;
        }
        return Ok(());
    }

    let records: Vec<_> = match category {
        Some(c) => catalog.by_category(c),
        None => catalog.all().iter().collect(),
    };
    if records.is_empty() {
        if let Some(c) = category {
            tracing::info!(category = c, "no records in category");
            writeln!(w, "No records in category \"{c}\".")?;
        }
        return Ok(());
    }
    for r in records {
        output::print_catalog_row(w, r, color)?;
    }
    Ok(())
}

fn images(
    w: &mut dyn Write,
    site: SiteDefinition,
    settings: &Settings,
    query: &str,
    as_html: bool,
    color: ColorMode,
) -> anyhow::Result<()> {
    if !settings.autocomplete {
        tracing::warn!("image autocomplete is disabled in config");
        return Ok(());
    }
    let panels = DetailPanelController::for_catalog(&site.catalog)?;
    let autocomplete = ImageAutocomplete::new(site.images);
    let suggestions = autocomplete.suggest(query);
    if as_html {
        write!(w, "{}", html::render_suggestions(&suggestions))?;
    } else {
        output::print_suggestions(w, &suggestions, &panels, color)?;
    }
    Ok(())
}
