use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use mediashelf_core::config_file::{self, CATALOG_ENV};
use mediashelf_core::{MatchMode, SiteDefinition};

mod action;
mod app;
mod input;
mod model;
mod theme;
mod view;

use action::Action;
use app::App;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a site definition JSON file (overrides MEDIASHELF_CATALOG and config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Color theme: hacker or modern
    #[arg(long)]
    theme: Option<String>,

    /// Show only the first match per search
    #[arg(long)]
    first: bool,

    /// Disable image suggestions while typing
    #[arg(long)]
    no_autocomplete: bool,
}

/// Log to a daily file under the cache directory; stdout belongs to the UI.
/// Returns the guard that flushes the writer on drop, or `None` when no
/// cache directory is available.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = dirs::cache_dir()?.join("mediashelf").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "mediashelf-tui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();
    Some(guard)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    // Resolve configuration: CLI args > env vars > config file > defaults
    let mut settings = config_file::load_config().settings();
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if args.first {
        settings.match_mode = MatchMode::First;
    }
    if args.no_autocomplete {
        settings.autocomplete = false;
    }
    let catalog_path =
        config_file::resolve_catalog_path(args.catalog, std::env::var_os(CATALOG_ENV), &settings);

    let site = SiteDefinition::load(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(p) => format!("failed to load site definition from {}", p.display()),
        None => "failed to load the built-in site definition".to_string(),
    })?;
    tracing::info!(
        records = site.catalog.len(),
        images = site.images.len(),
        menus = site.navigation.menus.len(),
        "site loaded"
    );

    let theme = theme::Theme::by_name(&settings.theme);
    let mut app = App::new(site, &settings, theme)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray events (e.g. terminal capability responses)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let result = run(&mut terminal, &mut app, settings.fps);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fps: u32,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(1000 / u64::from(fps.max(1)));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.view(f))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let evt = event::read()?;
            let action = input::map_event(&evt, &app.input_mode);
            if app.update(action) {
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.update(Action::Tick);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
