//! Sidenav — terminal sidebar navigator over a lazily loaded hierarchy.
//!
//! Left column: breadcrumb header, paged item list, footer.
//! Right column: details of the selected item.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sidenav_core::{DataSource, MockSource, Sidebar, SidebarConfig};
use sidenav_tui::app::AppState;
use sidenav_tui::worker::{self, WorkerCommand};
use sidenav_tui::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(name = "sidenav", version, about = "Browse a lazily loaded hierarchy in the terminal")]
struct Args {
    /// Config file (defaults to <config_dir>/sidenav/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the generated hierarchy
    #[arg(long)]
    seed: Option<u64>,

    /// Disable simulated network latency
    #[arg(long)]
    instant: bool,

    /// Log file (defaults to <cache_dir>/sidenav/sidenav.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `sidenav_core=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = SidebarConfig::from_file_or_default(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    if let Some(seed) = args.seed {
        config.source.seed = Some(seed);
    }
    if args.instant {
        config.source = config.source.instant();
    }

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path, args.log_level.as_deref())?;
    tracing::info!(config = %config_path.display(), "starting sidenav");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Data source and controller
    let page_size = config.source.page_size;
    let source: Arc<dyn DataSource> = Arc::new(MockSource::new(config.source.clone()));
    let sidebar = Sidebar::new(source.root_items(), config.navigation.clone());

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(
        Arc::clone(&source),
        page_size,
        config.worker.threads,
        cmd_rx,
        resp_tx,
    )?;

    let mut app = AppState::new(sidebar, cmd_tx.clone(), resp_rx);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    if worker_handle.join().is_err() {
        tracing::warn!("worker thread panicked");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    tracing::info!("sidenav stopped");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        app.drain_worker(Instant::now());

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, Instant::now()),
                _ => {}
            }
        }

        // 4. Timers: hover prefetch, pulse fade, spinners
        app.tick(Instant::now());
        app.sync_viewport();

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sidenav")
        .join("config.toml")
}
