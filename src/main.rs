use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use skywatch::data::format::parse_interval;
use skywatch::ui::Theme;
use skywatch::{
    events, ui, write_snapshot, App, DashboardController, DashboardState, MockWeatherSource,
    Overrides, Settings, TimeWindow, WeatherSource,
};

/// How long a one-shot snapshot waits for the first response.
const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(30);

/// Redraw cadence of the terminal UI.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "skywatch")]
#[command(about = "Terminal dashboard for city weather readings, trends and alerts")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Weather backend base URL
    #[arg(short, long, conflicts_with = "demo")]
    endpoint: Option<String>,

    /// City to show first
    #[arg(long)]
    city: Option<String>,

    /// Chart window: 24h, 5d, 15d or 30d
    #[arg(short, long)]
    window: Option<TimeWindow>,

    /// Readings poll interval (e.g., "5m", "300s", "300")
    #[arg(long, value_parser = parse_interval)]
    readings_interval: Option<Duration>,

    /// Alerts poll interval (e.g., "1m", "60")
    #[arg(long, value_parser = parse_interval)]
    alerts_interval: Option<Duration>,

    /// Use synthetic data instead of a backend
    #[arg(long)]
    demo: bool,

    /// Append logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch once, write the view as JSON to this file and exit
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply(Overrides {
        endpoint: args.endpoint.clone(),
        window: args.window,
        readings_interval: args.readings_interval,
        alerts_interval: args.alerts_interval,
    })?;

    let source = build_source(&args, &settings)?;
    let description = source.description().to_string();
    tracing::info!(source = %description, cities = settings.cities.len(), "Starting");

    let dashboard = DashboardController::new(source, settings.dashboard_options(args.city.clone()))?;

    // Polling tasks run on this runtime; the UI loop drives it between frames.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if let Some(ref path) = args.snapshot {
        return rt.block_on(export_snapshot(dashboard, path));
    }

    rt.block_on(run_tui(App::new(dashboard, &description, Theme::auto_detect())))
}

/// Route tracing output to `path`, filtered by `RUST_LOG` (default `skywatch=info`).
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skywatch=info,skywatch_adapters=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_source(args: &Args, settings: &Settings) -> Result<Arc<dyn WeatherSource>> {
    if args.demo {
        return Ok(Arc::new(MockWeatherSource::new(settings.cities.clone())));
    }
    http_source(settings)
}

#[cfg(feature = "http")]
fn http_source(settings: &Settings) -> Result<Arc<dyn WeatherSource>> {
    let source = skywatch::HttpWeatherSource::builder()
        .endpoint(settings.endpoint.clone())
        .timeout(settings.request_timeout)
        .build()?;
    Ok(Arc::new(source))
}

#[cfg(not(feature = "http"))]
fn http_source(_settings: &Settings) -> Result<Arc<dyn WeatherSource>> {
    bail!("Built without the `http` feature; run with --demo")
}

/// Wait for the first settled response and write the view as JSON.
async fn export_snapshot(mut dashboard: DashboardController, path: &Path) -> Result<()> {
    dashboard.start();

    let settled = tokio::time::timeout(SNAPSHOT_TIMEOUT, async {
        while dashboard.next_update().await {
            if matches!(dashboard.state(), DashboardState::Ready | DashboardState::Error) {
                return true;
            }
        }
        false
    })
    .await;

    match settled {
        Ok(true) => {}
        Ok(false) => bail!("Polling stopped before any data arrived"),
        Err(_) => bail!("No response within {}s", SNAPSHOT_TIMEOUT.as_secs()),
    }

    dashboard.stop();
    let view = dashboard.view();
    write_snapshot(&view, path)?;

    match view.error_state {
        Some(kind) => eprintln!(
            "Wrote {} ({} for {})",
            path.display(),
            kind.label(),
            view.selected_city
        ),
        None => println!(
            "Wrote {} ({} readings for {})",
            path.display(),
            view.summary.sample_count,
            view.selected_city
        ),
    }
    Ok(())
}

/// Run the terminal UI until the user quits.
async fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    app.dashboard.start();
    let result = run_app(&mut terminal, &mut app).await;
    app.dashboard.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        app.refresh();
        terminal.draw(|frame| ui::render(frame, app))?;

        // Drain input without blocking so polling tasks keep running
        while let Some(event) = events::poll_event(Duration::ZERO)? {
            if let Event::Key(key) = event {
                events::handle_key_event(app, key);
            }
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    Ok(())
}
