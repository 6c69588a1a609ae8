use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mcuwatch::{events, logging, poll_once, ui, App, DataSource, HttpSource, Settings};

/// How often the UI loop wakes up to drain poll results and redraw.
const UI_TICK: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "mcuwatch")]
#[command(about = "Terminal status monitor for a microcontroller bridge")]
struct Args {
    /// Bridge base URL (GET <endpoint>/data)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval in milliseconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Lowest temperature shown as warm
    #[arg(long)]
    warm_at: Option<f64>,

    /// Highest temperature shown as warm; anything above is hot
    #[arg(long)]
    hot_above: Option<f64>,

    /// Render bodies of non-success responses when they parse
    /// (`--accept-error-bodies=false` turns a configured value off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    accept_error_bodies: Option<bool>,

    /// Poll once, print the rendered elements as JSON and exit
    #[arg(long)]
    once: bool,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Apply command-line values on top of file/environment settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(ref endpoint) = self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(refresh) = self.refresh {
            settings.refresh_ms = refresh;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_ms = timeout;
        }
        if let Some(warm_at) = self.warm_at {
            settings.warm_at = warm_at;
        }
        if let Some(hot_above) = self.hot_above {
            settings.hot_above = hot_above;
        }
        if let Some(accept) = self.accept_error_bodies {
            settings.accept_error_bodies = accept;
        }
        if let Some(ref log_file) = self.log_file {
            settings.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    // Handle one-shot mode (non-interactive)
    if args.once {
        logging::init_stderr()?;
        return run_once(&settings);
    }

    if let Some(ref path) = settings.log_file {
        logging::init_file(path)?;
    }

    run_with_http(&settings)
}

/// Poll a single time and print the rendered elements.
fn run_once(settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let display = rt.block_on(poll_once(settings))?;

    println!("{}", serde_json::to_string_pretty(&display)?);
    Ok(())
}

/// Run the TUI against the bridge's HTTP endpoint
fn run_with_http(settings: &Settings) -> Result<()> {
    // The poll loop runs on this runtime while the TUI owns the main thread
    let rt = tokio::runtime::Runtime::new()?;
    let client = settings.client()?;
    let source = HttpSource::start(client, settings.refresh(), rt.handle().clone());

    run_tui(Box::new(source), settings)
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, settings: &Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source, settings.thresholds());

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.reload_data();

        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(Event::Key(key)) = events::poll_event(UI_TICK)? {
            events::handle_key_event(app, key);
        }
    }

    Ok(())
}
