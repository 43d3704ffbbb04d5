use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use atmention::app::App;
use atmention::config::load_config;
use atmention::{AtMentionError, HttpLookup, SuggestionFetcher};

/// How long to wait for input before checking for lookup answers
const TICK: Duration = Duration::from_millis(50);

/// Compose status updates with @mention autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// People lookup endpoint, overrides the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to use instead of ~/.config/atmention/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.lookup.endpoint = endpoint;
    }
    let lookup = HttpLookup::from_config(&config.lookup).map_err(AtMentionError::from)?;

    if args.print_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    log::info!("Looking up people at {}", config.lookup.endpoint);
    let fetcher = SuggestionFetcher::spawn(Arc::new(lookup));
    let app = App::new(fetcher, &config);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("atmention-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
