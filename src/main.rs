use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use mealpick::app::App;
use mealpick::config::load_config;
use mealpick::logging;

/// Suggest a meal for the time of day
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a config file (default: ~/.config/mealpick/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to the cache directory
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let logging_warning = logging::init_logging(args.debug);

    let config_result = load_config(args.config.as_deref());

    let mut app = App::new(&config_result.config);
    let warnings: Vec<String> = [logging_warning, config_result.warning]
        .into_iter()
        .flatten()
        .collect();
    if !warnings.is_empty() {
        app.show_warning(&warnings.join(" "));
    }

    log::debug!("Activity created");

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Pasted text arrives as one event, so a trailing newline can't submit
    let result = execute!(io::stdout(), EnableBracketedPaste)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, &mut app));

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }

    Ok(())
}
