use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

use tapline::{
    config::{Config, ConfigStore, FileConfigStore},
    engine::{SessionEngine, State},
    glyph::GlyphTable,
    render::{CrosstermRenderer, Renderer},
    runtime::{CrosstermKeySource, KeystrokeSource},
    stats::Report,
    terminal::RawModeGuard,
    text::TextModel,
};

/// line-by-line typing practice against a text file
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Presents a text file one line at a time and scores every keystroke: correct characters turn green, mistakes red, backspace walks back across lines, and a report with accuracy and words-per-minute is printed at the end."
)]
struct Cli {
    /// path of the text file to practice against
    file: PathBuf,

    /// print whitespace literally instead of substituting visible glyphs
    #[clap(long)]
    plain: bool,

    /// skip appending this session's report to the results log
    #[clap(long)]
    no_log: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let text = TextModel::from_path(&cli.file)?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = FileConfigStore::from_project_dirs()
        .map(|store| store.load())
        .unwrap_or_else(Config::default);

    let glyphs = if cli.plain || !config.show_whitespace_glyphs {
        GlyphTable::plain()
    } else {
        GlyphTable::with_whitespace_glyphs()
    };

    let mut engine = SessionEngine::new(text, glyphs);
    let report = run_session(&mut engine)?;

    println!("{report}");

    if config.log_results && !cli.no_log {
        let _ = report.append_to_log();
    }

    Ok(())
}

/// Raw mode is scoped to this function: the guard restores the terminal
/// before the report is printed, whatever path we leave on.
fn run_session(engine: &mut SessionEngine) -> Result<Report, Box<dyn Error>> {
    let _raw = RawModeGuard::new()?;
    let mut renderer = CrosstermRenderer::new(io::stdout());
    let mut keys = CrosstermKeySource::new();

    engine.begin(&mut renderer)?;
    renderer.flush()?;

    loop {
        let Some(c) = keys.next_key()? else {
            // end of input stream (Esc/Ctrl-C): report whatever was typed
            break;
        };
        let state = engine.key(c, &mut renderer)?;
        renderer.flush()?;
        if state == State::SessionComplete {
            break;
        }
    }

    renderer.newline()?;
    renderer.flush()?;

    Ok(engine.finish())
}
