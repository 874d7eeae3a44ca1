//! monster - Terminal front end for the monster evolution game

mod app;
mod logging;
mod settings;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use monster_core::{Action, RngSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::Settings;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "monster", version, about = "Raise a monster: train it, rest it, send it to battle")]
struct Cli {
    /// Settings file (defaults to ./monster.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible session, overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not write a log file
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if cli.no_log {
        settings.logging.enabled = false;
    }
    let _log_guard = logging::init(&settings.logging)?;

    let seed = cli.seed.or(settings.seed);
    let source = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    tracing::info!(?seed, "starting session");
    let mut app = App::with_source(source);

    // Setup terminal
    enable_raw_mode().context(
        "cannot enable raw mode; run the game directly in a terminal, not piped",
    )?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        actions = app.actions_taken,
        level = app.snapshot().level,
        "session ended"
    );
    result.context("terminal error")
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            // Any other key acknowledges the open notice
            _ if app.has_notice() => app.dismiss_notice(),
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) | (KeyCode::Char('?'), _) => app.set_tab(2),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Char('t'), _) => app.perform(Action::Train),
            (KeyCode::Char('r'), _) => app.perform(Action::Rest),
            (KeyCode::Char('b'), _) => app.perform(Action::Battle),
            _ => {}
        }
    }

    Ok(())
}
