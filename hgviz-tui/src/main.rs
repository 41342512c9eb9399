//! TUI entrypoint: loads a hypergraph and shows it, its layered incidence
//! raster, its dual, properties, tables, and an edit form.
//! Controls: [Tab]/[1-6] switch tabs, [q] Quit (see status bar for more)

mod app;
mod cli;
mod input;
mod session;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use session::Session;
use ui::draw;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEventKind},
    execute, terminal,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

fn init_logging(path: &Path, level: &str) -> Result<()> {
    let level: tracing::Level = level
        .parse()
        .with_context(|| format!("invalid log level '{}'", level))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    // Leave alternate screen and show cursor
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Wait up to `timeout` for a key press.
fn poll_key(timeout: Duration) -> io::Result<Option<KeyCode>> {
    if event::poll(timeout)? {
        if let CEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key.code));
            }
        }
    }
    Ok(None)
}

/// Event loop: draw, wait for a key, dispatch, until the app asks to quit.
fn run<B, K>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration, mut next_key: K) -> Result<()>
where
    B: Backend,
    K: FnMut(Duration) -> io::Result<Option<KeyCode>>,
{
    let mut last_tick = Instant::now();
    while !app.should_quit {
        draw(terminal, app)?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        if let Some(code) = next_key(timeout)? {
            app.on_key(code);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Config and logging come first so failures print to a normal terminal
    let cli = Cli::parse();
    let config = cli.resolve()?;
    init_logging(&config.log_file, &config.log_level)?;
    tracing::info!(?config, "starting hgviz");

    let session = Session::open(config.source.as_deref());
    let mut app = App::new(session);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Ensure terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let outcome = run(&mut terminal, &mut app, tick_rate, poll_key);

    // Cleanup, also when the loop failed
    restore_terminal()?;
    outcome?;
    tracing::info!("hgviz exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgviz_core::HypergraphStore;
    use ratatui::backend::TestBackend;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 30)).unwrap()
    }

    #[test]
    fn loop_stops_on_quit() {
        let mut app = App::new(Session::new(HypergraphStore::new()));
        let mut keys = [KeyCode::Tab, KeyCode::Char('q')].into_iter();
        run(&mut terminal(), &mut app, Duration::ZERO, |_| Ok(keys.next())).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.tab, crate::app::Tab::Layered);
    }

    #[test]
    fn input_error_ends_loop_with_error() {
        let mut app = App::new(Session::new(HypergraphStore::new()));
        let err = run(&mut terminal(), &mut app, Duration::ZERO, |_| {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        })
        .unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
        assert!(!app.should_quit);
    }
}
