//! utd_tui - Interactive planner for Universal Tower Defense

mod app;
mod cli;
mod clipboard;
mod forms;
mod logging;
mod ui;

use app::{App, Tab};
use clipboard::Osc52Clipboard;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use utd_core::{
    config::{load_catalog, load_codes, load_limits},
    default_catalog, default_codes, ToolLimits,
};

fn main() -> io::Result<()> {
    let args = cli::parse_args();

    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _guard = logging::setup_logging(&log_dir)?;

    let limits = match &args.config {
        Some(path) => load_limits(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "using default limits");
            ToolLimits::default()
        }),
        None => ToolLimits::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "using built-in catalog");
            default_catalog()
        }),
        None => default_catalog(),
    };
    let codes = match &args.codes {
        Some(path) => load_codes(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "using built-in codes");
            default_codes()
        }),
        None => default_codes(),
    };
    info!(units = catalog.len(), codes = codes.active.len(), "starting planner");

    let mut app = App::new(limits, catalog, codes, Box::new(Osc52Clipboard::stdout()));
    if let Some(seed) = args.seed {
        app = app.with_seed(seed);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "planner exited with an error");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !handle_key(app, key) {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }
    info!("planner closed");
    Ok(())
}

/// Returns false when the app should quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return false;
    }

    if app.editing {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Char(c) => app.on_char(c),
            KeyCode::Tab => {
                app.stop_editing();
                app.on_down();
            }
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='6') => app.set_tab(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => app.on_up(),
        KeyCode::Down | KeyCode::Char('j') => app.on_down(),
        KeyCode::Left | KeyCode::Char('h') => app.on_left(),
        KeyCode::Right | KeyCode::Char('l') => app.on_right(),
        KeyCode::Enter => app.on_enter(),
        KeyCode::Char('c') => app.copy_current(),
        KeyCode::Char('J') => app.copy_team_json(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('s') => app.sample_dps(),
        KeyCode::PageUp => app.on_page_up(),
        KeyCode::PageDown => app.on_page_down(),
        KeyCode::Char('?') => app.set_tab(Tab::all().len() - 1),
        _ => {}
    }
    true
}
