//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! The loop is single-threaded and blocks on the event source directly.
//! Every state mutation happens synchronously between one read and the
//! next draw; there is no background producer to multiplex.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, Focus};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The current focus decides the mapping: while the input is focused,
/// printable keys are text ('q' included); while the list is focused,
/// they are commands. Returns None for keys that map to nothing.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match focus {
        Focus::Input => map_input_key(key),
        Focus::List => map_list_key(key),
    }
}

fn map_input_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        // Enter is the "done" action; Alt+Enter inserts a newline
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => Some(Action::InsertNewline),
        KeyCode::Enter => Some(Action::Submit),

        KeyCode::Backspace => Some(Action::DeleteBack),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::CaretLeft),
        KeyCode::Right => Some(Action::CaretRight),
        KeyCode::Home => Some(Action::CaretHome),
        KeyCode::End => Some(Action::CaretEnd),

        KeyCode::Tab | KeyCode::Down => Some(Action::FocusList),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::InsertChar(c))
        }

        _ => None,
    }
}

fn map_list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),

        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => Some(Action::DeleteGoal),

        KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc | KeyCode::Enter => {
            Some(Action::FocusInput)
        }

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// then alternates draw and blocking read: every key press maps to at
/// most one action, applied before the next draw reads the state.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key, app.focus) {
                    update(&mut app, &action);
                }
            }
            // Resize and the rest just wake the loop for a redraw
            _ => {}
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
