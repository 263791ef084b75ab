//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread feeds an mpsc channel; the event loop consumes it,
//! maps keys to actions, runs `update` and re-renders.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::lineup::Lineup;
use crate::types::Button;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('p') => Some(Action::Press(Button::Power)),
        KeyCode::Char('m') => Some(Action::Press(Button::Mute)),

        // Channel
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Press(Button::ChannelUp)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Press(Button::ChannelDown)),

        // Volume
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
            Some(Action::Press(Button::VolumeUp))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
            Some(Action::Press(Button::VolumeDown))
        }

        // Slider positions
        KeyCode::Char(c @ '0'..='4') => Some(Action::SetVolume(c as u8 - b'0')),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Decide which terminal events reach the event loop.
///
/// Only key presses count as button pushes; releases and auto-repeats
/// (reported on some platforms) are dropped. Resizes pass through so the
/// next frame is laid out again. Mouse, focus and paste are ignored.
pub fn forward(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(..) => Some(AppEvent::Resize),
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
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(_) => break,
            };
            if let Some(forwarded) = forward(event) {
                if tx.send(forwarded).is_err() {
                    break; // receiver dropped, TUI is shutting down
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the remote until the user quits.
pub fn run(lineup: Lineup) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(lineup);
    info!("remote started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    apply(&mut app, &action);
                }
            }
            AppEvent::Resize => debug!("terminal resized"),
        }
    }

    info!(final_state = %app.tv, "remote closed");
    restore_terminal()?;
    Ok(())
}

/// Feed one action through `update` and store the result.
fn apply(app: &mut App, action: &Action) {
    let tv = std::mem::take(&mut app.tv);
    match update(tv, action) {
        Transition::Render(tv) => app.tv = tv,
        Transition::Quit => app.should_quit = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
