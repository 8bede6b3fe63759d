//! Key mapping from terminal events to dice events and loop commands.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions owned by the outer loop rather than the dice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll every unlocked die.
    Roll,
    /// Unlock everything and start a fresh turn.
    NewTurn,
    /// Write the game state to the save file.
    Save,
}

/// Map a key to a dice-set event.
///
/// Total: keys without a dice binding become `Char` (printable) or `Redraw`.
pub fn dice_event(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            InputEvent::MovePrevious
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            InputEvent::MoveNext
        }
        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        KeyCode::Char(c) => InputEvent::Char(c),
        _ => InputEvent::Redraw,
    }
}

/// Map a key to a loop command, if it has one.
pub fn command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Roll),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewTurn),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Save),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
