//! Keyboard decoding into player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_engine::Position;

/// A discrete thing the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Leave the game (asks for confirmation).
    Quit,
    /// Leave immediately.
    ForceQuit,
    /// Toggle between markers and cell numbers.
    ToggleNumberView,
    /// Open the typed move prompt.
    BeginEntry,
    /// A digit key outside the move prompt.
    Digit(u8),
    /// Arrow key moving the cell cursor.
    MoveCursor(KeyCode),
    /// Enter or Space outside the move prompt.
    Confirm,
    /// Start the next round.
    NewRound,
    /// Answer yes to a question.
    Yes,
    /// Any other key.
    Other,
}

/// Keys while the move prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
    /// A typed character.
    Char(char),
    /// Delete the last character.
    Backspace,
    /// Submit the typed text.
    Submit,
    /// Close the prompt without moving.
    Cancel,
    /// Ignored key.
    Ignore,
}

/// Decodes a key pressed outside the move prompt.
pub fn decode(key: KeyEvent) -> Intent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Intent::ForceQuit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Intent::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => Intent::ToggleNumberView,
        KeyCode::Char('m') | KeyCode::Char('M') => Intent::BeginEntry,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::NewRound,
        KeyCode::Char('y') | KeyCode::Char('Y') => Intent::Yes,
        KeyCode::Char(c) if c.is_ascii_digit() => Intent::Digit(c as u8 - b'0'),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Intent::MoveCursor(key.code)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Confirm,
        _ => Intent::Other,
    }
}

/// Decodes a key pressed while the move prompt is open.
pub fn decode_entry(key: KeyEvent) -> EntryKey {
    match key.code {
        KeyCode::Enter => EntryKey::Submit,
        KeyCode::Esc => EntryKey::Cancel,
        KeyCode::Backspace => EntryKey::Backspace,
        KeyCode::Char(c) if !c.is_control() => EntryKey::Char(c),
        _ => EntryKey::Ignore,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    // No change for other keys or at the edges
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
