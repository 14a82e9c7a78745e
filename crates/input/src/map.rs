//! Key mapping from terminal events to draw actions.

use crate::types::DrawAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to draw actions.
///
/// Only presses count; repeats and releases are ignored so holding a key
/// cannot queue triggers.
pub fn handle_key_event(key: KeyEvent) -> Option<DrawAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(DrawAction::Trigger),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(DrawAction::ToggleMute),
        _ => None,
    }
}

/// Check if key should quit the widget.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
