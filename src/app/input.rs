//! Key mapping for the viewer

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions available while reading the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    HalfPageUp,
    HalfPageDown,

    // Selection
    ToggleVisual,
    ClearSelection,

    // Highlight submission (ribbon-icon analogue)
    SendHighlight,

    // Modes
    CommandMode,
    Help,
    Quit,
}

/// Vim-style key mapping for the viewer (without modifiers)
pub fn viewer_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::HalfPageDown),
        KeyCode::PageUp => Some(Action::HalfPageUp),
        KeyCode::Char('v') => Some(Action::ToggleVisual),
        KeyCode::Esc => Some(Action::ClearSelection),
        KeyCode::Char('s') => Some(Action::SendHighlight),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('d') => Some(Action::HalfPageDown),
            KeyCode::Char('u') => Some(Action::HalfPageUp),
            _ => None,
        }
    } else {
        viewer_key_to_action(key)
    }
}
