//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,

    // Preview scrolling (paged documents)
    ScrollPreviewUp,
    ScrollPreviewDown,

    // File operations
    /// View the file under the cursor (make it the active preview).
    View,
    /// Delete the file under the cursor.
    Delete,
    /// Add a file by path (opens the input prompt).
    Add,
    /// Save a copy of the viewed file under its original name.
    Save,

    // UI toggles
    ToggleTheme,
    ToggleHelp,

    /// Esc - close the preview, or dismiss the help overlay.
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style and arrows
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Preview scrolling
            (KeyCode::PageUp, _) => KeyAction::ScrollPreviewUp,
            (KeyCode::PageDown, _) => KeyAction::ScrollPreviewDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ScrollPreviewUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::ScrollPreviewDown,

            // File operations
            (KeyCode::Enter, _) => KeyAction::View,
            (KeyCode::Char('x'), KeyModifiers::NONE) => KeyAction::Delete,
            (KeyCode::Delete, _) => KeyAction::Delete,
            (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::Add,
            (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::Save,

            // UI toggles
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::ToggleHelp,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "PgUp/PgDn", description: "Scroll preview pages" },
            ],
        },
        HelpSection {
            title: "Files",
            bindings: vec![
                KeyBinding { keys: "Enter", description: "View file" },
                KeyBinding { keys: "Esc", description: "Close preview" },
                KeyBinding { keys: "a", description: "Add file by path" },
                KeyBinding { keys: "x/Del", description: "Delete file" },
                KeyBinding { keys: "s", description: "Save a copy" },
            ],
        },
        HelpSection {
            title: "Application",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}
