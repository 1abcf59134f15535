//! Key binding table for the viewer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the event loop knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    Up,
    Down,
    /// Toggle the model checkbox under the cursor
    Toggle,
    /// Select-all toggle for the model list
    SelectAll,
    ScrollUp,
    ScrollDown,
    ToggleReport,
    Reload,
}

/// Map a key event to an action; unbound keys return `None`
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::FocusNext),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::FocusPrev),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Down),
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyAction::Toggle),
        KeyCode::Char('a') => Some(KeyAction::SelectAll),
        KeyCode::PageUp => Some(KeyAction::ScrollUp),
        KeyCode::PageDown => Some(KeyAction::ScrollDown),
        KeyCode::Char('w') => Some(KeyAction::ToggleReport),
        KeyCode::Char('r') => Some(KeyAction::Reload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_vim_style_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(KeyAction::Down));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(KeyAction::Up));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(KeyAction::FocusNext));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }
}
