use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from anywhere
    ForceQuit,
    Submit,
    Escape,
    InputChar(char),
    Paste(String),
    Backspace,
    /// Tab / Shift+Tab move focus between fields
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    /// F1..F5 jump to a top-level page (0-based)
    NavKey(usize),
    /// Ctrl+L
    Logout,
    /// Ctrl+R
    Refresh,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) => map_key(key_event),
        Ok(Event::Paste(data)) => Some(TuiEvent::Paste(data)),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Translates a key press into a `TuiEvent`. Releases are dropped; repeats
/// are kept so held arrow keys keep scrolling.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Logout),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        (_, KeyCode::F(n @ 1..=5)) => Some(TuiEvent::NavKey(usize::from(n - 1))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('c'))), Some(TuiEvent::ForceQuit));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('l'))), Some(TuiEvent::Logout));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('r'))), Some(TuiEvent::Refresh));
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_and_shifted_chars_are_input() {
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::Char('a'))), Some(TuiEvent::InputChar('a')));
        assert_eq!(map_key(key(KeyModifiers::SHIFT, KeyCode::Char('A'))), Some(TuiEvent::InputChar('A')));
    }

    #[test]
    fn test_function_keys_map_to_pages() {
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::F(1))), Some(TuiEvent::NavKey(0)));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::F(5))), Some(TuiEvent::NavKey(4)));
        assert_eq!(map_key(key(KeyModifiers::NONE, KeyCode::F(6))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = key(KeyModifiers::NONE, KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_key_repeat_is_kept() {
        let mut repeat = key(KeyModifiers::NONE, KeyCode::Down);
        repeat.kind = KeyEventKind::Repeat;
        assert_eq!(map_key(repeat), Some(TuiEvent::CursorDown));
    }
}
