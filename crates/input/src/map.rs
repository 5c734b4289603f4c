//! Key mapping from terminal events to simulation signals.

use crate::types::Signal;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to the signal it triggers.
pub fn handle_key_event(key: KeyEvent) -> Option<Signal> {
    if should_quit(key) {
        return Some(Signal::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('b') | KeyCode::Char('B') => Some(Signal::Reignite),
        _ => None,
    }
}

/// Check if key should stop the simulation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event. Only key presses count; releases, repeats,
/// resizes and mouse events map to nothing.
pub fn map_event(event: &Event) -> Option<Signal> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_reignite_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Char('b'), KeyCode::Char('B')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(Signal::Reignite));
        }
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_only_presses_count() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(Signal::Quit)
        );
    }

    #[test]
    fn test_non_key_events() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(map_event(&Event::FocusLost), None);
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_event(&Event::Mouse(mouse)), None);
    }
}
