//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map a keyboard event to a control.
///
/// Arrows and the `k`/`j`/`l`/`h` letters drive the tank; `Esc` and `Ctrl-C`
/// cancel (raw mode swallows SIGINT, so `Ctrl-C` has to be mapped here).
pub fn map_key(key: KeyEvent) -> Option<Control> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Control::Cancel);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Control::Down),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Control::Right),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Control::Left),
        KeyCode::Esc => Some(Control::Cancel),
        _ => None,
    }
}

/// Pointer probe transitions carried by a mouse event.
///
/// Returns `Some(true)` when the secondary (right) button goes down or drags,
/// `Some(false)` when it is released and `None` for anything else.
pub fn pointer_probe(event: &MouseEvent) -> Option<bool> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(true)
        }
        MouseEventKind::Up(MouseButton::Right) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Control::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Control::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Control::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Control::Right));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('k'))), Some(Control::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('J'))), Some(Control::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('l'))), Some(Control::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Control::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Control::Cancel));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Control::Cancel)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_pointer_probe() {
        assert_eq!(pointer_probe(&mouse(MouseEventKind::Down(MouseButton::Right))), Some(true));
        assert_eq!(pointer_probe(&mouse(MouseEventKind::Drag(MouseButton::Right))), Some(true));
        assert_eq!(pointer_probe(&mouse(MouseEventKind::Up(MouseButton::Right))), Some(false));
        assert_eq!(pointer_probe(&mouse(MouseEventKind::Down(MouseButton::Left))), None);
        assert_eq!(pointer_probe(&mouse(MouseEventKind::Moved)), None);
    }
}
