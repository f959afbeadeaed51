//! Held-control tracker for terminal environments.
//!
//! The simulation polls "is this control held" once per step, but terminals
//! deliver key events. Press and repeat events mark a control held; release
//! events clear it. Terminals that never emit releases are handled with a
//! timeout: a control not refreshed within `key_release_timeout_ms` is
//! treated as released.

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

use crate::map::{map_key, pointer_probe};
use crate::types::{Control, InputState, DEFAULT_KEY_RELEASE_MS};

#[derive(Debug, Clone)]
pub struct HeldControls {
    /// Time (ms) each control was last pressed or repeated.
    last_seen: [Option<u64>; Control::COUNT],
    pointer_probe: bool,
    cursor: Option<(u16, u16)>,
    key_release_timeout_ms: u64,
    /// Set once the terminal delivers a release event; disables the timeout.
    reports_release: bool,
}

impl Default for HeldControls {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldControls {
    pub fn new() -> Self {
        Self::with_key_release_timeout_ms(DEFAULT_KEY_RELEASE_MS as u64)
    }

    pub fn with_key_release_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            last_seen: [None; Control::COUNT],
            pointer_probe: false,
            cursor: None,
            key_release_timeout_ms: timeout_ms,
            reports_release: false,
        }
    }

    /// Declare up front that the terminal reports key releases.
    pub fn with_release_events(mut self, reports_release: bool) -> Self {
        self.reports_release = reports_release;
        self
    }

    pub fn press(&mut self, control: Control, now_ms: u64) {
        self.last_seen[control.index()] = Some(now_ms);
    }

    pub fn release(&mut self, control: Control) {
        self.last_seen[control.index()] = None;
    }

    /// Feed a key event. Returns the control it mapped to, if any.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<Control> {
        let control = map_key(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(control, now_ms),
            KeyEventKind::Release => {
                self.reports_release = true;
                self.release(control);
            }
        }
        Some(control)
    }

    /// Feed a mouse event: tracks the cursor cell and the pointer probe.
    pub fn handle_mouse(&mut self, event: &MouseEvent) {
        self.cursor = Some((event.column, event.row));
        if let Some(held) = pointer_probe(event) {
            self.pointer_probe = held;
        }
    }

    /// Drop controls whose last press is older than the release timeout.
    ///
    /// No-op once the terminal has proven it reports releases.
    pub fn expire(&mut self, now_ms: u64) {
        if self.reports_release {
            return;
        }
        let timeout = self.key_release_timeout_ms;
        for slot in self.last_seen.iter_mut() {
            if let Some(t) = *slot {
                if now_ms.saturating_sub(t) > timeout {
                    *slot = None;
                }
            }
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.last_seen[control.index()].is_some()
    }

    /// Last known pointer cell (column, row).
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Poll the current held state for one simulation step.
    pub fn state(&self) -> InputState {
        let mut input = InputState::default();
        for control in Control::ALL {
            input.set(control, self.is_held(control));
        }
        input.pointer_probe = self.pointer_probe;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_then_timeout_releases() {
        let mut held = HeldControls::with_key_release_timeout_ms(100);
        held.handle_key(key(KeyCode::Up, KeyEventKind::Press), 0);
        held.expire(100);
        assert!(held.is_held(Control::Up));
        held.expire(101);
        assert!(!held.is_held(Control::Up));
    }

    #[test]
    fn repeat_refreshes_hold() {
        let mut held = HeldControls::with_key_release_timeout_ms(100);
        held.handle_key(key(KeyCode::Left, KeyEventKind::Press), 0);
        held.handle_key(key(KeyCode::Left, KeyEventKind::Repeat), 80);
        held.expire(150);
        assert!(held.is_held(Control::Left));
    }

    #[test]
    fn release_event_disables_timeout() {
        let mut held = HeldControls::with_key_release_timeout_ms(100);
        held.handle_key(key(KeyCode::Down, KeyEventKind::Press), 0);
        held.handle_key(key(KeyCode::Down, KeyEventKind::Release), 10);
        assert!(!held.is_held(Control::Down));

        held.handle_key(key(KeyCode::Right, KeyEventKind::Press), 20);
        held.expire(10_000);
        assert!(held.is_held(Control::Right));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut held = HeldControls::new();
        assert_eq!(held.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), 0), None);
        assert_eq!(held.state(), InputState::default());
    }
}
