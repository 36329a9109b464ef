/// Keyboard and mouse tracking on top of crossterm events
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use glyph3d_core::{Action, InputState};
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press or repeat event
/// when the terminal does not report releases
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(500);

pub fn action_for(code: KeyCode) -> Option<Action> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    match c.to_ascii_lowercase() {
        'w' => Some(Action::PitchUp),
        's' => Some(Action::PitchDown),
        'a' => Some(Action::YawLeft),
        'd' => Some(Action::YawRight),
        'q' => Some(Action::RollLeft),
        'e' => Some(Action::RollRight),
        'z' => Some(Action::ZoomIn),
        'x' => Some(Action::ZoomOut),
        _ => None,
    }
}

/// `Esc` or `Ctrl-C`
pub fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent { code: KeyCode::Esc, kind, .. }) => *kind != KeyEventKind::Release,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL) && *kind != KeyEventKind::Release,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyHold {
    down: bool,
    last_seen: Option<Instant>,
}

/// Folds terminal events into a per-frame [`InputState`]
#[derive(Debug)]
pub struct KeyTracker {
    release_events: bool,
    hold_timeout: Duration,
    keys: [KeyHold; Action::ALL.len()],
    mouse_down: bool,
    state: InputState,
}

impl KeyTracker {
    /// `release_events` is true when the terminal reports key releases
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            hold_timeout: HOLD_TIMEOUT,
            keys: [KeyHold::default(); Action::ALL.len()],
            mouse_down: false,
            state: InputState::new(),
        }
    }

    pub fn with_hold_timeout(mut self, timeout: Duration) -> Self {
        self.hold_timeout = timeout;
        self
    }

    pub fn handle(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => {
                if let Some(action) = action_for(key.code) {
                    let hold = &mut self.keys[action as usize];
                    match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            hold.down = true;
                            hold.last_seen = Some(now);
                        }
                        KeyEventKind::Release => {
                            hold.down = false;
                            hold.last_seen = None;
                        }
                    }
                }
            }
            Event::Mouse(mouse) => {
                self.state.mouse_x = i32::from(mouse.column);
                self.state.mouse_y = i32::from(mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left)
                    | MouseEventKind::Drag(MouseButton::Left) => self.mouse_down = true,
                    MouseEventKind::Up(MouseButton::Left) => self.mouse_down = false,
                    _ => {}
                }
            }
            Event::FocusGained => self.state.focused = true,
            Event::FocusLost => {
                self.state.focused = false;
                self.mouse_down = false;
                self.keys = [KeyHold::default(); Action::ALL.len()];
            }
            _ => {}
        }
    }

    /// Advance the snapshot to `now` and return it
    pub fn snapshot(&mut self, now: Instant) -> &InputState {
        for action in Action::ALL {
            let hold = &mut self.keys[action as usize];
            if !self.release_events {
                let expired = hold
                    .last_seen
                    .map_or(true, |seen| now.saturating_duration_since(seen) >= self.hold_timeout);
                if expired {
                    hold.down = false;
                }
            }
            self.state.update_action(action, hold.down);
        }
        self.state.mouse_left.update(self.mouse_down);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(c: char, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for(KeyCode::Char('w')), Some(Action::PitchUp));
        assert_eq!(action_for(KeyCode::Char('D')), Some(Action::YawRight));
        assert_eq!(action_for(KeyCode::Char('x')), Some(Action::ZoomOut));
        assert_eq!(action_for(KeyCode::Char('p')), None);
        assert_eq!(action_for(KeyCode::Up), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))));
        assert!(is_quit(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))));
        assert!(!is_quit(&key('c', KeyEventKind::Press)));
        assert!(!is_quit(&key('q', KeyEventKind::Press)));
    }

    #[test]
    fn test_hold_expires_without_release_events() {
        let start = Instant::now();
        let mut tracker = KeyTracker::new(false);
        tracker.handle(&key('w', KeyEventKind::Press), start);

        let input = tracker.snapshot(start + Duration::from_millis(100));
        assert!(input.action(Action::PitchUp).pressed);
        assert!(input.held(Action::PitchUp));

        // a repeat event extends the hold
        tracker.handle(&key('w', KeyEventKind::Repeat), start + Duration::from_millis(400));
        assert!(tracker.snapshot(start + Duration::from_millis(800)).held(Action::PitchUp));

        let input = tracker.snapshot(start + Duration::from_millis(950));
        assert!(!input.held(Action::PitchUp));
        assert!(input.action(Action::PitchUp).released);
    }

    #[test]
    fn test_release_events_end_hold() {
        let start = Instant::now();
        let mut tracker = KeyTracker::new(true);
        tracker.handle(&key('z', KeyEventKind::Press), start);
        // no timeout when releases are reported
        assert!(tracker.snapshot(start + Duration::from_secs(5)).held(Action::ZoomIn));

        tracker.handle(&key('z', KeyEventKind::Release), start + Duration::from_secs(6));
        assert!(!tracker.snapshot(start + Duration::from_secs(6)).held(Action::ZoomIn));
    }

    #[test]
    fn test_mouse_drag() {
        let now = Instant::now();
        let mut tracker = KeyTracker::new(false);
        tracker.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 4), now);
        tracker.handle(&mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5), now);
        let input = tracker.snapshot(now);
        assert!(input.mouse_left.held);
        assert_eq!((input.mouse_x, input.mouse_y), (12, 5));

        tracker.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 12, 5), now);
        assert!(tracker.snapshot(now).mouse_left.released);
    }

    #[test]
    fn test_focus_loss_clears_holds() {
        let now = Instant::now();
        let mut tracker = KeyTracker::new(true);
        tracker.handle(&key('a', KeyEventKind::Press), now);
        tracker.handle(&Event::FocusLost, now);
        let input = tracker.snapshot(now);
        assert!(!input.focused);
        assert!(!input.held(Action::YawLeft));

        tracker.handle(&Event::FocusGained, now);
        assert!(tracker.snapshot(now).focused);
    }
}
