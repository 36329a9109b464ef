//! Per-frame input snapshot consumed by scene updates
//!
//! The core never polls devices; a front-end fills an [`InputState`] each
//! frame and hands it to [`Scene::update`](crate::scene::Scene::update).

/// Edge-triggered state of one key or button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
}

impl ButtonState {
    /// Advance one frame given whether the button is currently down
    pub fn update(&mut self, down: bool) {
        self.pressed = false;
        self.released = false;
        if down != self.held {
            if down {
                self.pressed = true;
            } else {
                self.released = true;
            }
            self.held = down;
        }
    }
}

/// Scene actions bound to keys by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    ZoomIn,
    ZoomOut,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::PitchUp,
        Action::PitchDown,
        Action::YawLeft,
        Action::YawRight,
        Action::RollLeft,
        Action::RollRight,
        Action::ZoomIn,
        Action::ZoomOut,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    actions: [ButtonState; Action::ALL.len()],
    pub mouse_left: ButtonState,
    /// Mouse position in grid cells
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub focused: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            actions: [ButtonState::default(); Action::ALL.len()],
            mouse_left: ButtonState::default(),
            mouse_x: 0,
            mouse_y: 0,
            focused: true,
        }
    }

    pub fn action(&self, action: Action) -> ButtonState {
        self.actions[action as usize]
    }

    pub fn held(&self, action: Action) -> bool {
        self.action(action).held
    }

    pub fn update_action(&mut self, action: Action, down: bool) {
        self.actions[action as usize].update(down);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_transitions() {
        let mut b = ButtonState::default();
        b.update(true);
        assert_eq!(b, ButtonState { pressed: true, released: false, held: true });
        b.update(true);
        assert_eq!(b, ButtonState { pressed: false, released: false, held: true });
        b.update(false);
        assert_eq!(b, ButtonState { pressed: false, released: true, held: false });
        b.update(false);
        assert_eq!(b, ButtonState::default());
    }

    #[test]
    fn test_actions_are_independent() {
        let mut input = InputState::new();
        input.update_action(Action::YawLeft, true);
        assert!(input.held(Action::YawLeft));
        assert!(Action::ALL.iter().filter(|&&a| input.held(a)).count() == 1);
        assert!(input.focused);
    }
}
