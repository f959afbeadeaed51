//! Directional transition table for the tank.
//!
//! Rules are evaluated in fixed priority order (up, down, right, left); the
//! first rule whose control is held and whose guard admits the previous
//! step's velocity wins. A guard rejects any previous motion on the other
//! axis and any previous motion opposing the requested heading, so the tank
//! never reverses instantly and never moves diagonally.

use glam::Vec2;

use crate::types::{Control, Facing, InputState};

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub control: Control,
    pub facing: Facing,
    /// Unit heading in screen space (y down).
    pub heading: Vec2,
    /// Debug annotation shown while this rule drives the tank.
    pub label: &'static str,
}

impl Transition {
    /// Whether the previous step's velocity allows this transition.
    pub fn permits(&self, last_velocity: Vec2) -> bool {
        let along = last_velocity.dot(self.heading);
        let across = last_velocity.dot(self.heading.perp());
        along >= 0.0 && across == 0.0
    }

    pub fn velocity(&self, speed: f32) -> Vec2 {
        self.heading * speed
    }
}

/// Transition table in priority order.
pub const TRANSITIONS: [Transition; 4] = [
    Transition {
        control: Control::Up,
        facing: Facing::Up,
        heading: Vec2::NEG_Y,
        label: "^",
    },
    Transition {
        control: Control::Down,
        facing: Facing::Down,
        heading: Vec2::Y,
        label: "v",
    },
    Transition {
        control: Control::Right,
        facing: Facing::Right,
        heading: Vec2::X,
        label: "->",
    },
    Transition {
        control: Control::Left,
        facing: Facing::Left,
        heading: Vec2::NEG_X,
        label: "<-",
    },
];

/// Pick the first transition that is both requested and permitted.
pub fn select(input: &InputState, last_velocity: Vec2) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| input.is_held(t.control) && t.permits(last_velocity))
}
