//! Tank actor: position, facing and the velocity bookkeeping that gates turns.

use glam::Vec2;
use log::debug;

use crate::geometry::PlayfieldGeometry;
use crate::movement::{self, Transition};
use crate::types::{Facing, InputState, SPAWN_COLUMN, SPEED_DIVISOR};

/// Debug annotation set while the pointer probe is held
pub const POINTER_PROBE_LABEL: &str = "Mouse";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankActor {
    position: Vec2,
    facing: Facing,
    /// Velocity applied on the previous step.
    last_velocity: Vec2,
    /// Velocity to apply on the next `apply_step`; always zero between steps.
    pending_velocity: Vec2,
    speed: f32,
    debug: &'static str,
}

impl TankActor {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            facing: Facing::Up,
            last_velocity: Vec2::ZERO,
            pending_velocity: Vec2::ZERO,
            speed,
            debug: "",
        }
    }

    /// Spawn at the fifth column of the bottom row, facing up.
    pub fn spawn(geometry: &PlayfieldGeometry) -> Self {
        let block = geometry.block_size();
        let position = Vec2::new(block * SPAWN_COLUMN, geometry.field_side() - block);
        let speed = geometry.sub_cell_size() / SPEED_DIVISOR;
        debug!("tank spawned at ({:.2}, {:.2}) speed {speed:.3}", position.x, position.y);
        Self::new(position, speed)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn last_velocity(&self) -> Vec2 {
        self.last_velocity
    }

    pub fn pending_velocity(&self) -> Vec2 {
        self.pending_velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn debug(&self) -> &'static str {
        self.debug
    }

    pub fn set_debug(&mut self, label: &'static str) {
        self.debug = label;
    }

    /// Run the transition table against the held controls.
    ///
    /// On a match the velocity and facing are set and the step is applied.
    /// Otherwise the recorded previous velocity is cleared, which unblocks
    /// both axes for the next step. Returns the rule that fired.
    pub fn drive(
        &mut self,
        input: &InputState,
        geometry: &PlayfieldGeometry,
    ) -> Option<&'static Transition> {
        match movement::select(input, self.last_velocity) {
            Some(t) => {
                if t.facing != self.facing {
                    debug!("tank turns {} -> {}", self.facing.as_str(), t.facing.as_str());
                }
                self.set_pending_velocity(t.velocity(self.speed));
                self.facing = t.facing;
                self.apply_step(geometry);
                self.debug = t.label;
                Some(t)
            }
            None => {
                self.last_velocity = Vec2::ZERO;
                None
            }
        }
    }

    /// Move by the pending velocity, clamp into the field and clear it.
    pub fn apply_step(&mut self, geometry: &PlayfieldGeometry) {
        self.last_velocity = self.pending_velocity;
        self.position = geometry.clamp(self.position + self.pending_velocity);
        self.pending_velocity = Vec2::ZERO;
    }

    /// Queue a raw velocity for the next `apply_step`.
    pub fn set_pending_velocity(&mut self, velocity: Vec2) {
        self.pending_velocity = velocity;
    }
}
