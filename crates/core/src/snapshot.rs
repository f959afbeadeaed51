use glam::Vec2;

use crate::geometry::PlayfieldGeometry;
use crate::grid::TileGrid;
use crate::tank::TankActor;
use crate::types::Facing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankSnapshot {
    pub position: Vec2,
    pub facing: Facing,
    pub last_velocity: Vec2,
    pub speed: f32,
    pub debug: &'static str,
}

impl From<&TankActor> for TankSnapshot {
    fn from(value: &TankActor) -> Self {
        Self {
            position: value.position(),
            facing: value.facing(),
            last_velocity: value.last_velocity(),
            speed: value.speed(),
            debug: value.debug(),
        }
    }
}

/// Read-only view of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub geometry: PlayfieldGeometry,
    pub grid: TileGrid,
    pub tank: Option<TankSnapshot>,
    pub steps: u64,
}
