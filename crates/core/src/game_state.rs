//! Per-process game state: geometry, the stage grid and the lazily spawned tank.

use log::info;

use crate::geometry::PlayfieldGeometry;
use crate::grid::TileGrid;
use crate::snapshot::{GameSnapshot, TankSnapshot};
use crate::tank::{TankActor, POINTER_PROBE_LABEL};
use crate::types::{Control, InputState};

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// The cancel control was held; the run loop should exit cleanly.
    Terminate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    geometry: PlayfieldGeometry,
    grid: TileGrid,
    tank: Option<TankActor>,
    steps: u64,
}

impl GameState {
    pub fn new(geometry: PlayfieldGeometry, grid: TileGrid) -> Self {
        Self {
            geometry,
            grid,
            tank: None,
            steps: 0,
        }
    }

    /// Advance one fixed step.
    ///
    /// The tank is spawned on the first step. Cancel takes precedence over
    /// movement. The stage grid is never consulted here; the field boundary
    /// is the only obstacle.
    pub fn step(&mut self, input: &InputState) -> StepOutcome {
        let geometry = self.geometry;
        let tank = self.tank.get_or_insert_with(|| TankActor::spawn(&geometry));

        if input.is_held(Control::Cancel) {
            info!("cancel held after {} steps", self.steps);
            return StepOutcome::Terminate;
        }

        if input.pointer_probe {
            tank.set_debug(POINTER_PROBE_LABEL);
        }

        self.steps += 1;
        tank.drive(input, &geometry);
        StepOutcome::Continue
    }

    pub fn geometry(&self) -> PlayfieldGeometry {
        self.geometry
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn tank(&self) -> Option<&TankActor> {
        self.tank.as_ref()
    }

    /// Number of steps simulated (excluding the terminating one).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            geometry: self.geometry,
            grid: self.grid,
            tank: self.tank.as_ref().map(TankSnapshot::from),
            steps: self.steps,
        }
    }
}
