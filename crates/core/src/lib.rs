//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the playfield geometry, the stage grid loader, the
//! tank movement rules and the sprite transforms. It has **no dependencies**
//! on terminal I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same tank path
//! - **Testable**: every rule can be exercised without a terminal
//! - **Portable**: any renderer can consume [`GameSnapshot`] and the transforms
//!
//! # Module Structure
//!
//! - [`geometry`]: square playfield measurements (block and sub-cell sizes, clamp)
//! - [`config`]: startup configuration and the derived geometry
//! - [`grid`]: 13x13 tile grid and its best-effort text loader
//! - [`movement`]: priority-ordered direction transition table
//! - [`tank`]: tank actor state and the apply-step/clamp
//! - [`projection`]: scale/rotate/translate transforms for sprites
//! - [`game_state`]: per-process state driven once per fixed step
//!
//! # Movement Rules
//!
//! - Velocity is zero or exactly one `speed` along a single axis
//! - A turn onto the other axis waits until a step with no matching input
//!   clears the previous velocity
//! - Reversal is blocked the same way
//! - Position is clamped to `[0, field_side - block_size]` on both axes
//!
//! # Example
//!
//! ```
//! use tui_tanks_core::{GameState, PlayfieldGeometry, StepOutcome, TileGrid};
//! use tui_tanks_types::{Control, Facing, InputState};
//!
//! let mut game = GameState::new(PlayfieldGeometry::new(448.0, 336.0), TileGrid::new());
//!
//! let right = InputState::default().with(Control::Right);
//! assert_eq!(game.step(&right), StepOutcome::Continue);
//! assert_eq!(game.tank().unwrap().facing(), Facing::Right);
//!
//! let cancel = InputState::default().with(Control::Cancel);
//! assert_eq!(game.step(&cancel), StepOutcome::Terminate);
//! ```

pub mod config;
pub mod game_state;
pub mod geometry;
pub mod grid;
pub mod movement;
pub mod projection;
pub mod snapshot;
pub mod tank;

pub use tui_tanks_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{GameState, StepOutcome};
pub use geometry::PlayfieldGeometry;
pub use grid::TileGrid;
pub use movement::{Transition, TRANSITIONS};
pub use projection::{field_transform, tank_transform, tile_transform};
pub use snapshot::{GameSnapshot, TankSnapshot};
pub use tank::TankActor;
