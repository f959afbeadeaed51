//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Playfield Dimensions
//!
//! The playfield is a square of 13x13 blocks. Each block is split into 4x4
//! sub-cells; the tank's step speed is derived from the sub-cell size.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELLS_PER_SIDE` | 13 | Blocks along each side of the field |
//! | `SUB_CELLS_PER_BLOCK` | 4 | Sub-cells along one block edge |
//! | `SPEED_DIVISOR` | 8 | Tank speed is one eighth of a sub-cell per step |
//! | `SCREEN_WIDTH` | 548 | Logical screen width |
//! | `SCREEN_HEIGHT` | 336 | Logical screen height |
//! | `SIDE_PANEL_WIDTH` | 100 | Width reserved for the debug panel |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 steps per second) |
//!
//! # Examples
//!
//! ```
//! use tui_tanks_types::{Control, Facing, InputState, TileKind, CELLS_PER_SIDE};
//!
//! assert_eq!(Facing::Down.as_str(), "down");
//!
//! let input = InputState::default().with(Control::Left);
//! assert!(input.is_held(Control::Left));
//! assert!(!input.is_held(Control::Right));
//!
//! assert_eq!(TileKind::from_tag(1), Some(TileKind::Brick));
//! assert_eq!(CELLS_PER_SIDE, 13);
//! ```

/// Blocks along each side of the square playfield (13)
pub const CELLS_PER_SIDE: usize = 13;

/// Sub-cells along one edge of a block (4, so one block is 16 sub-cells)
pub const SUB_CELLS_PER_BLOCK: f32 = 4.0;

/// Tank speed is `sub_cell_size / SPEED_DIVISOR` per step
pub const SPEED_DIVISOR: f32 = 8.0;

/// Logical screen width
pub const SCREEN_WIDTH: f32 = 548.0;

/// Logical screen height
pub const SCREEN_HEIGHT: f32 = 336.0;

/// Horizontal space right of the field reserved for the debug panel
pub const SIDE_PANEL_WIDTH: f32 = 100.0;

/// Native size of tank and tile sprites (square)
pub const SPRITE_NATIVE_SIZE: f32 = 100.0;

/// Native size of the field background sprite (square)
pub const FIELD_NATIVE_SIZE: f32 = 336.0;

/// Block column the tank spawns in
pub const SPAWN_COLUMN: f32 = 4.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 steps per second)
pub const TICK_MS: u32 = 16;

/// Held-key timeout for terminals that never report key releases
pub const DEFAULT_KEY_RELEASE_MS: u32 = 200;

/// The four display orientations of the tank
///
/// - **Up**: sprite as drawn (0° rotation)
/// - **Right**: rotated 90° clockwise on screen
/// - **Down**: rotated 180°
/// - **Left**: rotated 90° counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Right, Facing::Down, Facing::Left];

    /// Screen rotation applied to the upward sprite, in radians.
    ///
    /// Screen space has y pointing down, so a positive angle turns clockwise.
    pub fn rotation(&self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Facing::Up => 0.0,
            Facing::Right => FRAC_PI_2,
            Facing::Down => PI,
            Facing::Left => -FRAC_PI_2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Right => "right",
            Facing::Down => "down",
            Facing::Left => "left",
        }
    }
}

/// Polled controls
///
/// Four directions drive the tank; `Cancel` ends the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Cancel,
}

impl Control {
    pub const COUNT: usize = 5;

    pub const ALL: [Control; Control::COUNT] = [
        Control::Up,
        Control::Down,
        Control::Left,
        Control::Right,
        Control::Cancel,
    ];

    /// Stable index into per-control arrays.
    pub fn index(&self) -> usize {
        match self {
            Control::Up => 0,
            Control::Down => 1,
            Control::Left => 2,
            Control::Right => 3,
            Control::Cancel => 4,
        }
    }
}

/// Snapshot of which controls are held during one simulation step
///
/// Built by the input layer once per step and consumed by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    held: [bool; Control::COUNT],
    /// Auxiliary pointer button (only used to annotate debug output)
    pub pointer_probe: bool,
}

impl InputState {
    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    pub fn set(&mut self, control: Control, held: bool) {
        self.held[control.index()] = held;
    }

    /// Builder-style variant of [`InputState::set`] for a held control.
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn with_pointer_probe(mut self) -> Self {
        self.pointer_probe = true;
        self
    }
}

/// Tile tags stored in the stage grid
///
/// Only `Brick` is drawn; the other non-empty kinds are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Brick,
    Steel,
    Leaves,
    Power,
}

impl TileKind {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(TileKind::Empty),
            1 => Some(TileKind::Brick),
            2 => Some(TileKind::Steel),
            3 => Some(TileKind::Leaves),
            4 => Some(TileKind::Power),
            _ => None,
        }
    }
}
