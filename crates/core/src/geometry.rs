//! Playfield geometry derived once from the configured screen layout.

use glam::Vec2;

use crate::types::{CELLS_PER_SIDE, SUB_CELLS_PER_BLOCK};

/// Square playfield measurements.
///
/// The field is always square: the smaller of the configured width and
/// height is used for both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayfieldGeometry {
    field_side: f32,
}

impl PlayfieldGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            field_side: width.min(height),
        }
    }

    /// Side length of the square playable region.
    pub fn field_side(&self) -> f32 {
        self.field_side
    }

    /// Side length of one block (one grid cell).
    pub fn block_size(&self) -> f32 {
        self.field_side / CELLS_PER_SIDE as f32
    }

    /// A quarter of a block; the unit the tank speed is derived from.
    pub fn sub_cell_size(&self) -> f32 {
        self.block_size() / SUB_CELLS_PER_BLOCK
    }

    /// Largest legal tank position on each axis.
    pub fn max_position(&self) -> Vec2 {
        Vec2::splat(self.field_side - self.block_size())
    }

    /// Clamp a position so a block-sized actor stays inside the field.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(Vec2::ZERO, self.max_position())
    }

    /// Scale that maps a sprite of `native_size` onto one block.
    pub fn tile_scale(&self, native_size: f32) -> f32 {
        self.block_size() / native_size
    }

    /// Top-left corner of a grid cell in field coordinates.
    pub fn block_origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(column as f32, row as f32) * self.block_size()
    }
}
