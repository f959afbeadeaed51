//! Sprite transforms in field coordinates.
//!
//! Every transform composes scale, then rotate, then translate. Rotation
//! pivots on the sprite origin (its top-left corner), so rotated tank sprites
//! get a compensating offset that puts the rotated image back onto the
//! tank's block.

use glam::{Affine2, Vec2};

use crate::geometry::PlayfieldGeometry;
use crate::types::Facing;

/// Offset, in blocks, that re-centres a sprite rotated for `facing`.
pub fn facing_offset(facing: Facing) -> Vec2 {
    match facing {
        Facing::Up => Vec2::ZERO,
        Facing::Right => Vec2::new(1.0, 0.0),
        Facing::Down => Vec2::new(1.0, 1.0),
        Facing::Left => Vec2::new(0.0, 1.0),
    }
}

/// Transform that draws the upward tank sprite at `position` facing `facing`.
pub fn tank_transform(
    position: Vec2,
    facing: Facing,
    geometry: &PlayfieldGeometry,
    native_size: f32,
) -> Affine2 {
    let offset = facing_offset(facing) * geometry.block_size();
    Affine2::from_translation(position + offset)
        * Affine2::from_angle(facing.rotation())
        * Affine2::from_scale(Vec2::splat(geometry.tile_scale(native_size)))
}

/// Transform that draws a tile sprite over grid cell (`column`, `row`).
pub fn tile_transform(
    column: usize,
    row: usize,
    geometry: &PlayfieldGeometry,
    native_size: f32,
) -> Affine2 {
    Affine2::from_translation(geometry.block_origin(column, row))
        * Affine2::from_scale(Vec2::splat(geometry.tile_scale(native_size)))
}

/// Transform that stretches the background sprite over the whole field.
pub fn field_transform(geometry: &PlayfieldGeometry, native_size: f32) -> Affine2 {
    Affine2::from_scale(Vec2::splat(geometry.field_side() / native_size))
}
