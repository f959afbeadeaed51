//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Field coordinates are projected onto terminal cells with a fixed number of
//! cells per block; every sprite is drawn by composing that projection with
//! the sprite's field transform from [`crate::core::projection`].

use glam::{Affine2, Vec2};

use crate::core::{field_transform, tank_transform, tile_transform, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprite::{draw_sprite, SpriteSet};
use crate::types::CELLS_PER_SIDE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Values for the debug panel that live outside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudStatus {
    pub actual_tps: f32,
    pub target_tps: f32,
    /// Last pointer position in terminal cells (column, row).
    pub cursor: Option<(u16, u16)>,
}

/// Terminal renderer for the playfield and its debug panel.
pub struct GameView {
    /// Terminal columns per block.
    cell_w: u16,
    /// Terminal rows per block.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

impl GameView {
    /// Largest number of terminal cells per block on either axis.
    pub const MAX_CELLS_PER_BLOCK: u16 = 16;

    /// Cell counts are clamped to `1..=MAX_CELLS_PER_BLOCK`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, Self::MAX_CELLS_PER_BLOCK),
            cell_h: cell_h.clamp(1, Self::MAX_CELLS_PER_BLOCK),
        }
    }

    /// Size of the bordered field frame in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = CELLS_PER_SIDE as u16;
        (
            n.saturating_mul(self.cell_w).saturating_add(2),
            n.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Projection from field coordinates to terminal cells (inside the border).
    pub fn screen_from_field(&self, snap: &GameSnapshot) -> Affine2 {
        let block = snap.geometry.block_size();
        Affine2::from_translation(Vec2::ONE)
            * Affine2::from_scale(Vec2::new(
                self.cell_w as f32 / block,
                self.cell_h as f32 / block,
            ))
    }

    /// Field coordinates under the centre of terminal cell (`column`, `row`).
    pub fn field_from_screen(&self, snap: &GameSnapshot, column: u16, row: u16) -> Vec2 {
        let centre = Vec2::new(column as f32 + 0.5, row as f32 + 0.5);
        self.screen_from_field(snap).inverse().transform_point2(centre)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        sprites: &SpriteSet,
        hud: Option<&HudStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (frame_w, frame_h) = self.frame_size();
        self.draw_border(fb, frame_w, frame_h);

        let screen = self.screen_from_field(snap);
        let geometry = &snap.geometry;

        draw_sprite(
            fb,
            &sprites.field,
            screen * field_transform(geometry, sprites.field.native_size()),
        );

        for (column, row) in snap.grid.solid_tiles() {
            draw_sprite(
                fb,
                &sprites.brick,
                screen * tile_transform(column, row, geometry, sprites.brick.native_size()),
            );
        }

        if let Some(tank) = snap.tank {
            draw_sprite(
                fb,
                &sprites.tank,
                screen
                    * tank_transform(
                        tank.position,
                        tank.facing,
                        geometry,
                        sprites.tank.native_size(),
                    ),
            );
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        sprites: &SpriteSet,
        hud: Option<&HudStatus>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, sprites, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        fb.put_char(0, 0, '┌', BORDER);
        fb.put_char(w - 1, 0, '┐', BORDER);
        fb.put_char(0, h - 1, '└', BORDER);
        fb.put_char(w - 1, h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', BORDER);
            fb.put_char(dx, h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', BORDER);
            fb.put_char(w - 1, dy, '│', BORDER);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Option<&HudStatus>,
        viewport: Viewport,
        frame_w: u16,
    ) {
        let panel_x = frame_w.saturating_add(1);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let geometry = &snap.geometry;
        let mut lines: Vec<String> = Vec::with_capacity(16);

        match hud {
            Some(h) => lines.push(format!("TPS: {:0.2}/{:0.0}", h.actual_tps, h.target_tps)),
            None => lines.push("TPS: -".to_string()),
        }
        match snap.tank {
            Some(tank) => {
                lines.extend(tank.debug.lines().map(str::to_string));
                lines.push(format!("(x,y)=({:.2}, {:.2})", tank.position.x, tank.position.y));
                lines.push(format!(
                    "(vx0,vy0)=({:.2}, {:.2})",
                    tank.last_velocity.x, tank.last_velocity.y
                ));
                lines.push(format!("facing: {}", tank.facing.as_str()));
            }
            None => lines.push("no tank".to_string()),
        }
        lines.push(format!("blockSize: {:.2}", geometry.block_size()));
        lines.push(format!("cellSize: {:.2}", geometry.sub_cell_size()));
        lines.push(format!("fieldWidth: {:.2}", geometry.field_side()));
        lines.push(format!("fieldHeight: {:.2}", geometry.field_side()));
        match hud.and_then(|h| h.cursor) {
            Some((column, row)) => {
                let p = self.field_from_screen(snap, column, row).floor();
                lines.push(format!("X: {}, Y: {}", p.x as i32, p.y as i32));
            }
            None => lines.push("X: -, Y: -".to_string()),
        }
        lines.push(format!(
            "Scale: {:.2}",
            geometry.tile_scale(crate::types::SPRITE_NATIVE_SIZE)
        ));
        lines.push(format!("steps: {}", snap.steps));

        fb.put_str(panel_x, 0, "DEBUG", LABEL);
        for (i, line) in lines.iter().enumerate() {
            let y = 1 + i as u16;
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, VALUE);
        }
    }
}
