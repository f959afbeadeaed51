//! Text-art sprites and the affine sprite rasterizer.
//!
//! A sprite file is a block of equally long rows. Each character is a texel:
//! `.` is transparent, every other character must be in the palette. The
//! texel grid spans a square of `native_size` logical units, so the same
//! scale factors apply as for a bitmap of that size.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::{Affine2, Vec2};
use log::info;

use crate::fb::{FrameBuffer, Rgb};
use crate::types::{FIELD_NATIVE_SIZE, SPRITE_NATIVE_SIZE};

/// Transparent texel character
pub const TRANSPARENT: char = '.';

/// One opaque texel as drawn into a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texel {
    pub ch: char,
    pub fg: Rgb,
    /// Background override; `None` keeps whatever is underneath.
    pub bg: Option<Rgb>,
}

/// Fixed palette for sprite art.
pub fn palette(art: char) -> Option<Texel> {
    let texel = |ch, fg, bg| Some(Texel { ch, fg, bg });
    match art {
        // Tank
        '#' => texel('█', Rgb::new(96, 140, 60), None),
        'o' => texel('█', Rgb::new(230, 200, 80), None),
        '=' => texel('▒', Rgb::new(150, 150, 150), None),
        // Brick
        'B' => texel('█', Rgb::new(178, 74, 42), None),
        '-' => texel('▄', Rgb::new(178, 74, 42), Some(Rgb::new(120, 110, 100))),
        // Field
        ':' => texel(' ', Rgb::new(60, 60, 60), Some(Rgb::new(22, 22, 26))),
        ',' => texel('·', Rgb::new(50, 50, 58), Some(Rgb::new(22, 22, 26))),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    cols: usize,
    rows: usize,
    texels: Vec<Option<Texel>>,
    native_size: f32,
}

impl Sprite {
    /// Parse sprite art. Blank leading/trailing lines are ignored.
    pub fn parse(text: &str, native_size: f32) -> Result<Self> {
        if !(native_size.is_finite() && native_size > 0.0) {
            bail!("sprite native size must be positive, got {native_size}");
        }

        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];

        let Some(first) = lines.first() else {
            bail!("sprite has no texels");
        };
        let cols = first.chars().count();

        let mut texels = Vec::with_capacity(cols * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                bail!("row {} has {width} texels, expected {cols}", row + 1);
            }
            for (col, art) in line.chars().enumerate() {
                if art == TRANSPARENT {
                    texels.push(None);
                    continue;
                }
                match palette(art) {
                    Some(t) => texels.push(Some(t)),
                    None => bail!("row {} col {}: unknown texel {art:?}", row + 1, col + 1),
                }
            }
        }

        Ok(Self {
            cols,
            rows: lines.len(),
            texels,
            native_size,
        })
    }

    pub fn load(path: impl AsRef<Path>, native_size: f32) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read sprite {}", path.display()))?;
        Self::parse(&text, native_size)
            .with_context(|| format!("invalid sprite {}", path.display()))
    }

    pub fn native_size(&self) -> f32 {
        self.native_size
    }

    /// Texel under a point in sprite space (`0..native_size` on both axes).
    pub fn sample(&self, p: Vec2) -> Option<Texel> {
        let n = self.native_size;
        if !(p.x >= 0.0 && p.y >= 0.0 && p.x < n && p.y < n) {
            return None;
        }
        let col = ((p.x / n * self.cols as f32) as usize).min(self.cols - 1);
        let row = ((p.y / n * self.rows as f32) as usize).min(self.rows - 1);
        self.texels[row * self.cols + col]
    }
}

/// Draw `sprite` through `transform` (sprite space to terminal cells).
///
/// Every cell in the transformed bounding box samples the sprite at its
/// centre through the inverse transform; transparent samples leave the cell
/// untouched.
pub fn draw_sprite(fb: &mut FrameBuffer, sprite: &Sprite, transform: Affine2) {
    let n = sprite.native_size();
    let corners = [
        Vec2::ZERO,
        Vec2::new(n, 0.0),
        Vec2::new(0.0, n),
        Vec2::splat(n),
    ]
    .map(|c| transform.transform_point2(c));
    let min = corners.iter().fold(Vec2::INFINITY, |a, c| a.min(*c));
    let max = corners.iter().fold(Vec2::NEG_INFINITY, |a, c| a.max(*c));

    let x0 = min.x.floor().max(0.0) as u16;
    let y0 = min.y.floor().max(0.0) as u16;
    let x1 = max.x.ceil().clamp(0.0, fb.width() as f32) as u16;
    let y1 = max.y.ceil().clamp(0.0, fb.height() as f32) as u16;

    let inverse = transform.inverse();
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if let Some(t) = sprite.sample(inverse.transform_point2(center)) {
                fb.paint(x, y, t.ch, t.fg, t.bg);
            }
        }
    }
}

/// The three mandatory sprites.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    /// Upward-facing tank; other facings are drawn by rotation.
    pub tank: Sprite,
    pub brick: Sprite,
    pub field: Sprite,
}

impl SpriteSet {
    pub const TANK_FILE: &'static str = "tank.txt";
    pub const BRICK_FILE: &'static str = "brick.txt";
    pub const FIELD_FILE: &'static str = "field.txt";

    /// Load all sprites from `dir`. Any failure is fatal to startup.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let set = Self {
            tank: Sprite::load(dir.join(Self::TANK_FILE), SPRITE_NATIVE_SIZE)?,
            brick: Sprite::load(dir.join(Self::BRICK_FILE), SPRITE_NATIVE_SIZE)?,
            field: Sprite::load(dir.join(Self::FIELD_FILE), FIELD_NATIVE_SIZE)?,
        };
        info!("loaded sprites from {}", dir.display());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Sprite::parse("##\n#\n", 100.0).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn parse_rejects_unknown_texels() {
        assert!(Sprite::parse("#?\n", 100.0).is_err());
    }

    #[test]
    fn parse_rejects_empty_art() {
        assert!(Sprite::parse("\n  \n", 100.0).is_err());
    }

    #[test]
    fn parse_trims_blank_edges() {
        let s = Sprite::parse("\n#.\n.o\n\n", 100.0).unwrap();
        assert_eq!(s, Sprite::parse("#.\n.o", 100.0).unwrap());
    }

    #[test]
    fn sample_maps_native_space_onto_texels() {
        let s = Sprite::parse("#.\n.o\n", 100.0).unwrap();
        assert_eq!(s.sample(Vec2::new(10.0, 10.0)).unwrap().ch, '█');
        assert!(s.sample(Vec2::new(60.0, 10.0)).is_none());
        assert_eq!(s.sample(Vec2::new(60.0, 60.0)), palette('o'));
        assert!(s.sample(Vec2::new(-1.0, 10.0)).is_none());
        assert!(s.sample(Vec2::new(10.0, 100.0)).is_none());
    }

    #[test]
    fn draw_sprite_scales_into_cells() {
        // A 2x2 sprite of native size 100 scaled onto a 4x2 cell area.
        let s = Sprite::parse("#o\n=#\n", 100.0).unwrap();
        let mut fb = FrameBuffer::new(6, 3);
        let t = Affine2::from_translation(Vec2::new(1.0, 0.0))
            * Affine2::from_scale(Vec2::new(0.04, 0.02));
        draw_sprite(&mut fb, &s, t);

        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 0).unwrap().style.fg, palette('#').unwrap().fg);
        assert_eq!(fb.get(3, 0).unwrap().style.fg, palette('o').unwrap().fg);
        assert_eq!(fb.get(1, 1).unwrap().ch, '▒');
        assert_eq!(fb.get(5, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
    }

    #[test]
    fn sprite_set_missing_dir_is_an_error() {
        let err = SpriteSet::load("/definitely/not/here").unwrap_err();
        assert!(format!("{err:#}").contains("tank.txt"));
    }
}
