//! Terminal "game renderer" module.
//!
//! This is the rendering collaborator for the tank game: a framebuffer of
//! styled cells, text-art sprites drawn through 2D affine transforms, a view
//! that lays out the playfield and debug panel, and a renderer that flushes
//! frames to a real terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw sprites the way a 2D engine would (scale, rotate, translate)
//! - Allow precise control over aspect ratio (e.g. 4x2 cells per block)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprite;
pub mod tick_rate;

pub use tui_tanks_core as core;
pub use tui_tanks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite::{draw_sprite, palette, Sprite, SpriteSet, Texel};
pub use tick_rate::{target_tps, TickRateMeter};
