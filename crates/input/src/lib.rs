//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::Control`]s and keeps
//! a held-control tracker that the run loop polls once per simulation step
//! (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_tanks_types as types;

pub use handler::HeldControls;
pub use map::{map_key, pointer_probe};
