//! Game configuration: screen layout and stage resource location.

use std::path::PathBuf;

use crate::geometry::PlayfieldGeometry;
use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH, SIDE_PANEL_WIDTH};

/// Default location of the stage grid resource
pub const DEFAULT_STAGE_PATH: &str = "assets/Stage1.txt";

/// Immutable game configuration, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical screen width (field plus side panel)
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,
    /// Space right of the field reserved for the debug panel
    pub side_panel_width: f32,
    /// Grid resource read at startup
    pub stage_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            side_panel_width: SIDE_PANEL_WIDTH,
            stage_path: PathBuf::from(DEFAULT_STAGE_PATH),
        }
    }
}

impl GameConfig {
    /// Read overrides from `TANKS_*` environment variables.
    ///
    /// Values that do not parse, or that would leave no room for the field,
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let screen_width = env::var("TANKS_SCREEN_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|w| w.is_finite() && *w > defaults.side_panel_width)
            .unwrap_or(defaults.screen_width);

        let screen_height = env::var("TANKS_SCREEN_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(defaults.screen_height);

        let stage_path = env::var("TANKS_STAGE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.stage_path);

        Self {
            screen_width,
            screen_height,
            side_panel_width: defaults.side_panel_width,
            stage_path,
        }
    }

    pub fn field_width(&self) -> f32 {
        self.screen_width - self.side_panel_width
    }

    pub fn field_height(&self) -> f32 {
        self.screen_height
    }

    pub fn geometry(&self) -> PlayfieldGeometry {
        PlayfieldGeometry::new(self.field_width(), self.field_height())
    }
}
