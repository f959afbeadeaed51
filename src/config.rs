//! Application configuration layered over [`GameConfig`].

use std::path::PathBuf;

use crate::core::GameConfig;
use crate::term::GameView;
use crate::types::{DEFAULT_KEY_RELEASE_MS, TICK_MS};

/// Default sprite directory
pub const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Directory holding the mandatory sprite files
    pub asset_dir: PathBuf,
    /// Log file; `None` logs warnings to stderr only
    pub log_path: Option<PathBuf>,
    /// Held-key timeout for terminals without release events
    pub key_release_timeout_ms: u64,
    /// Fixed step interval
    pub tick_ms: u64,
    /// Terminal columns per block
    pub cell_w: u16,
    /// Terminal rows per block
    pub cell_h: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            log_path: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_MS as u64,
            tick_ms: TICK_MS as u64,
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl AppConfig {
    /// Read `TANKS_*` environment variables on top of the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let asset_dir = env::var("TANKS_ASSET_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.asset_dir);

        let log_path = env::var("TANKS_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let key_release_timeout_ms = env::var("TANKS_KEY_RELEASE_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let tick_ms = env::var("TANKS_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.tick_ms);

        let cell_w = env::var("TANKS_CELL_W")
            .ok()
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|w| (1..=GameView::MAX_CELLS_PER_BLOCK).contains(w))
            .unwrap_or(defaults.cell_w);

        let cell_h = env::var("TANKS_CELL_H")
            .ok()
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|h| (1..=GameView::MAX_CELLS_PER_BLOCK).contains(h))
            .unwrap_or(defaults.cell_h);

        Self {
            game: GameConfig::from_env(),
            asset_dir,
            log_path,
            key_release_timeout_ms,
            tick_ms,
            cell_w,
            cell_h,
        }
    }
}
