//! TUI Tanks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tanks::{core,input,term,types}`
//! and hosts the application-level pieces shared by the binary and tests:
//! [`config::AppConfig`] and [`logging::init`].

pub mod config;
pub mod logging;

pub use tui_tanks_core as core;
pub use tui_tanks_input as input;
pub use tui_tanks_term as term;
pub use tui_tanks_types as types;
