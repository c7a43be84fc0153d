/*
[INPUT]:  Public API exports for the mytasks CLI crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod screen;
pub mod screens;
pub mod theme;

// Re-export main types for convenience
pub use config::AppConfig;
pub use screen::{LoadState, ViewScope};
pub use screens::{AddScreen, EditScreen, ListScreen, Screen, ViewScreen, parse_assignment};
