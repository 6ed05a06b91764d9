/// Command-line interface and the end-to-end runner
pub mod cli;
/// Defaults and tuning constants
pub mod configuration;
/// Error types for the whole crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Terminal spinner while solving
pub mod progress;
/// Sprite sheets, map rendering and PNG export
pub mod raster;
