//! chart-rs: headless time-series line chart core.
//!
//! The crate turns series of `(timestamp, value)` samples plus user options
//! into a deterministic `RenderFrame` of draw primitives and labels, and
//! resolves pointer hover into a crosshair and tooltip. Drawing itself is
//! delegated to a `Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartOptions};
pub use error::{ChartError, ChartResult};
