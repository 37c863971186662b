//! Rendering abstractions.
//!
//! This crate provides:
//! - `RenderSink`, the drawing primitives a host implements
//! - `render_plan`, which replays a `PlacementPlan` into a sink
//! - `RecordingSink` and `JsonLinesSink` for tests and debugging
//!
//! Rendering never re-measures or re-wraps text: it draws exactly the
//! `BlockLayout` the planner stored with each placement.

mod error;
mod replay;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use replay::render_plan;
pub use traits::{Paint, RenderSink};
pub use types::{DrawCommand, JsonLinesSink, RecordingSink};
