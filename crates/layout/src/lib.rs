//! Two-pass pagination for structured safety reports.
//!
//! Every block is measured (wrapped against a `TextMeasurer`) before it is
//! placed, and the same measured `BlockLayout` is what the renderer later
//! draws. Page breaks are decided entirely in this crate; the output is a
//! `PlacementPlan` of absolute coordinates, never pixels.

use safedoc_style::StyleError;
use safedoc_traits::MeasureError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(#[from] MeasureError),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

impl From<StyleError> for LayoutError {
    fn from(e: StyleError) -> Self {
        LayoutError::InvalidGeometry(e.to_string())
    }
}

pub mod algorithms;
pub mod assembler;
pub mod cache;
pub mod config;
pub mod cursor;
pub mod interface;
pub mod nodes;
pub mod output;
pub mod text;

pub use self::algorithms::pagination::{PageBreakPlanner, PlannerState};
pub use self::assembler::{SectionAssembler, paginate};
pub use self::cache::{StyleMetrics, StyleRegistry};
pub use self::config::{LayoutConfig, LineBreakOptions};
pub use self::cursor::FlowCursor;
pub use self::interface::{BlockLayout, LayoutItem, MeasureContext};
pub use self::nodes::{BlockMeasure, estimate_height, measure_block};
pub use self::output::{
    BlockOutcome, BlockReport, GenerationReport, LayoutOutcome, LayoutWarning, Placement,
    PlacementOrigin, PlacementPlan,
};
pub use self::text::wrapper::break_lines;

// Re-export geometry types used by callers to prevent type mismatches
pub use safedoc_types::{BlockId, Px, Rect, Size};

#[cfg(test)]
mod test_utils;
