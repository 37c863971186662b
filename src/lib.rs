//! Deterministic pagination for structured safety reports.
//!
//! The workspace splits into:
//! - `safedoc-idf`: the block/section document model
//! - `safedoc-layout`: line breaking, height estimation and page planning
//! - `safedoc-render-core`: render sinks and plan replay
//! - `safedoc-core`: report model, simplification, generation facade
//!
//! This crate adds batch generation over an executor and the `safedoc` CLI.

pub mod batch;
pub mod executor;

pub use batch::{generate_batch, generate_batch_with};
pub use executor::{Executor, ExecutorImpl, SyncExecutor};

#[cfg(feature = "rayon-executor")]
pub use executor::RayonExecutor;

pub use safedoc_core::{
    EngineConfig, PipelineError, ReportGenerator, ReportOptions, SafetyReport,
    build_report_document,
};
pub use safedoc_idf::{
    Block, Document, DocumentBuilder, DocumentError, PlacementPolicy, SectionBuilder, SectionKind,
};
pub use safedoc_layout::{
    BlockOutcome, GenerationReport, LayoutConfig, LayoutError, LayoutOutcome, LayoutWarning,
    LineBreakOptions, Placement, PlacementPlan, break_lines, paginate,
};
pub use safedoc_render_core::{DrawCommand, RecordingSink, RenderSink, render_plan};
pub use safedoc_style::{Margins, PageGeometry, PageSize, TextStyle};
pub use safedoc_traits::{MeasureError, MonospaceMeasurer, TextMeasurer};
