//! # safedoc-core
//!
//! Integration layer for safety-report generation:
//! - **config**: engine configuration loaded from JSON
//! - **report**: the safety-report input model and its section mapping
//! - **simplify**: plain-language rewriting applied before layout
//! - **generator**: plan with fallback, then render
//! - **error**: the unified error type
//!
//! This crate does no font loading, image decoding or file output; those
//! arrive through `TextMeasurer` and `RenderSink` implementations.

// Re-export foundation crates
pub use safedoc_idf as idf;
pub use safedoc_layout as layout;
pub use safedoc_render_core as render;
pub use safedoc_style as style;
pub use safedoc_traits as traits;
pub use safedoc_types as types;

pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod simplify;

pub use config::{EngineConfig, ReportOptions};
pub use error::PipelineError;
pub use generator::ReportGenerator;
pub use report::{
    Contact, EmergencyInfo, Hazard, JobStep, Photo, ProjectDetails, SafetyReport, Severity,
    Signature, build_report_document,
};
pub use simplify::{Simplifier, action_phrase, simplify};
