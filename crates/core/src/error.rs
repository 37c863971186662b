//! Defines the unified error type for all generation operations.

use safedoc_idf::DocumentError;
use safedoc_layout::LayoutError;
use safedoc_render_core::RenderError;
use safedoc_style::StyleError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document: {0}")]
    Document(#[from] DocumentError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Other pipeline error: {0}")]
    Other(String),
}

impl From<RenderError> for PipelineError {
    fn from(e: RenderError) -> Self {
        PipelineError::Render(e.to_string())
    }
}

impl From<StyleError> for PipelineError {
    fn from(e: StyleError) -> Self {
        PipelineError::Config(e.to_string())
    }
}
