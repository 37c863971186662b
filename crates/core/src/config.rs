use crate::error::PipelineError;
use safedoc_layout::LayoutConfig;
use safedoc_style::PageGeometry;
use safedoc_types::Px;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a `SafetyReport` is turned into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOptions {
    pub job_steps_per_page: usize,
    pub photos_per_page: usize,
    /// Hazards listed in the summary, highest severity first.
    pub summary_hazard_count: usize,
    pub simplify_language: bool,
    pub photo_box_width: Px,
    pub photo_box_height: Px,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            job_steps_per_page: 4,
            photos_per_page: 2,
            summary_hazard_count: 3,
            simplify_language: true,
            photo_box_width: 360.0,
            photo_box_height: 240.0,
        }
    }
}

/// Everything one generation call needs besides the document and measurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub page: PageGeometry,
    pub layout: LayoutConfig,
    pub report: ReportOptions,
    /// Retry with a monospace estimate when the real measurer fails.
    pub fallback_to_monospace: bool,
    pub monospace_advance: f32,
    /// Font family handed to render sinks.
    pub base_font: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            layout: LayoutConfig::default(),
            report: ReportOptions::default(),
            fallback_to_monospace: true,
            monospace_advance: 0.6,
            base_font: "Helvetica".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        log::debug!("Loading engine configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.page.validate()?;
        self.layout.validate()?;
        if self.report.job_steps_per_page == 0 || self.report.photos_per_page == 0 {
            return Err(PipelineError::Config(
                "per-page counts must be at least 1".to_string(),
            ));
        }
        if !(self.report.photo_box_width > 0.0 && self.report.photo_box_height > 0.0) {
            return Err(PipelineError::Config(format!(
                "photo box {}x{} must be positive",
                self.report.photo_box_width, self.report.photo_box_height
            )));
        }
        if !(self.monospace_advance.is_finite() && self.monospace_advance > 0.0) {
            return Err(PipelineError::Config(format!(
                "monospace advance {} must be positive",
                self.monospace_advance
            )));
        }
        Ok(())
    }
}
