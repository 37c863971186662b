use crate::config::EngineConfig;
use crate::error::PipelineError;
use crate::report::{SafetyReport, build_report_document};
use safedoc_idf::Document;
use safedoc_layout::{LayoutError, LayoutOutcome, SectionAssembler};
use safedoc_render_core::{RenderSink, render_plan};
use safedoc_traits::{MonospaceMeasurer, TextMeasurer};

/// Plans and renders documents under one `EngineConfig`.
///
/// Holds no per-call state, so one generator can serve any number of
/// documents, including from several threads at once.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: EngineConfig,
}

impl ReportGenerator {
    pub fn new(config: EngineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Paginates `document`.
    ///
    /// If `measurer` fails and monospace fallback is enabled, the whole
    /// document is planned again with a monospace estimate. Mixing the two
    /// within one plan would break the estimate/render agreement.
    pub fn plan(
        &self,
        document: &Document,
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutOutcome, PipelineError> {
        match self.plan_with(document, measurer) {
            Err(LayoutError::MeasurementUnavailable(e)) if self.config.fallback_to_monospace => {
                log::warn!(
                    "Measurer '{}' unavailable ({}); falling back to monospace estimate",
                    measurer.name(),
                    e
                );
                let fallback = MonospaceMeasurer::new(self.config.monospace_advance);
                Ok(self.plan_with(document, &fallback)?)
            }
            other => Ok(other?),
        }
    }

    fn plan_with(
        &self,
        document: &Document,
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutOutcome, LayoutError> {
        SectionAssembler::new(self.config.page, &self.config.layout, measurer)?.assemble(document)
    }

    /// Replays a finished plan into `sink`.
    pub fn render(
        &self,
        outcome: &LayoutOutcome,
        sink: &mut dyn RenderSink,
    ) -> Result<(), PipelineError> {
        render_plan(&outcome.plan, sink)?;
        Ok(())
    }

    /// Builds the report's document and plans it.
    pub fn generate(
        &self,
        report: &SafetyReport,
        measurer: &dyn TextMeasurer,
    ) -> Result<LayoutOutcome, PipelineError> {
        let document = build_report_document(report, &self.config.report)?;
        self.plan(&document, measurer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Hazard, Severity};
    use safedoc_idf::{Block, DocumentBuilder, SectionBuilder, SectionKind};
    use safedoc_render_core::RecordingSink;
    use safedoc_style::TextStyle;
    use safedoc_traits::MeasureError;
    use safedoc_types::Px;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn broken(_: &str, _: &TextStyle) -> Result<Px, MeasureError> {
        Err(MeasureError::Unavailable {
            measurer: "broken",
            message: "no font bytes".into(),
        })
    }

    fn document() -> Document {
        DocumentBuilder::new()
            .section(
                SectionBuilder::new(SectionKind::Hazards)
                    .default_title()
                    .block(Block::paragraph("Overhead power lines near the crane path")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_fallback_to_monospace() {
        init_logger();
        let generator = ReportGenerator::new(EngineConfig::default()).unwrap();
        let outcome = generator.plan(&document(), &broken).unwrap();

        let expected = generator
            .plan(&document(), &MonospaceMeasurer::new(0.6))
            .unwrap();
        assert_eq!(outcome, expected);
    }

    #[test]
    fn test_fallback_disabled_surfaces_error() {
        let config = EngineConfig {
            fallback_to_monospace: false,
            ..Default::default()
        };
        let generator = ReportGenerator::new(config).unwrap();
        let err = generator.plan(&document(), &broken).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Layout(LayoutError::MeasurementUnavailable(_))
        ));
    }

    #[test]
    fn test_generate_and_render() {
        let generator = ReportGenerator::new(EngineConfig::default()).unwrap();
        let report = SafetyReport {
            hazards: vec![Hazard {
                title: "Crane swing radius".into(),
                description: "Workers may be struck by the load.".into(),
                severity: Severity::High,
                controls: vec!["The swing radius must be barricaded".into()],
            }],
            ..Default::default()
        };
        let outcome = generator
            .generate(&report, &MonospaceMeasurer::default())
            .unwrap();
        assert_eq!(outcome.plan.page_count, 1);

        let mut sink = RecordingSink::new(&generator.config().base_font);
        generator.render(&outcome, &mut sink).unwrap();
        assert!(sink.is_finished());
        assert!(!sink.commands().is_empty());
    }
}
