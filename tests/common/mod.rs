pub mod fixtures;
pub mod plan_assertions;

use safedoc::{
    Document, EngineConfig, LayoutOutcome, MonospaceMeasurer, PipelineError, PlacementPlan,
    ReportGenerator, SafetyReport,
};
use safedoc_layout::LayoutItem;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Measures every grapheme at `font_size` points, so 10pt text is 10pt per char.
pub fn char_measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::new(1.0)
}

/// Plan a document with the default engine configuration.
pub fn plan_document(document: &Document) -> Result<LayoutOutcome, PipelineError> {
    let generator = ReportGenerator::new(EngineConfig::default())?;
    generator.plan(document, &char_measurer())
}

/// Build and plan a report under `config`.
pub fn generate_report(
    report: &SafetyReport,
    config: EngineConfig,
) -> Result<LayoutOutcome, PipelineError> {
    let generator = ReportGenerator::new(config)?;
    generator.generate(report, &char_measurer())
}

/// All text drawn on one page, one line per text item.
pub fn page_text(plan: &PlacementPlan, page_index: usize) -> String {
    let mut text = String::new();
    for placement in plan.on_page(page_index) {
        for item in placement.drawables() {
            if let LayoutItem::Text { text: line, .. } = item {
                text.push_str(&line);
                text.push('\n');
            }
        }
    }
    text
}

/// Number of document blocks (headings excluded) on each page.
pub fn blocks_per_page(plan: &PlacementPlan) -> Vec<usize> {
    plan.pages()
        .iter()
        .map(|page| page.iter().filter(|p| p.block_id().is_some()).count())
        .collect()
}
