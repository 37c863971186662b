use crate::algorithms::pagination::{PageBreakPlanner, check_fit};
use crate::config::LayoutConfig;
use crate::cursor::FlowCursor;
use crate::interface::MeasureContext;
use crate::output::{LayoutOutcome, LayoutWarning, PlanBuilder};
use crate::LayoutError;
use safedoc_idf::{Document, PlacementPolicy, Section};
use safedoc_style::PageGeometry;
use safedoc_traits::TextMeasurer;

/// Walks a document section by section and applies each section's policy.
pub struct SectionAssembler<'a> {
    geometry: PageGeometry,
    ctx: MeasureContext<'a>,
}

impl<'a> SectionAssembler<'a> {
    pub fn new(
        geometry: PageGeometry,
        config: &'a LayoutConfig,
        measurer: &'a dyn TextMeasurer,
    ) -> Result<Self, LayoutError> {
        geometry.validate()?;
        config.validate()?;
        Ok(Self {
            geometry,
            ctx: MeasureContext::new(measurer, config),
        })
    }

    pub fn assemble(&self, document: &Document) -> Result<LayoutOutcome, LayoutError> {
        let mut out = PlanBuilder::new(self.geometry);
        if document.is_empty() {
            log::info!("Document has no blocks; nothing to paginate");
            return Ok(out.finish());
        }

        let mut cursor = FlowCursor::new(self.geometry);
        for section in document.sections() {
            self.assemble_section(section, &mut cursor, &mut out)?;
        }

        let outcome = out.finish();
        let (hits, misses) = self.ctx.registry().stats();
        log::debug!(
            "Width cache for '{}': {} hits, {} misses",
            self.ctx.measurer_name(),
            hits,
            misses
        );
        log::info!(
            "Paginated {} blocks onto {} pages with {} warnings",
            outcome.report.outcomes.len(),
            outcome.plan.page_count,
            outcome.report.warnings.len()
        );
        Ok(outcome)
    }

    fn assemble_section(
        &self,
        section: &Section,
        cursor: &mut FlowCursor,
        out: &mut PlanBuilder,
    ) -> Result<(), LayoutError> {
        if section.is_empty() {
            log::debug!("Skipping empty section {:?}", section.kind());
            return Ok(());
        }
        if section.break_before() {
            cursor.break_page();
        }

        let mut planner = PageBreakPlanner::new(&self.ctx, section, cursor)?;
        log::debug!(
            "Section {:?}: {} blocks, {:?}",
            section.kind(),
            section.blocks().len(),
            section.policy()
        );

        match section.policy() {
            PlacementPolicy::DynamicFit | PlacementPolicy::FixedCount { .. } => {}
            PlacementPolicy::SinglePage => {
                let required = planner.section_height(section.blocks())?;
                let available = self.geometry.content_height();
                if required > available {
                    log::warn!(
                        "Section {:?} needs {}pt on a single page but only {}pt exist",
                        section.kind(),
                        required,
                        available
                    );
                    out.warn(LayoutWarning::SinglePageOverflow {
                        section: section.kind(),
                        required,
                        available,
                    });
                } else if !check_fit(cursor.y(), required, self.geometry.content_bottom()).fits {
                    cursor.break_page();
                }
            }
        }

        for (id, block) in section.blocks() {
            planner.place_block(cursor, *id, block, out)?;
        }
        Ok(())
    }
}

/// One-shot pagination of `document`.
pub fn paginate(
    document: &Document,
    geometry: PageGeometry,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Result<LayoutOutcome, LayoutError> {
    SectionAssembler::new(geometry, config, measurer)?.assemble(document)
}
