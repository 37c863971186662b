use crate::cursor::FlowCursor;
use crate::interface::{BlockLayout, MeasureContext};
use crate::nodes::{BlockMeasure, heading};
use crate::output::{BlockOutcome, LayoutWarning, Placement, PlacementOrigin, PlanBuilder};
use crate::LayoutError;
use safedoc_idf::{Block, PlacementPolicy, Section, SectionKind};
use safedoc_types::{BlockId, Px};

pub struct FitAnalysis {
    pub fits: bool,
    pub remaining_height: Px,
}

/// Centralized logic to check if a block fits below the cursor.
///
/// The comparison is exact: a block whose bottom lands precisely on
/// `content_bottom` fits.
pub fn check_fit(cursor_y: Px, height: Px, content_bottom: Px) -> FitAnalysis {
    FitAnalysis {
        fits: cursor_y + height <= content_bottom,
        remaining_height: (content_bottom - cursor_y).max(0.0),
    }
}

/// Where the planner is with the block currently being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerState {
    /// Trying the block on the current page.
    Placing,
    /// The block did not fit; the next page has to start.
    Overflowed,
    /// The block has been placed.
    Done,
}

/// Places the blocks of one section, one at a time, breaking pages as needed.
pub struct PageBreakPlanner<'c, 'm> {
    ctx: &'c MeasureContext<'m>,
    section: SectionKind,
    x: Px,
    width: Px,
    per_page: Option<usize>,
    heading: Option<BlockLayout>,
    continued_heading: Option<BlockLayout>,
    state: PlannerState,
    heading_emitted: bool,
    last_page: Option<usize>,
    placed_on_page: usize,
}

impl<'c, 'm> PageBreakPlanner<'c, 'm> {
    pub fn new(
        ctx: &'c MeasureContext<'m>,
        section: &Section,
        cursor: &FlowCursor,
    ) -> Result<Self, LayoutError> {
        let geometry = cursor.geometry();
        let width = geometry.content_width();

        let mut heading_layout = None;
        let mut continued_layout = None;
        if let Some(title) = section.title() {
            let layout = heading::measure(title, width, ctx)?;
            if !layout.items.is_empty() {
                heading_layout = Some(layout);
                if section.continuation_heading() {
                    continued_layout =
                        Some(heading::measure(&heading::continued_title(title), width, ctx)?);
                }
            }
        }

        let per_page = match section.policy() {
            PlacementPolicy::FixedCount { per_page } => Some(per_page),
            PlacementPolicy::DynamicFit | PlacementPolicy::SinglePage => None,
        };

        Ok(Self {
            ctx,
            section: section.kind(),
            x: geometry.content_left(),
            width,
            per_page,
            heading: heading_layout,
            continued_heading: continued_layout,
            state: PlannerState::Done,
            heading_emitted: false,
            last_page: None,
            placed_on_page: 0,
        })
    }

    pub fn state(&self) -> PlannerState {
        self.state
    }

    /// Height of the whole section stacked on one page: heading, blocks and
    /// the spacing between them.
    pub fn section_height(&self, blocks: &[(BlockId, Block)]) -> Result<Px, LayoutError> {
        let spacing = self.ctx.config().inter_block_spacing;
        let mut total = self.heading.as_ref().map_or(0.0, |h| h.height);
        for (i, (_, block)) in blocks.iter().enumerate() {
            if i > 0 {
                total += spacing;
            }
            total += block.estimate_height(self.width, self.ctx)?;
        }
        Ok(total)
    }

    pub fn place_block(
        &mut self,
        cursor: &mut FlowCursor,
        id: BlockId,
        block: &Block,
        out: &mut PlanBuilder,
    ) -> Result<(), LayoutError> {
        let layout = block.measure(self.width, self.ctx)?;
        let mut warnings = Vec::new();
        if let Block::Image {
            key,
            unavailable: Some(reason),
            ..
        } = block
        {
            log::warn!("Image '{}' unavailable for block {}: {}", key, id, reason);
            warnings.push(LayoutWarning::ImageUnavailable {
                block: id,
                key: key.clone(),
                reason: reason.clone(),
            });
        }

        self.state = PlannerState::Placing;
        while self.state != PlannerState::Done {
            match self.state {
                PlannerState::Placing => {
                    let mut heading = self.due_heading(cursor);
                    let mut heading_height = heading.as_ref().map_or(0.0, |(h, _)| h.height);
                    let capped = self
                        .per_page
                        .is_some_and(|n| self.placed_on(cursor) >= n);
                    let content_bottom = cursor.geometry().content_bottom();
                    let mut fit =
                        check_fit(cursor.y(), heading_height + layout.height, content_bottom);

                    // A block that fits a page on its own never ends below the
                    // content bottom; the heading gives way instead.
                    if !capped && !fit.fits && heading.is_some() && cursor.is_at_page_top() {
                        let alone = check_fit(cursor.y(), layout.height, content_bottom);
                        if alone.fits {
                            log::debug!(
                                "Dropping {:?} heading on page {} to fit block {}",
                                self.section,
                                cursor.page_index() + 1,
                                id
                            );
                            heading = None;
                            heading_height = 0.0;
                            self.heading_emitted = true;
                            fit = alone;
                        }
                    }

                    if capped || !(fit.fits || cursor.is_at_page_top()) {
                        self.state = PlannerState::Overflowed;
                        continue;
                    }

                    if !fit.fits {
                        let available = cursor.geometry().content_height() - heading_height;
                        log::warn!(
                            "Block {} needs {}pt but a page holds {}pt; placing it alone",
                            id,
                            layout.height,
                            available
                        );
                        warnings.push(LayoutWarning::OversizedBlock {
                            block: id,
                            height: layout.height,
                            available,
                        });
                    }

                    if let Some((heading, continued)) = heading {
                        self.emit_heading(cursor, heading, continued, out);
                    }
                    let top_y = cursor.place(layout.height);
                    let page_index = cursor.page_index();
                    out.push(Placement {
                        page_index,
                        section: self.section,
                        origin: PlacementOrigin::Block { id },
                        x: self.x,
                        top_y,
                        width: self.width,
                        height: layout.height,
                        layout: layout.clone(),
                    });
                    cursor.advance(self.ctx.config().inter_block_spacing);

                    self.placed_on_page = self.placed_on(cursor) + 1;
                    self.last_page = Some(page_index);

                    let outcome = if warnings.is_empty() {
                        BlockOutcome::Placed { page_index, top_y }
                    } else {
                        BlockOutcome::PlacedWithWarning {
                            page_index,
                            top_y,
                            warnings: std::mem::take(&mut warnings),
                        }
                    };
                    out.record(id, self.section, outcome);
                    self.state = PlannerState::Done;
                }
                PlannerState::Overflowed => {
                    log::debug!(
                        "Block {} overflows page {} of section {:?}",
                        id,
                        cursor.page_index() + 1,
                        self.section
                    );
                    cursor.break_page();
                    self.state = PlannerState::Placing;
                }
                PlannerState::Done => {}
            }
        }
        Ok(())
    }

    /// Blocks of this section already on the cursor's page.
    fn placed_on(&self, cursor: &FlowCursor) -> usize {
        if self.last_page == Some(cursor.page_index()) {
            self.placed_on_page
        } else {
            0
        }
    }

    /// The heading that must precede the next block on the cursor's page.
    fn due_heading(&self, cursor: &FlowCursor) -> Option<(BlockLayout, bool)> {
        if !self.heading_emitted {
            return self.heading.clone().map(|h| (h, false));
        }
        if self.last_page != Some(cursor.page_index()) {
            return self.continued_heading.clone().map(|h| (h, true));
        }
        None
    }

    fn emit_heading(
        &mut self,
        cursor: &mut FlowCursor,
        heading: BlockLayout,
        continued: bool,
        out: &mut PlanBuilder,
    ) {
        let top_y = cursor.place(heading.height);
        out.push(Placement {
            page_index: cursor.page_index(),
            section: self.section,
            origin: PlacementOrigin::SectionHeading { continued },
            x: self.x,
            top_y,
            width: self.width,
            height: heading.height,
            layout: heading,
        });
        self.heading_emitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_is_accepted() {
        assert!(check_fit(100.0, 620.0, 720.0).fits);
        assert!(!check_fit(100.0, 620.5, 720.0).fits);
    }

    #[test]
    fn test_remaining_never_negative() {
        let fit = check_fit(730.0, 1.0, 720.0);
        assert!(!fit.fits);
        assert_eq!(fit.remaining_height, 0.0);
    }
}
