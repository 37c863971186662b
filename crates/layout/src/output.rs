//! Output types from the layout engine.
//!
//! A `PlacementPlan` says where every block goes; a `GenerationReport` says
//! what happened to each block on the way there.

use crate::interface::{BlockLayout, LayoutItem};
use safedoc_idf::SectionKind;
use safedoc_style::PageGeometry;
use safedoc_types::{BlockId, ImageKey, Px};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlacementOrigin {
    Block { id: BlockId },
    /// Heading chrome emitted by the assembler, not a document block.
    SectionHeading { continued: bool },
}

/// One block (or heading) positioned on one page, in absolute page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub page_index: usize,
    pub section: SectionKind,
    pub origin: PlacementOrigin,
    pub x: Px,
    pub top_y: Px,
    pub width: Px,
    pub height: Px,
    pub layout: BlockLayout,
}

impl Placement {
    pub fn bottom(&self) -> Px {
        self.top_y + self.height
    }

    pub fn block_id(&self) -> Option<BlockId> {
        match self.origin {
            PlacementOrigin::Block { id } => Some(id),
            PlacementOrigin::SectionHeading { .. } => None,
        }
    }

    /// The block's drawables moved to page coordinates.
    pub fn drawables(&self) -> impl Iterator<Item = LayoutItem> + '_ {
        self.layout
            .items
            .iter()
            .map(move |item| item.translate(self.x, self.top_y))
    }
}

/// Every placement of one generation call, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementPlan {
    pub geometry: PageGeometry,
    pub page_count: usize,
    pub placements: Vec<Placement>,
}

impl PlacementPlan {
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    pub fn on_page(&self, page_index: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.page_index == page_index)
    }

    /// Placements grouped by page, one entry per page in order.
    pub fn pages(&self) -> Vec<Vec<&Placement>> {
        let mut pages = vec![Vec::new(); self.page_count];
        for placement in &self.placements {
            pages[placement.page_index].push(placement);
        }
        pages
    }

    /// Document blocks only, without heading chrome.
    pub fn block_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.block_id().is_some())
    }

    pub fn placement_for(&self, id: BlockId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.block_id() == Some(id))
    }

    pub fn headings(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.block_id().is_none())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutWarning {
    #[error("Block {block} is {height}pt tall but a page holds only {available}pt; placed alone and clipped")]
    OversizedBlock {
        block: BlockId,
        height: Px,
        available: Px,
    },
    #[error("Image '{key}' for block {block} is unavailable ({reason}); drew a placeholder")]
    ImageUnavailable {
        block: BlockId,
        key: ImageKey,
        reason: String,
    },
    #[error("Section {section:?} needs {required}pt but a page holds {available}pt; paginated dynamically")]
    SinglePageOverflow {
        section: SectionKind,
        required: Px,
        available: Px,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BlockOutcome {
    Placed {
        page_index: usize,
        top_y: Px,
    },
    /// Placed, but not exactly as requested.
    PlacedWithWarning {
        page_index: usize,
        top_y: Px,
        warnings: Vec<LayoutWarning>,
    },
}

impl BlockOutcome {
    pub fn page_index(&self) -> usize {
        match self {
            BlockOutcome::Placed { page_index, .. }
            | BlockOutcome::PlacedWithWarning { page_index, .. } => *page_index,
        }
    }

    pub fn top_y(&self) -> Px {
        match self {
            BlockOutcome::Placed { top_y, .. }
            | BlockOutcome::PlacedWithWarning { top_y, .. } => *top_y,
        }
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        match self {
            BlockOutcome::Placed { .. } => &[],
            BlockOutcome::PlacedWithWarning { warnings, .. } => warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub block: BlockId,
    pub section: SectionKind,
    pub outcome: BlockOutcome,
}

/// Per-block results plus every warning raised, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub outcomes: Vec<BlockReport>,
    pub warnings: Vec<LayoutWarning>,
}

impl GenerationReport {
    pub fn outcome(&self, block: BlockId) -> Option<&BlockOutcome> {
        self.outcomes
            .iter()
            .find(|r| r.block == block)
            .map(|r| &r.outcome)
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOutcome {
    pub plan: PlacementPlan,
    pub report: GenerationReport,
}

/// Accumulates placements and outcomes while the planner runs.
pub(crate) struct PlanBuilder {
    geometry: PageGeometry,
    page_count: usize,
    placements: Vec<Placement>,
    report: GenerationReport,
}

impl PlanBuilder {
    pub(crate) fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_count: 0,
            placements: Vec::new(),
            report: GenerationReport::default(),
        }
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        self.page_count = self.page_count.max(placement.page_index + 1);
        self.placements.push(placement);
    }

    pub(crate) fn record(&mut self, block: BlockId, section: SectionKind, outcome: BlockOutcome) {
        self.report
            .warnings
            .extend(outcome.warnings().iter().cloned());
        self.report.outcomes.push(BlockReport {
            block,
            section,
            outcome,
        });
    }

    pub(crate) fn warn(&mut self, warning: LayoutWarning) {
        self.report.warnings.push(warning);
    }

    pub(crate) fn finish(self) -> LayoutOutcome {
        LayoutOutcome {
            plan: PlacementPlan {
                geometry: self.geometry,
                page_count: self.page_count,
                placements: self.placements,
            },
            report: self.report,
        }
    }
}
