use crate::block::Block;
use safedoc_types::BlockId;
use serde::Serialize;

/// The named regions of a safety report, in their usual document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Summary,
    ProjectInfo,
    Hazards,
    JobSteps,
    Photos,
    EmergencyAndSignatures,
}

impl SectionKind {
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Executive Summary",
            SectionKind::ProjectInfo => "Project Information",
            SectionKind::Hazards => "Identified Hazards",
            SectionKind::JobSteps => "Job Steps",
            SectionKind::Photos => "Site Photos",
            SectionKind::EmergencyAndSignatures => "Emergency Information & Signatures",
        }
    }
}

/// How the assembler paginates a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementPolicy {
    /// Page breaks follow measured heights block by block.
    DynamicFit,
    /// At most `per_page` blocks per page, whatever their height.
    FixedCount { per_page: usize },
    /// The caller has trimmed the content to fit one page.
    SinglePage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub(crate) kind: SectionKind,
    pub(crate) title: Option<String>,
    pub(crate) policy: PlacementPolicy,
    pub(crate) break_before: bool,
    pub(crate) continuation_heading: bool,
    pub(crate) blocks: Vec<(BlockId, Block)>,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Whether the section starts on a fresh page.
    pub fn break_before(&self) -> bool {
        self.break_before
    }

    /// Whether pages after the first repeat the title as "<title> (continued)".
    pub fn continuation_heading(&self) -> bool {
        self.continuation_heading
    }

    pub fn blocks(&self) -> &[(BlockId, Block)] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// An ordered, validated list of sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub(crate) sections: Vec<Section>,
    pub(crate) block_count: usize,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// All blocks in document order with their section.
    pub fn blocks(&self) -> impl Iterator<Item = (SectionKind, BlockId, &Block)> + '_ {
        self.sections.iter().flat_map(|section| {
            section
                .blocks
                .iter()
                .map(move |(id, block)| (section.kind, *id, block))
        })
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks()
            .find(|(_, candidate, _)| *candidate == id)
            .map(|(_, _, block)| block)
    }
}
