use crate::block::Block;
use crate::document::{Document, PlacementPolicy, Section, SectionKind};
use safedoc_types::BlockId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Malformed block {index} in section {section:?}: {reason}")]
    MalformedBlock {
        section: SectionKind,
        index: usize,
        reason: String,
    },
    #[error("Invalid placement policy for section {section:?}: {reason}")]
    InvalidPolicy {
        section: SectionKind,
        reason: String,
    },
    #[error("Document holds {0} blocks, more than a BlockId can address")]
    TooManyBlocks(usize),
}

/// Collects the blocks of one section before validation.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    kind: SectionKind,
    title: Option<String>,
    policy: PlacementPolicy,
    break_before: bool,
    continuation_heading: bool,
    blocks: Vec<Block>,
}

impl SectionBuilder {
    /// Starts a dynamic-fit section without a title.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            title: None,
            policy: PlacementPolicy::DynamicFit,
            break_before: false,
            continuation_heading: false,
            blocks: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Uses the kind's stock title.
    pub fn default_title(self) -> Self {
        let title = self.kind.default_title();
        self.title(title)
    }

    pub fn policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn break_before(mut self, yes: bool) -> Self {
        self.break_before = yes;
        self
    }

    pub fn continuation_heading(mut self, yes: bool) -> Self {
        self.continuation_heading = yes;
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks<I: IntoIterator<Item = Block>>(mut self, blocks: I) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Builds an immutable `Document`, validating every block up front.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    sections: Vec<SectionBuilder>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    pub fn push_section(&mut self, section: SectionBuilder) {
        self.sections.push(section);
    }

    pub fn build(self) -> Result<Document, DocumentError> {
        let mut next_id: usize = 0;
        let mut sections = Vec::with_capacity(self.sections.len());

        for builder in self.sections {
            if let PlacementPolicy::FixedCount { per_page: 0 } = builder.policy {
                return Err(DocumentError::InvalidPolicy {
                    section: builder.kind,
                    reason: "per-page count must be at least 1".to_string(),
                });
            }

            let mut blocks = Vec::with_capacity(builder.blocks.len());
            for (index, block) in builder.blocks.into_iter().enumerate() {
                block
                    .validate()
                    .map_err(|reason| DocumentError::MalformedBlock {
                        section: builder.kind,
                        index,
                        reason,
                    })?;
                let id = u32::try_from(next_id).map_err(|_| DocumentError::TooManyBlocks(next_id))?;
                blocks.push((BlockId(id), block));
                next_id += 1;
            }

            sections.push(Section {
                kind: builder.kind,
                title: builder.title,
                policy: builder.policy,
                break_before: builder.break_before,
                continuation_heading: builder.continuation_heading,
                blocks,
            });
        }

        Ok(Document {
            sections,
            block_count: next_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_in_document_order() {
        let doc = DocumentBuilder::new()
            .section(
                SectionBuilder::new(SectionKind::Hazards)
                    .block(Block::paragraph("a"))
                    .block(Block::paragraph("b")),
            )
            .section(SectionBuilder::new(SectionKind::JobSteps).block(Block::Divider))
            .build()
            .unwrap();

        let ids: Vec<_> = doc.blocks().map(|(_, id, _)| id).collect();
        assert_eq!(ids, vec![BlockId(0), BlockId(1), BlockId(2)]);
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.block(BlockId(2)), Some(&Block::Divider));
        assert_eq!(doc.sections()[1].kind(), SectionKind::JobSteps);
    }

    #[test]
    fn test_malformed_block_fails_fast() {
        let err = DocumentBuilder::new()
            .section(
                SectionBuilder::new(SectionKind::Photos)
                    .block(Block::spacer(4.0))
                    .block(Block::spacer(f32::NAN)),
            )
            .build()
            .unwrap_err();
        match err {
            DocumentError::MalformedBlock { section, index, .. } => {
                assert_eq!(section, SectionKind::Photos);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_zero_per_page_is_rejected() {
        let err = DocumentBuilder::new()
            .section(
                SectionBuilder::new(SectionKind::Photos)
                    .policy(PlacementPolicy::FixedCount { per_page: 0 }),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPolicy { .. }));
    }

    #[test]
    fn test_empty_document() {
        let doc = DocumentBuilder::new().build().unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc, Document::empty());
    }
}
