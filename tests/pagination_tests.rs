mod common;
use common::{TestResult, blocks_per_page, char_measurer, init_logger};
use safedoc::{
    Block, BlockOutcome, Document, DocumentBuilder, LayoutConfig, LayoutWarning, PageGeometry,
    PlacementPolicy, SectionBuilder, SectionKind, paginate,
};
use safedoc_types::{BlockId, Size};

fn spacer_document(heights: &[f32]) -> Result<Document, safedoc::DocumentError> {
    DocumentBuilder::new()
        .section(SectionBuilder::new(SectionKind::Hazards).blocks(heights.iter().map(|h| Block::spacer(*h))))
        .build()
}

fn spaced(spacing: f32) -> LayoutConfig {
    LayoutConfig {
        inter_block_spacing: spacing,
        min_block_height: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_hazards_overflow_onto_following_pages() -> TestResult {
    init_logger();
    let document = spacer_document(&[100.0, 650.0, 120.0])?;
    let outcome = paginate(
        &document,
        PageGeometry::borderless(500.0, 700.0),
        &spaced(8.0),
        &char_measurer(),
    )?;

    let positions: Vec<(usize, f32)> = (0..3)
        .map(|i| {
            let placed = outcome.report.outcome(BlockId(i)).expect("every block is reported");
            (placed.page_index(), placed.top_y())
        })
        .collect();
    assert_eq!(positions, vec![(0, 0.0), (1, 0.0), (2, 0.0)]);

    assert_page_count!(outcome, 3);
    assert_no_overflow!(outcome);
    Ok(())
}

#[test]
fn test_short_block_follows_after_spacing() -> TestResult {
    let document = spacer_document(&[100.0, 650.0, 40.0])?;
    let outcome = paginate(
        &document,
        PageGeometry::borderless(500.0, 700.0),
        &spaced(8.0),
        &char_measurer(),
    )?;

    let third = outcome.report.outcome(BlockId(2)).expect("third block reported");
    assert_eq!((third.page_index(), third.top_y()), (1, 658.0));
    assert_page_count!(outcome, 2);
    Ok(())
}

#[test]
fn test_fixed_count_photos_split_two_per_page() -> TestResult {
    init_logger();
    let photos = SectionBuilder::new(SectionKind::Photos)
        .default_title()
        .policy(PlacementPolicy::FixedCount { per_page: 2 })
        .blocks((1..=5).map(|i| {
            Block::image(
                format!("site-{}", i),
                Size::new(1200.0, 900.0),
                Size::new(200.0, 150.0),
            )
        }));
    let document = DocumentBuilder::new().section(photos).build()?;
    let outcome = paginate(
        &document,
        PageGeometry::default(),
        &LayoutConfig::default(),
        &char_measurer(),
    )?;

    assert_page_count!(outcome, 3);
    assert_eq!(blocks_per_page(&outcome.plan), vec![2, 2, 1]);
    assert_no_overflow!(outcome);
    Ok(())
}

#[test]
fn test_empty_document_has_no_pages() -> TestResult {
    let outcome = paginate(
        &Document::empty(),
        PageGeometry::default(),
        &LayoutConfig::default(),
        &char_measurer(),
    )?;
    assert_page_count!(outcome, 0);
    assert!(outcome.plan.placements.is_empty());
    assert!(outcome.report.outcomes.is_empty());
    Ok(())
}

#[test]
fn test_oversized_block_is_placed_with_warning() -> TestResult {
    let document = spacer_document(&[50.0, 900.0])?;
    let outcome = paginate(
        &document,
        PageGeometry::borderless(500.0, 700.0),
        &spaced(0.0),
        &char_measurer(),
    )?;

    match outcome.report.outcome(BlockId(1)) {
        Some(BlockOutcome::PlacedWithWarning {
            page_index,
            top_y,
            warnings,
        }) => {
            assert_eq!((*page_index, *top_y), (1, 0.0));
            assert!(matches!(
                warnings.as_slice(),
                [LayoutWarning::OversizedBlock { .. }]
            ));
        }
        other => panic!("expected an oversized warning, got {:?}", other),
    }
    assert!(!outcome.report.is_clean());
    Ok(())
}

#[test]
fn test_section_break_before_never_leaves_blank_page() -> TestResult {
    let document = DocumentBuilder::new()
        .section(SectionBuilder::new(SectionKind::Summary).block(Block::spacer(100.0)))
        .section(
            SectionBuilder::new(SectionKind::Photos)
                .break_before(true)
                .block(Block::spacer(100.0)),
        )
        .section(
            SectionBuilder::new(SectionKind::EmergencyAndSignatures)
                .break_before(true)
                .block(Block::spacer(100.0)),
        )
        .build()?;
    let outcome = paginate(
        &document,
        PageGeometry::borderless(500.0, 700.0),
        &spaced(0.0),
        &char_measurer(),
    )?;

    assert_page_count!(outcome, 3);
    for page in outcome.plan.pages() {
        assert!(!page.is_empty());
    }
    Ok(())
}

#[test]
fn test_paginating_twice_gives_identical_plans() -> TestResult {
    let document = DocumentBuilder::new()
        .section(
            SectionBuilder::new(SectionKind::Hazards)
                .default_title()
                .continuation_heading(true)
                .blocks((0..40).map(|i| {
                    Block::field(
                        format!("Hazard {}", i),
                        "Keep the exclusion zone clear while the crane is slewing.",
                    )
                })),
        )
        .build()?;
    let geometry = PageGeometry::default();
    let config = LayoutConfig::default();

    let first = paginate(&document, geometry, &config, &char_measurer())?;
    let second = paginate(&document, geometry, &config, &char_measurer())?;
    assert_eq!(first, second);
    assert!(first.plan.page_count > 1);
    assert_no_overflow!(first);
    Ok(())
}
