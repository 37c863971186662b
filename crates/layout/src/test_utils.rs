use crate::config::LayoutConfig;
use safedoc_idf::{Block, Document, DocumentBuilder, SectionBuilder, SectionKind};
use safedoc_style::TextStyle;
use safedoc_traits::MonospaceMeasurer;
use safedoc_types::Px;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 10pt text measures 10pt per grapheme.
pub fn fixed_measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::new(1.0)
}

/// No padding or spacing anywhere, every style at 10pt with 1.0 line spacing,
/// so heights are easy to compute by hand.
pub fn tight_config() -> LayoutConfig {
    let ten = TextStyle::body().with_size(10.0);
    LayoutConfig {
        line_spacing: 1.0,
        block_padding_top: 0.0,
        block_padding_bottom: 0.0,
        inter_block_spacing: 0.0,
        inter_item_spacing: 0.0,
        bullet_indent: 10.0,
        body_style: ten,
        label_style: ten.bold(),
        label_value_gap: 0.0,
        caption_style: ten,
        caption_gap: 0.0,
        divider_thickness: 1.0,
        divider_margin: 0.0,
        min_block_height: 0.0,
        heading_style: ten.bold(),
        heading_spacing: 0.0,
        ..LayoutConfig::default()
    }
}

/// An untitled section of spacers with the given heights.
pub fn spacer_section(kind: SectionKind, heights: &[Px]) -> SectionBuilder {
    SectionBuilder::new(kind).blocks(heights.iter().map(|h| Block::spacer(*h)))
}

pub fn single_section(section: SectionBuilder) -> Document {
    DocumentBuilder::new().section(section).build().unwrap()
}
