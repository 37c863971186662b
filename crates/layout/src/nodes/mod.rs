//! Per-block measurement.
//!
//! Each block kind wraps its text and lays out its drawables in block-local
//! coordinates (origin at the block's top-left). The planner reserves
//! `BlockLayout::height` and the renderer later draws `BlockLayout::items`.

pub mod block;
pub mod field;
pub mod heading;
pub mod image;
pub mod list_item;
pub mod paragraph;

use crate::interface::{BlockLayout, MeasureContext};
use crate::LayoutError;
use safedoc_idf::Block;
use safedoc_types::Px;

pub trait BlockMeasure {
    /// Measures the block for a column of `width`.
    fn measure(&self, width: Px, ctx: &MeasureContext) -> Result<BlockLayout, LayoutError>;

    /// The vertical space the block needs. Always equals `measure(..).height`.
    fn estimate_height(&self, width: Px, ctx: &MeasureContext) -> Result<Px, LayoutError> {
        Ok(self.measure(width, ctx)?.height)
    }
}

impl BlockMeasure for Block {
    fn measure(&self, width: Px, ctx: &MeasureContext) -> Result<BlockLayout, LayoutError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "available width {} must be positive",
                width
            )));
        }

        let layout = match self {
            Block::TextParagraph {
                text,
                style,
                max_width,
            } => paragraph::measure(text, style, *max_width, width, ctx)?,
            Block::LabeledField { label, value } => field::measure(label, value, width, ctx)?,
            Block::BulletList { items, style } => list_item::measure(items, style, width, ctx)?,
            Block::Image {
                key,
                intrinsic_width,
                intrinsic_height,
                box_width,
                box_height,
                caption,
                unavailable,
            } => image::measure(
                &image::ImageSlot {
                    key,
                    intrinsic_width: *intrinsic_width,
                    intrinsic_height: *intrinsic_height,
                    box_width: *box_width,
                    box_height: *box_height,
                    caption: caption.as_deref(),
                    unavailable: unavailable.as_deref(),
                },
                width,
                ctx,
            )?,
            Block::Divider => block::measure_divider(width, ctx),
            // Spacers are exact and exempt from the minimum height.
            Block::Spacer { height } => return Ok(BlockLayout::empty(*height)),
        };

        Ok(clamp_height(layout, ctx))
    }
}

/// Measures `block` for a column of `width`. The planner and the renderer both
/// go through here.
pub fn measure_block(
    block: &Block,
    width: Px,
    ctx: &MeasureContext,
) -> Result<BlockLayout, LayoutError> {
    block.measure(width, ctx)
}

pub fn estimate_height(block: &Block, width: Px, ctx: &MeasureContext) -> Result<Px, LayoutError> {
    block.estimate_height(width, ctx)
}

fn clamp_height(mut layout: BlockLayout, ctx: &MeasureContext) -> BlockLayout {
    layout.height = layout.height.max(ctx.config().min_block_height);
    layout
}

/// Wraps text-bearing content in the configured block padding.
pub(crate) fn padded(content_height: Px, ctx: &MeasureContext) -> Px {
    let config = ctx.config();
    config.block_padding_top + content_height + config.block_padding_bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::test_utils::{fixed_measurer, tight_config};

    #[test]
    fn test_estimate_matches_measure() {
        let config = LayoutConfig::default();
        let measurer = fixed_measurer();
        let ctx = MeasureContext::new(&measurer, &config);
        let block = Block::paragraph("Wear gloves when handling rebar ties");

        let layout = block.measure(120.0, &ctx).unwrap();
        assert_eq!(block.estimate_height(120.0, &ctx).unwrap(), layout.height);
    }

    #[test]
    fn test_min_height_clamp_skips_spacers() {
        let config = LayoutConfig {
            min_block_height: 30.0,
            ..tight_config()
        };
        let measurer = fixed_measurer();
        let ctx = MeasureContext::new(&measurer, &config);

        assert_eq!(Block::Divider.estimate_height(100.0, &ctx).unwrap(), 30.0);
        assert_eq!(Block::spacer(5.0).estimate_height(100.0, &ctx).unwrap(), 5.0);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let config = LayoutConfig::default();
        let measurer = fixed_measurer();
        let ctx = MeasureContext::new(&measurer, &config);
        let err = Block::paragraph("x").measure(0.0, &ctx).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGeometry(_)));
    }

    #[test]
    fn test_measurement_is_deterministic() {
        let config = LayoutConfig::default();
        let measurer = fixed_measurer();
        let ctx = MeasureContext::new(&measurer, &config);
        let block = Block::bullets(["Barricade the trench", "Inspect shoring daily"]);
        assert_eq!(
            block.measure(200.0, &ctx).unwrap(),
            block.measure(200.0, &ctx).unwrap()
        );
    }
}
