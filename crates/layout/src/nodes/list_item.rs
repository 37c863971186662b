use crate::interface::{BlockLayout, LayoutItem, MeasureContext};
use crate::nodes::padded;
use crate::LayoutError;
use safedoc_style::TextStyle;
use safedoc_types::Px;

/// Bulleted items, each wrapped in the column right of the bullet indent.
/// Blank items are skipped.
pub fn measure(
    items: &[String],
    style: &TextStyle,
    width: Px,
    ctx: &MeasureContext,
) -> Result<BlockLayout, LayoutError> {
    let config = ctx.config();
    let text_width = width - config.bullet_indent;
    if text_width <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "bullet indent {} leaves no room in a column of {}",
            config.bullet_indent, width
        )));
    }

    let metrics = ctx.metrics(style);
    let bullet_width = ctx.width(&config.bullet_glyph, style)?;
    let top = config.block_padding_top;
    let mut drawn = Vec::new();
    let mut y = top;
    let mut first = true;

    for item in items.iter().filter(|i| !i.trim().is_empty()) {
        if !first {
            y += config.inter_item_spacing;
        }
        first = false;

        drawn.push(LayoutItem::Text {
            text: config.bullet_glyph.clone(),
            x: 0.0,
            y,
            baseline: y + metrics.baseline_offset,
            width: bullet_width,
            style: *style,
        });
        y = ctx.push_lines(&mut drawn, item, style, config.bullet_indent, y, text_width)?;
    }

    Ok(BlockLayout {
        height: padded(y - top, ctx),
        items: drawn,
    })
}
