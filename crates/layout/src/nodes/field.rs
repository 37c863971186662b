use crate::interface::{BlockLayout, MeasureContext};
use crate::nodes::padded;
use crate::LayoutError;
use safedoc_types::Px;

/// Label line(s) stacked above the wrapped value.
pub fn measure(
    label: &str,
    value: &str,
    width: Px,
    ctx: &MeasureContext,
) -> Result<BlockLayout, LayoutError> {
    let config = ctx.config();
    let top = config.block_padding_top;
    let mut items = Vec::new();

    let mut y = ctx.push_lines(&mut items, label, &config.label_style, 0.0, top, width)?;
    let label_lines = items.len();

    let value_top = if label_lines > 0 {
        y + config.label_value_gap
    } else {
        y
    };
    let after_value = ctx.push_lines(&mut items, value, &config.body_style, 0.0, value_top, width)?;
    if items.len() > label_lines {
        y = after_value;
    }

    Ok(BlockLayout {
        height: padded(y - top, ctx),
        items,
    })
}
