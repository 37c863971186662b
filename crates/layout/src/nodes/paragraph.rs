use crate::interface::{BlockLayout, MeasureContext};
use crate::nodes::padded;
use crate::LayoutError;
use safedoc_style::TextStyle;
use safedoc_types::Px;

pub fn measure(
    text: &str,
    style: &TextStyle,
    max_width: Option<Px>,
    available: Px,
    ctx: &MeasureContext,
) -> Result<BlockLayout, LayoutError> {
    let width = max_width.map_or(available, |w| w.min(available));
    let top = ctx.config().block_padding_top;

    let mut items = Vec::new();
    let bottom = ctx.push_lines(&mut items, text, style, 0.0, top, width)?;

    Ok(BlockLayout {
        height: padded(bottom - top, ctx),
        items,
    })
}
