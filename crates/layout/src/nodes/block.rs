use crate::interface::{BlockLayout, LayoutItem, MeasureContext};
use safedoc_types::{Px, Rect};

/// A full-width horizontal rule with margin above and below.
pub fn measure_divider(width: Px, ctx: &MeasureContext) -> BlockLayout {
    let config = ctx.config();
    BlockLayout {
        height: 2.0 * config.divider_margin + config.divider_thickness,
        items: vec![LayoutItem::Rule {
            rect: Rect::new(0.0, config.divider_margin, width, config.divider_thickness),
        }],
    }
}
