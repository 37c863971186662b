use crate::interface::{BlockLayout, MeasureContext};
use crate::LayoutError;
use safedoc_types::Px;

/// Heading text for a section that resumes on a later page.
pub fn continued_title(title: &str) -> String {
    format!("{} (continued)", title)
}

/// Measures a section heading. The gap below it is part of its height so the
/// first block of the section lands right after it.
pub fn measure(title: &str, width: Px, ctx: &MeasureContext) -> Result<BlockLayout, LayoutError> {
    let config = ctx.config();
    let mut items = Vec::new();
    let y = ctx.push_lines(&mut items, title, &config.heading_style, 0.0, 0.0, width)?;
    let height = if items.is_empty() {
        0.0
    } else {
        y + config.heading_spacing
    };
    Ok(BlockLayout { height, items })
}
