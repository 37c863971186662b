use crate::interface::{BlockLayout, LayoutItem, MeasureContext};
use crate::LayoutError;
use safedoc_types::{ImageKey, Px, Rect, Size};

/// Borrowed view of an `Image` block's fields.
#[derive(Debug, Clone, Copy)]
pub struct ImageSlot<'b> {
    pub key: &'b ImageKey,
    pub intrinsic_width: Px,
    pub intrinsic_height: Px,
    pub box_width: Px,
    pub box_height: Px,
    pub caption: Option<&'b str>,
    pub unavailable: Option<&'b str>,
}

/// The photo is scaled to fit its box (aspect preserved) and centred in it;
/// the caption wraps below the box.
pub fn measure(
    slot: &ImageSlot,
    width: Px,
    ctx: &MeasureContext,
) -> Result<BlockLayout, LayoutError> {
    let config = ctx.config();
    let slot_width = slot.box_width.min(width);
    let mut items = Vec::new();

    let mut frame_height = slot.box_height;
    match slot.unavailable {
        Some(reason) => {
            // The reason is printed inside the frame; a long one grows it.
            let inset = config.caption_gap;
            let mut lines = Vec::new();
            if slot_width - 2.0 * inset > 0.0 && !reason.trim().is_empty() {
                let bottom = ctx.push_lines(
                    &mut lines,
                    reason,
                    &config.caption_style,
                    inset,
                    inset,
                    slot_width - 2.0 * inset,
                )?;
                frame_height = frame_height.max(bottom + inset);
            }
            items.push(LayoutItem::Placeholder {
                key: slot.key.clone(),
                rect: Rect::new(0.0, 0.0, slot_width, frame_height),
                reason: reason.to_string(),
            });
            items.extend(lines);
        }
        None => {
            let fitted = Size::new(slot.intrinsic_width, slot.intrinsic_height)
                .fit_within(Size::new(slot_width, slot.box_height));
            items.push(LayoutItem::Image {
                key: slot.key.clone(),
                rect: Rect::new(
                    (slot_width - fitted.width) / 2.0,
                    (slot.box_height - fitted.height) / 2.0,
                    fitted.width,
                    fitted.height,
                ),
            });
        }
    }

    let mut y = frame_height;
    if let Some(caption) = slot.caption.filter(|c| !c.trim().is_empty()) {
        y = ctx.push_lines(
            &mut items,
            caption,
            &config.caption_style,
            0.0,
            y + config.caption_gap,
            slot_width,
        )?;
    }

    Ok(BlockLayout { height: y, items })
}
