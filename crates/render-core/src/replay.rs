use crate::error::RenderError;
use crate::traits::{Paint, RenderSink};
use safedoc_layout::{LayoutItem, PlacementPlan};

/// Draws every page of `plan` into `sink`, in page order.
///
/// Each placement's stored layout is translated to page coordinates and
/// emitted as-is, so what is drawn occupies exactly the planned height.
pub fn render_plan(plan: &PlacementPlan, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
    let width = plan.geometry.page_width();
    let height = plan.geometry.page_height();

    for (page_index, placements) in plan.pages().into_iter().enumerate() {
        sink.begin_page(page_index, width, height)?;
        for placement in placements {
            for item in placement.drawables() {
                draw_item(&item, sink)?;
            }
        }
        sink.end_page()?;
    }
    sink.finish()?;

    log::debug!(
        "Rendered {} placements onto {} pages",
        plan.placements.len(),
        plan.page_count
    );
    Ok(())
}

fn draw_item(item: &LayoutItem, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
    match item {
        LayoutItem::Text {
            text,
            x,
            baseline,
            style,
            ..
        } => sink.draw_text(text, *x, *baseline, style),
        LayoutItem::Rule { rect } => sink.draw_rect(*rect, Paint::Fill),
        LayoutItem::Image { key, rect } => sink.draw_image(key, *rect),
        LayoutItem::Placeholder { rect, .. } => sink.draw_rect(*rect, Paint::Stroke),
    }
}
