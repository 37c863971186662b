use crate::error::RenderError;
use safedoc_style::TextStyle;
use safedoc_types::{ImageKey, Px, Rect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Paint {
    Fill,
    Stroke,
}

/// Drawing primitives supplied by the host.
///
/// Coordinates are absolute page coordinates with the origin at the top-left
/// and y growing downwards. Text is positioned by its baseline.
pub trait RenderSink {
    fn begin_page(&mut self, page_index: usize, width: Px, height: Px)
    -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        text: &str,
        x: Px,
        baseline: Px,
        style: &TextStyle,
    ) -> Result<(), RenderError>;

    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), RenderError>;

    fn draw_image(&mut self, key: &ImageKey, rect: Rect) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
