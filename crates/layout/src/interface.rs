use crate::cache::{StyleMetrics, StyleRegistry};
use crate::config::LayoutConfig;
use crate::text::wrapper::break_lines;
use crate::LayoutError;
use safedoc_style::TextStyle;
use safedoc_traits::TextMeasurer;
use safedoc_types::{ImageKey, Px, Rect};
use serde::Serialize;

/// A single drawable produced by measurement, in block-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutItem {
    Text {
        text: String,
        x: Px,
        /// Top of the line box.
        y: Px,
        baseline: Px,
        width: Px,
        style: TextStyle,
    },
    Rule { rect: Rect },
    Image { key: ImageKey, rect: Rect },
    /// Frame drawn in place of a photo the host could not provide.
    Placeholder {
        key: ImageKey,
        rect: Rect,
        reason: String,
    },
}

impl LayoutItem {
    pub fn translate(&self, dx: Px, dy: Px) -> LayoutItem {
        match self {
            LayoutItem::Text {
                text,
                x,
                y,
                baseline,
                width,
                style,
            } => LayoutItem::Text {
                text: text.clone(),
                x: x + dx,
                y: y + dy,
                baseline: baseline + dy,
                width: *width,
                style: *style,
            },
            LayoutItem::Rule { rect } => LayoutItem::Rule {
                rect: rect.translate(dx, dy),
            },
            LayoutItem::Image { key, rect } => LayoutItem::Image {
                key: key.clone(),
                rect: rect.translate(dx, dy),
            },
            LayoutItem::Placeholder { key, rect, reason } => LayoutItem::Placeholder {
                key: key.clone(),
                rect: rect.translate(dx, dy),
                reason: reason.clone(),
            },
        }
    }
}

/// The measured form of a block.
///
/// `height` is what the planner reserves and `items` is exactly what the
/// renderer draws; both come out of the same measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockLayout {
    pub height: Px,
    pub items: Vec<LayoutItem>,
}

impl BlockLayout {
    pub fn empty(height: Px) -> Self {
        Self {
            height,
            items: Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, LayoutItem::Text { .. }))
            .count()
    }
}

/// Everything a block needs to measure itself.
pub struct MeasureContext<'a> {
    measurer: &'a dyn TextMeasurer,
    config: &'a LayoutConfig,
    registry: StyleRegistry,
}

impl<'a> MeasureContext<'a> {
    pub fn new(measurer: &'a dyn TextMeasurer, config: &'a LayoutConfig) -> Self {
        Self {
            measurer,
            config,
            registry: StyleRegistry::new(config.line_spacing),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn measurer_name(&self) -> &'static str {
        self.measurer.name()
    }

    pub fn metrics(&self, style: &TextStyle) -> StyleMetrics {
        self.registry.metrics(style)
    }

    pub fn width(&self, text: &str, style: &TextStyle) -> Result<Px, LayoutError> {
        Ok(self.registry.width(self.measurer, text, style)?)
    }

    /// Wraps `text` to `max_width` using the configured break options.
    pub fn wrap(
        &self,
        text: &str,
        style: &TextStyle,
        max_width: Px,
    ) -> Result<Vec<String>, LayoutError> {
        let lines = break_lines(text, max_width, &self.config.line_break, |s| {
            self.registry.width(self.measurer, s, style)
        })?;
        Ok(lines)
    }

    /// Wraps `text` and appends one `Text` item per line starting at `(x, y)`.
    /// Returns the y just below the last line.
    pub fn push_lines(
        &self,
        items: &mut Vec<LayoutItem>,
        text: &str,
        style: &TextStyle,
        x: Px,
        y: Px,
        max_width: Px,
    ) -> Result<Px, LayoutError> {
        let metrics = self.metrics(style);
        let mut y = y;
        for line in self.wrap(text, style, max_width)? {
            let width = self.width(&line, style)?;
            items.push(LayoutItem::Text {
                text: line,
                x,
                y,
                baseline: y + metrics.baseline_offset,
                width,
                style: *style,
            });
            y += metrics.line_height;
        }
        Ok(y)
    }
}
