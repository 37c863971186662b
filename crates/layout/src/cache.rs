use safedoc_style::TextStyle;
use safedoc_traits::{MeasureError, TextMeasurer, validate_width};
use safedoc_types::Px;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

// Strings longer than this are probed once during long-word fallback and
// never seen again, so they are not worth keeping.
const MAX_CACHED_TEXT_LEN: usize = 96;

/// Derived metrics for one style token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub line_height: Px,
    /// Distance from the top of a line box to its baseline.
    pub baseline_offset: Px,
}

/// Per-call registry of style metrics and measured widths.
///
/// Lives for exactly one generation call, so interior mutability through
/// `RefCell` is enough; nothing here crosses threads.
pub struct StyleRegistry {
    line_spacing: f32,
    metrics: RefCell<HashMap<TextStyle, StyleMetrics>>,
    widths: RefCell<HashMap<TextStyle, HashMap<String, Px>>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl StyleRegistry {
    pub fn new(line_spacing: f32) -> Self {
        Self {
            line_spacing,
            metrics: RefCell::new(HashMap::new()),
            widths: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn metrics(&self, style: &TextStyle) -> StyleMetrics {
        if let Some(m) = self.metrics.borrow().get(style) {
            return *m;
        }
        let line_height = style.font_size * self.line_spacing;
        // Glyphs sit on a baseline at 80% of the em box, centred in the line.
        let metrics = StyleMetrics {
            line_height,
            baseline_offset: (line_height - style.font_size) / 2.0 + style.font_size * 0.8,
        };
        self.metrics.borrow_mut().insert(*style, metrics);
        metrics
    }

    /// Measures `text` through `measurer`, reusing earlier results for the
    /// same `(style, text)` pair.
    pub fn width(
        &self,
        measurer: &dyn TextMeasurer,
        text: &str,
        style: &TextStyle,
    ) -> Result<Px, MeasureError> {
        if let Some(w) = self.widths.borrow().get(style).and_then(|m| m.get(text)) {
            self.hits.set(self.hits.get() + 1);
            return Ok(*w);
        }
        self.misses.set(self.misses.get() + 1);

        let width = validate_width(text, measurer.measure_width(text, style)?)?;

        if text.len() <= MAX_CACHED_TEXT_LEN {
            self.widths
                .borrow_mut()
                .entry(*style)
                .or_default()
                .insert(text.to_string(), width);
        }
        Ok(width)
    }

    /// `(hits, misses)` of the width cache.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits.get(), self.misses.get())
    }
}
