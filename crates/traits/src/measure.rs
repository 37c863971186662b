//! TextMeasurer trait for abstracting font metrics.
//!
//! The layout engine never touches fonts directly. It asks a `TextMeasurer`
//! how wide a string is in a given style and derives every line break and
//! block height from those answers.

use safedoc_style::TextStyle;
use safedoc_types::Px;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Error type for measurement operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Measurer '{measurer}' failed: {message}")]
    Unavailable {
        measurer: &'static str,
        message: String,
    },

    #[error("Measurer returned invalid width {width} for {text:?}")]
    InvalidWidth { text: String, width: f32 },
}

/// Measures rendered string widths.
///
/// # Contract
///
/// Implementations must be deterministic for identical `(text, style)` input
/// within one generation run: the same string measured twice must return the
/// same width, bit for bit. The engine relies on this to guarantee that the
/// height it predicts is the height that gets drawn.
///
/// # Implementations
///
/// - `MonospaceMeasurer`: fixed advance per grapheme, used as a fallback
/// - any `Fn(&str, &TextStyle) -> Result<Px, MeasureError>` closure
///
/// # Example
///
/// ```ignore
/// let measurer = |text: &str, style: &TextStyle| {
///     Ok::<Px, MeasureError>(text.len() as f32 * style.font_size * 0.5)
/// };
/// let width = measurer.measure_width("Hard hat", &TextStyle::body())?;
/// ```
pub trait TextMeasurer {
    /// Returns the advance width of `text` when drawn in `style`.
    fn measure_width(&self, text: &str, style: &TextStyle) -> Result<Px, MeasureError>;

    /// Returns a human-readable name for this measurer (for logging/debugging).
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> Result<Px, MeasureError>,
{
    fn measure_width(&self, text: &str, style: &TextStyle) -> Result<Px, MeasureError> {
        self(text, style)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

/// Rejects widths no real font could produce.
pub fn validate_width(text: &str, width: Px) -> Result<Px, MeasureError> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(MeasureError::InvalidWidth {
            text: text.to_string(),
            width,
        })
    }
}

/// Every grapheme cluster advances by `font_size * advance_ratio`.
///
/// This is the fallback estimate a caller substitutes when its real measurer is
/// unavailable. The default ratio of 0.6 approximates Helvetica/Courier body text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    advance_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    pub fn advance_ratio(&self) -> f32 {
        self.advance_ratio
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_width(&self, text: &str, style: &TextStyle) -> Result<Px, MeasureError> {
        let clusters = text.graphemes(true).count() as f32;
        validate_width(text, clusters * style.font_size * self.advance_ratio)
    }

    fn name(&self) -> &'static str {
        "monospace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_counts_graphemes() {
        let measurer = MonospaceMeasurer::new(1.0);
        let style = TextStyle::body().with_size(10.0);
        assert_eq!(measurer.measure_width("abc", &style).unwrap(), 30.0);
        // "e" + combining acute accent is one cluster.
        assert_eq!(measurer.measure_width("e\u{301}", &style).unwrap(), 10.0);
        assert_eq!(measurer.measure_width("", &style).unwrap(), 0.0);
    }

    #[test]
    fn test_closure_measurer() {
        let measurer =
            |text: &str, _style: &TextStyle| Ok::<Px, MeasureError>(text.len() as f32 * 2.0);
        assert_eq!(
            measurer.measure_width("abcd", &TextStyle::body()).unwrap(),
            8.0
        );
        assert_eq!(measurer.name(), "closure");
    }

    #[test]
    fn test_validate_width() {
        assert!(validate_width("x", 3.0).is_ok());
        assert!(matches!(
            validate_width("x", f32::NAN),
            Err(MeasureError::InvalidWidth { .. })
        ));
        assert!(validate_width("x", -1.0).is_err());
    }
}
