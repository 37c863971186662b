use crate::LayoutError;
use safedoc_style::TextStyle;
use safedoc_types::Px;
use serde::{Deserialize, Serialize};

/// Word-wrap switches.
///
/// Source reports disagreed on whether over-long words get a hyphen and on
/// whether whitespace runs collapse, so both are switches rather than fixed
/// behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineBreakOptions {
    /// Treat any run of whitespace as a single word separator.
    pub collapse_whitespace: bool,
    /// Append `-` to each fragment of a word broken at character level.
    pub hyphenate_long_words: bool,
    /// Honour `\n` as a hard line break instead of ordinary whitespace.
    pub preserve_newlines: bool,
}

impl Default for LineBreakOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            hyphenate_long_words: false,
            preserve_newlines: false,
        }
    }
}

/// Spacing constants and styles shared by measurement and rendering.
///
/// There is exactly one of these per generation call; the estimator and the
/// renderer both read it, so the drawn height always equals the planned one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
    pub block_padding_top: Px,
    pub block_padding_bottom: Px,
    /// Vertical gap left after every placed block.
    pub inter_block_spacing: Px,
    /// Gap between two bullet items of one list.
    pub inter_item_spacing: Px,
    pub bullet_indent: Px,
    pub bullet_glyph: String,
    pub body_style: TextStyle,
    pub label_style: TextStyle,
    pub label_value_gap: Px,
    pub caption_style: TextStyle,
    pub caption_gap: Px,
    pub divider_thickness: Px,
    /// Space above and below a divider rule.
    pub divider_margin: Px,
    /// Lower bound for every block height except spacers.
    pub min_block_height: Px,
    pub heading_style: TextStyle,
    /// Gap between a section heading and the first block under it.
    pub heading_spacing: Px,
    pub line_break: LineBreakOptions,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_spacing: 1.2,
            block_padding_top: 4.0,
            block_padding_bottom: 4.0,
            inter_block_spacing: 8.0,
            inter_item_spacing: 4.0,
            bullet_indent: 14.0,
            bullet_glyph: "\u{2022}".to_string(),
            body_style: TextStyle::body(),
            label_style: TextStyle::label(),
            label_value_gap: 2.0,
            caption_style: TextStyle::caption(),
            caption_gap: 4.0,
            divider_thickness: 1.0,
            divider_margin: 6.0,
            min_block_height: 0.0,
            heading_style: TextStyle::heading(),
            heading_spacing: 6.0,
            line_break: LineBreakOptions::default(),
        }
    }
}

impl LayoutConfig {
    /// Rejects values that would make measurement meaningless.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "line spacing {} must be positive",
                self.line_spacing
            )));
        }

        let lengths = [
            ("blockPaddingTop", self.block_padding_top),
            ("blockPaddingBottom", self.block_padding_bottom),
            ("interBlockSpacing", self.inter_block_spacing),
            ("interItemSpacing", self.inter_item_spacing),
            ("bulletIndent", self.bullet_indent),
            ("labelValueGap", self.label_value_gap),
            ("captionGap", self.caption_gap),
            ("dividerThickness", self.divider_thickness),
            ("dividerMargin", self.divider_margin),
            ("minBlockHeight", self.min_block_height),
            ("headingSpacing", self.heading_spacing),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a non-negative length, got {}",
                    name, value
                )));
            }
        }

        let styles = [
            ("bodyStyle", &self.body_style),
            ("labelStyle", &self.label_style),
            ("captionStyle", &self.caption_style),
            ("headingStyle", &self.heading_style),
        ];
        for (name, style) in styles {
            if !style.is_valid() {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} has invalid font size {}",
                    name, style.font_size
                )));
            }
        }
        Ok(())
    }

    /// Line height of `style` under this configuration.
    pub fn line_height(&self, style: &TextStyle) -> Px {
        style.font_size * self.line_spacing
    }
}
