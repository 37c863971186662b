use safedoc_style::TextStyle;
use safedoc_types::{ImageKey, Px, Size};
use serde::Serialize;

/// The atomic layout unit.
///
/// Blocks never split across pages; a block that does not fit the remaining
/// space moves to the next page as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Wrapped text. `max_width` narrows the column below the page content width.
    TextParagraph {
        text: String,
        style: TextStyle,
        max_width: Option<Px>,
    },
    /// A label line (label style) stacked above its wrapped value (body style).
    LabeledField { label: String, value: String },
    BulletList { items: Vec<String>, style: TextStyle },
    /// A photo slot. `intrinsic_*` come from the host's decoder; the image is
    /// fitted into `box_*` preserving aspect ratio.
    ///
    /// When the host could not decode the photo it sets `unavailable` with the
    /// reason; the block still lays out (placeholder frame plus caption) so the
    /// caption text is never lost.
    Image {
        key: ImageKey,
        intrinsic_width: Px,
        intrinsic_height: Px,
        box_width: Px,
        box_height: Px,
        caption: Option<String>,
        unavailable: Option<String>,
    },
    Divider,
    Spacer { height: Px },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    TextParagraph,
    LabeledField,
    BulletList,
    Image,
    Divider,
    Spacer,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::TextParagraph {
            text: text.into(),
            style: TextStyle::body(),
            max_width: None,
        }
    }

    pub fn styled_paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Block::TextParagraph {
            text: text.into(),
            style,
            max_width: None,
        }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Block::LabeledField {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::BulletList {
            items: items.into_iter().map(Into::into).collect(),
            style: TextStyle::body(),
        }
    }

    pub fn image(key: impl Into<ImageKey>, intrinsic: Size, slot: Size) -> Self {
        Block::Image {
            key: key.into(),
            intrinsic_width: intrinsic.width,
            intrinsic_height: intrinsic.height,
            box_width: slot.width,
            box_height: slot.height,
            caption: None,
            unavailable: None,
        }
    }

    pub fn spacer(height: Px) -> Self {
        Block::Spacer { height }
    }

    /// Attaches a caption to an `Image`; other blocks are returned unchanged.
    pub fn with_caption(mut self, text: impl Into<String>) -> Self {
        if let Block::Image { caption, .. } = &mut self {
            *caption = Some(text.into());
        }
        self
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::TextParagraph { .. } => BlockKind::TextParagraph,
            Block::LabeledField { .. } => BlockKind::LabeledField,
            Block::BulletList { .. } => BlockKind::BulletList,
            Block::Image { .. } => BlockKind::Image,
            Block::Divider => BlockKind::Divider,
            Block::Spacer { .. } => BlockKind::Spacer,
        }
    }

    /// Checks the block's own dimensions. Returns the reason on failure.
    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Block::TextParagraph {
                style, max_width, ..
            } => {
                check_style(style)?;
                if let Some(w) = max_width {
                    if !w.is_finite() || *w <= 0.0 {
                        return Err(format!("max width {} must be positive", w));
                    }
                }
                Ok(())
            }
            Block::LabeledField { .. } | Block::Divider => Ok(()),
            Block::BulletList { style, .. } => check_style(style),
            Block::Image {
                intrinsic_width,
                intrinsic_height,
                box_width,
                box_height,
                unavailable,
                ..
            } => {
                for (name, v) in [("box width", box_width), ("box height", box_height)] {
                    if !v.is_finite() || *v <= 0.0 {
                        return Err(format!("{} {} must be positive", name, v));
                    }
                }
                for (name, v) in [
                    ("intrinsic width", intrinsic_width),
                    ("intrinsic height", intrinsic_height),
                ] {
                    if !v.is_finite() || *v < 0.0 {
                        return Err(format!("{} {} must be non-negative", name, v));
                    }
                }
                if unavailable.is_none() && (*intrinsic_width <= 0.0 || *intrinsic_height <= 0.0)
                {
                    return Err(
                        "intrinsic size is unresolved; mark the image unavailable instead"
                            .to_string(),
                    );
                }
                Ok(())
            }
            Block::Spacer { height } => {
                if !height.is_finite() || *height < 0.0 {
                    return Err(format!("spacer height {} must be non-negative", height));
                }
                Ok(())
            }
        }
    }
}

fn check_style(style: &TextStyle) -> Result<(), String> {
    if style.is_valid() {
        Ok(())
    } else {
        Err(format!("font size {} must be positive", style.font_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_only_applies_to_images() {
        let img = Block::image("p1", Size::new(10.0, 10.0), Size::new(100.0, 100.0))
            .with_caption("Scaffold");
        assert!(matches!(img, Block::Image { caption: Some(ref c), .. } if c == "Scaffold"));
        assert_eq!(Block::Divider.with_caption("x"), Block::Divider);
    }

    #[test]
    fn test_validation_rejects_negative_sizes() {
        assert!(Block::spacer(-1.0).validate().is_err());
        assert!(Block::spacer(0.0).validate().is_ok());
        let bad = Block::image("p", Size::new(10.0, 10.0), Size::new(-5.0, 100.0));
        assert!(bad.validate().is_err());
        let unresolved = Block::image("p", Size::zero(), Size::new(100.0, 100.0));
        assert!(unresolved.validate().is_err());
    }

    #[test]
    fn test_unavailable_image_may_have_zero_intrinsic() {
        let block = Block::Image {
            key: "p".into(),
            intrinsic_width: 0.0,
            intrinsic_height: 0.0,
            box_width: 200.0,
            box_height: 150.0,
            caption: Some("Trench".into()),
            unavailable: Some("decode failed".into()),
        };
        assert!(block.validate().is_ok());
    }
}
