//! Fixed page grid the planner lays blocks onto.
use crate::dimension::{Margins, PageSize};
use crate::error::StyleError;
use safedoc_types::{Px, Rect};
use serde::{Deserialize, Serialize};

/// Page size plus margins. The content area is the page minus the margins.
///
/// Passed in as configuration so the same engine can target US Letter, A4,
/// or an on-screen preview viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: PageSize::Letter,
            margins: Margins::all(72.0),
        }
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// A custom page whose content area starts at the page origin.
    pub fn borderless(width: Px, height: Px) -> Self {
        Self {
            size: PageSize::Custom { width, height },
            margins: Margins::default(),
        }
    }

    pub fn page_width(&self) -> Px {
        self.size.dimensions().0
    }

    pub fn page_height(&self) -> Px {
        self.size.dimensions().1
    }

    pub fn content_left(&self) -> Px {
        self.margins.left
    }

    pub fn content_top(&self) -> Px {
        self.margins.top
    }

    pub fn content_bottom(&self) -> Px {
        self.page_height() - self.margins.bottom
    }

    pub fn content_width(&self) -> Px {
        self.page_width() - self.margins.left - self.margins.right
    }

    pub fn content_height(&self) -> Px {
        self.content_bottom() - self.content_top()
    }

    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.content_left(),
            self.content_top(),
            self.content_width(),
            self.content_height(),
        )
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        let (width, height) = self.size.dimensions();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(StyleError::InvalidGeometry(format!(
                "page size {}x{} must be positive",
                width, height
            )));
        }
        if !self.margins.is_valid() {
            return Err(StyleError::InvalidGeometry(
                "margins must be finite and non-negative".to_string(),
            ));
        }
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(StyleError::InvalidGeometry(format!(
                "margins leave no content area ({:.2}x{:.2})",
                self.content_width(),
                self.content_height()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_content_area() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.content_width(), 468.0); // 612 - 72 - 72
        assert_eq!(geometry.content_height(), 648.0); // 792 - 72 - 72
        assert_eq!(geometry.content_bottom(), 720.0);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_margins_swallowing_page_are_rejected() {
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 100.0,
                height: 100.0,
            },
            Margins::all(60.0),
        );
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_geometry_from_json() {
        let geometry: PageGeometry =
            serde_json::from_str(r#"{"size": "A4", "margins": "2cm"}"#).unwrap();
        assert_eq!(geometry.size, PageSize::A4);
        assert!((geometry.margins.top - 56.7).abs() < 0.01);
    }
}
