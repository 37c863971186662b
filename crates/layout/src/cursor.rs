use safedoc_style::PageGeometry;
use safedoc_types::Px;

/// Vertical write position within the current page.
///
/// `y` only ever grows until the next page starts. Pages come into existence
/// when something is placed on them, so a break on an untouched page is a
/// no-op and the flow can never produce a blank page.
#[derive(Debug, Clone)]
pub struct FlowCursor {
    geometry: PageGeometry,
    page_index: usize,
    y: Px,
    page_has_content: bool,
}

impl FlowCursor {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            page_index: 0,
            y: geometry.content_top(),
            page_has_content: false,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> Px {
        self.y
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Space left between the cursor and the bottom margin. Negative once
    /// trailing spacing has pushed the cursor past it.
    pub fn remaining(&self) -> Px {
        self.geometry.content_bottom() - self.y
    }

    pub fn is_at_page_top(&self) -> bool {
        !self.page_has_content
    }

    /// Reserves `height` at the cursor and returns the reserved top y.
    pub fn place(&mut self, height: Px) -> Px {
        let top = self.y;
        self.y += height;
        self.page_has_content = true;
        top
    }

    /// Moves down without placing anything. Ignored at the top of a page so
    /// a fresh page never starts with leftover spacing.
    pub fn advance(&mut self, spacing: Px) {
        if self.page_has_content {
            self.y += spacing;
        }
    }

    /// Starts the next page unconditionally.
    pub fn new_page(&mut self) {
        self.page_index += 1;
        self.y = self.geometry.content_top();
        self.page_has_content = false;
        log::debug!("Starting page {}", self.page_index + 1);
    }

    /// Starts the next page unless the current one is still empty.
    pub fn break_page(&mut self) {
        if self.page_has_content {
            self.new_page();
        }
    }
}
