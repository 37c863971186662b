use serde::{Deserialize, Serialize};

/// Layout unit. One `Px` is one point of the target page (1/72 inch for PDF).
pub type Px = f32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> Px {
        self.x + self.width
    }

    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translate(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Scales `self` uniformly so it fits inside `bounds`, preserving aspect ratio.
    ///
    /// Degenerate sizes (zero or negative extent) yield `Size::zero()`.
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.width <= 0.0 || self.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Size::zero();
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}
