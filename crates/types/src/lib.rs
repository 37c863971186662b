pub mod geometry;
pub mod ids;

pub use geometry::{Px, Rect, Size};
pub use ids::{BlockId, ImageKey};
