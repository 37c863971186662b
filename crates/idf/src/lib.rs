//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a report after the caller has resolved its
//! domain data (hazards, job steps, photos) and before layout. A `Document` is
//! immutable once built: `DocumentBuilder::build` validates every block and
//! assigns dense `BlockId`s in document order, so the layout engine never sees
//! partially-valid state.

mod block;
mod builder;
mod document;

pub use block::{Block, BlockKind};
pub use builder::{DocumentBuilder, DocumentError, SectionBuilder};
pub use document::{Document, PlacementPolicy, Section, SectionKind};
