pub mod dimension;
pub mod error;
pub mod font;
pub mod page;

pub use dimension::{Margins, PageSize};
pub use error::StyleError;
pub use font::{FontStyle, FontWeight, TextStyle};
pub use page::PageGeometry;
