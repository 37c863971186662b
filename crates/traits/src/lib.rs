pub mod measure;

pub use measure::{MeasureError, MonospaceMeasurer, TextMeasurer, validate_width};
