use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid length '{0}': {1}")]
    InvalidLength(String, String),
    #[error("Invalid margin shorthand: expected 1, 2, or 4 values, got {0}")]
    InvalidShorthand(usize),
    #[error("Unknown page size: {0}")]
    UnknownPageSize(String),
    #[error("Invalid font weight: '{0}'")]
    InvalidFontWeight(String),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}
