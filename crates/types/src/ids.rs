//! Newtype wrappers for identifiers shared across the engine.
//!
//! These keep block indices and image resource keys from being mixed up with
//! plain integers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable identifier of a block within one `Document`.
///
/// Ids are assigned in document order at construction time, so they are
/// dense (`0..block_count`) and reproducible for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

impl BlockId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key under which the host keeps a decoded image (photo id, file name, ...).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageKey(Arc<str>);

impl ImageKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageKey {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ImageKey {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ImageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
