#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::Result;

/// The nesting limit used unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The settings a [crate::Scanner] is built from.
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// The maximum number of simultaneously open delimiters, the outermost one included.
    /// Deeper nesting makes delimiter matching fail instead of exhausting memory.
    pub max_depth: usize,
}

impl ScannerConfig {
    /// Creates a new configuration with the given nesting limit.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Reads a configuration from its JSON representation.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
