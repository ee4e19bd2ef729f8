use log::debug;

use crate::{Result, ScanErrorKind, Scanner, ScannerConfig};

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the maximum number of simultaneously open delimiters.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Result<Scanner> {
        if self.config.max_depth == 0 {
            return Err(
                ScanErrorKind::InvalidConfig("max_depth must be at least 1".to_string()).into(),
            );
        }
        debug!("Building scanner from {:?}", self.config);
        Ok(Scanner::with_max_depth(self.config.max_depth))
    }
}
