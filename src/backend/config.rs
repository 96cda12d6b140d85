//! Generation configuration
//!
//! Prefixes and item names are fixed conventions (see `strenum_core::conventions`); only the knobs
//! below vary between runs.

use strenum_core::conventions::DIR_PLACEHOLDER;

/// Generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Output directory recorded in the provenance banner (`<dir>` when unset)
    pub output_dir: Option<String>,
    /// Whether to emit the panicking `must_to_strings` wrapper
    pub must_helpers: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            must_helpers: true,
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the output directory in the banner
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set whether `must_to_strings` is emitted
    pub fn with_must_helpers(mut self, enabled: bool) -> Self {
        self.must_helpers = enabled;
        self
    }

    /// Directory text for the banner.
    pub fn banner_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DIR_PLACEHOLDER)
    }
}
