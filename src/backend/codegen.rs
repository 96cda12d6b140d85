//! Public generation facade.
//!
//! [`EnumCodegen`] owns a [`CodegenConfig`] and runs the pipeline for one [`EnumSpec`]:
//! resolve names, emit sections, assemble and format. It holds no other state, so one instance can be
//! shared across threads and reused for any number of specs.

use super::{CodegenConfig, EnumEmitter, EnumNames, GenerationError};
use crate::spec::EnumSpec;

/// Generator for closed, string-backed enum modules.
#[derive(Debug, Clone, Default)]
pub struct EnumCodegen {
    config: CodegenConfig,
}

impl EnumCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Record `dir` in the provenance banner instead of `<dir>`.
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.config = self.config.with_output_dir(dir);
        self
    }

    /// Skip the panicking `must_to_strings` wrapper.
    pub fn without_must_helpers(mut self) -> Self {
        self.config = self.config.with_must_helpers(false);
        self
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Generate the complete module source for `spec`.
    ///
    /// The result is deterministic: the same spec and config always produce byte-identical text.
    ///
    /// ## Errors
    ///
    /// - [`GenerationError::InvalidSpec`] / [`GenerationError::Collision`] for bad input
    /// - [`GenerationError::CodegenInvalid`] if the emitted unit does not parse
    #[tracing::instrument(skip_all, fields(type_name = spec.type_name(), variants = spec.variants().len()))]
    pub fn try_generate(&self, spec: &EnumSpec) -> Result<String, GenerationError> {
        let names = EnumNames::resolve(spec)?;
        let source = EnumEmitter::new(&names, &self.config).emit_unit()?;
        tracing::debug!(bytes = source.len(), "generated module");
        Ok(source)
    }
}

/// Generate a module for `type_name` with the default configuration.
///
/// ```
/// let source = strenum::generate("Status", ["backlog", "in_review", "done"]).unwrap();
/// assert!(source.starts_with("// Code generated by \"strenum\"; DO NOT EDIT."));
/// assert!(source.contains("pub const EnumStatusInReview: EnumStatus"));
/// ```
pub fn generate<S, I, V>(type_name: S, variants: I) -> Result<String, GenerationError>
where
    S: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    generate_spec(&EnumSpec::new(type_name, variants)?)
}

/// Generate a module for an already validated spec with the default configuration.
pub fn generate_spec(spec: &EnumSpec) -> Result<String, GenerationError> {
    EnumCodegen::new().try_generate(spec)
}
