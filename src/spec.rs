//! The validated input of one generation run.
//!
//! An [`EnumSpec`] is built once from external input (the CLI, a build script, a test) and is
//! immutable afterwards. Construction checks the shape of the input; identifier collisions between
//! variants are detected later, when names are resolved.

use strenum_core::{conventions, derive_identifier, starts_like_identifier};

use crate::backend::GenerationError;

/// A type name plus its ordered variant strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    type_name: String,
    variants: Vec<String>,
}

impl EnumSpec {
    /// Validate and build a spec.
    ///
    /// ## Errors
    ///
    /// Returns [`GenerationError::InvalidSpec`] if:
    /// - `type_name` is empty, does not start with an ASCII letter or `_`, or has no identifier characters
    /// - the identifier derived from `type_name` starts with a digit (`_1` would give the stem `1enum`)
    /// - `variants` is empty
    /// - a variant contains `,`, so the recorded invocation could not be split back unambiguously
    pub fn new<S, I, V>(type_name: S, variants: I) -> Result<Self, GenerationError>
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let type_name = type_name.into();
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();

        if type_name.is_empty() {
            return Err(GenerationError::InvalidSpec("type name must not be empty".to_string()));
        }
        if !starts_like_identifier(&type_name) {
            return Err(GenerationError::InvalidSpec(format!(
                "type name {:?} must start with an ASCII letter or '_'",
                type_name
            )));
        }
        let derived = derive_identifier(&type_name);
        if derived.is_empty() {
            return Err(GenerationError::InvalidSpec(format!(
                "type name {:?} contains no ASCII letters or digits",
                type_name
            )));
        }
        // The lower-cased form is the module / file stem, which must not start with a digit.
        if derived.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(GenerationError::InvalidSpec(format!(
                "type name {:?} derives `{}`, which starts with a digit",
                type_name, derived
            )));
        }
        if variants.is_empty() {
            return Err(GenerationError::InvalidSpec(format!(
                "enum {:?} needs at least one variant",
                type_name
            )));
        }
        if let Some(variant) = variants.iter().find(|v| v.contains(conventions::VARIANT_SEPARATOR)) {
            return Err(GenerationError::InvalidSpec(format!(
                "variant {:?} contains '{}', which separates variants on the command line",
                variant,
                conventions::VARIANT_SEPARATOR
            )));
        }

        Ok(Self { type_name, variants })
    }

    /// The type name exactly as supplied.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The variant strings in input order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Module / file stem the generated code belongs in (`Status` -> `statusenum`).
    pub fn module_name(&self) -> String {
        conventions::module_name(&derive_identifier(&self.type_name))
    }
}
