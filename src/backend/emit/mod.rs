//! Emit the sections of a generated enum module.
//!
//! This module defines [`EnumEmitter`] and wires together the focused submodules that each emit one
//! section. `mod.rs` is intentionally thin.
//!
//! ## Notes
//! - Every section is a `proc_macro2::TokenStream`; nothing is formatted until the assembler has the whole unit.
//! - Emitters only read names from [`EnumNames`]; they never derive identifiers themselves.
//!
//! ## See also
//! - [`marker`]: opaque capability type + private backing type
//! - [`constants`]: string and enum constant table
//! - [`parser`]: `from_string`, `FromStr` and bulk conversion helpers
//! - [`program`]: banner, imports, validation and formatting

mod constants;
mod marker;
mod parser;
mod program;

use proc_macro2::{Ident, TokenStream};

use super::{CodegenConfig, EnumNames, GenerationError};

/// Which part of the unit a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Inner attributes and `use` declarations.
    Imports,
    /// Capability type, backing type and their impls.
    MarkerType,
    /// Per-variant string and enum constants.
    Constants,
    /// Lookup function, error types and bulk helpers.
    Parser,
}

/// One self-contained block of generated items, emitted once and consumed once by the assembler.
#[derive(Debug, Clone)]
pub struct GeneratedSection {
    pub kind: SectionKind,
    pub tokens: TokenStream,
}

impl GeneratedSection {
    fn new(kind: SectionKind, tokens: TokenStream) -> Self {
        Self { kind, tokens }
    }
}

/// Emit Rust tokens for one resolved enum.
///
/// Stateless apart from the borrowed inputs; a fresh emitter is built for every generation run.
pub struct EnumEmitter<'a> {
    names: &'a EnumNames,
    config: &'a CodegenConfig,
}

impl<'a> EnumEmitter<'a> {
    pub fn new(names: &'a EnumNames, config: &'a CodegenConfig) -> Self {
        Self { names, config }
    }

    /// Parse `name` as a Rust identifier.
    ///
    /// Names come from the deriver and are always valid; a failure here is an emitter defect.
    fn ident(name: &str) -> Result<Ident, GenerationError> {
        syn::parse_str::<Ident>(name)
            .map_err(|e| GenerationError::CodegenInvalid(format!("`{}` is not an identifier: {}", name, e)))
    }

    fn enum_type(&self) -> Result<Ident, GenerationError> {
        Self::ident(&self.names.enum_type)
    }

    fn private_type(&self) -> Result<Ident, GenerationError> {
        Self::ident(&self.names.private_type)
    }
}
