//! strenum generator backend
//!
//! This module turns a validated [`EnumSpec`](crate::spec::EnumSpec) into formatted Rust source.
//!
//! The pipeline is:
//! 1. `names` - derive every identifier the unit declares and reject collisions
//! 2. `emit` - emit the marker-type, constant-table and parser sections as token streams
//! 3. `emit::program` - assemble banner + imports + sections, validate with `syn`, format with `prettyplease`
//! 4. `output` - write or compare the result on disk (CLI only)
//!
//! ## Module Organization
//!
//! - `codegen.rs` - [`EnumCodegen`] facade and the `generate*` convenience functions
//! - `config.rs` - [`CodegenConfig`]
//! - `errors.rs` - [`GenerationError`]
//! - `names.rs` - [`EnumNames`] identifier table
//! - `emit/` - section emitters and the assembler
//! - `output.rs` - [`OutputWriter`]

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod codegen;
pub mod config;
pub mod emit;
pub mod errors;
pub mod names;
pub mod output;

pub use codegen::{EnumCodegen, generate, generate_spec};
pub use config::CodegenConfig;
pub use emit::{EnumEmitter, GeneratedSection, SectionKind};
pub use errors::GenerationError;
pub use names::{EnumNames, VariantNames};
pub use output::OutputWriter;
