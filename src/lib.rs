#![forbid(unsafe_code)]
//! strenum: generate closed, string-backed Rust enumerations
//!
//! Given a type name and an ordered list of variant strings, strenum emits one self-contained Rust
//! module with:
//!
//! - an opaque public type (`EnumStatus`) that only the module's own constants can construct,
//! - one private `&str` constant and one public typed constant per variant,
//! - `from_string` / `FromStr` parsing plus bulk `to_strings` / `from_strings` helpers.
//!
//! The output is parsed with `syn` and formatted with `prettyplease` before it is returned, so callers
//! never receive text that fails to parse.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: `must_to_strings` panics on a missing value; it is emitted as text and never runs inside the
//!   generator.

pub mod backend;
pub mod cli;
pub mod spec;
pub mod version;

pub use backend::{CodegenConfig, EnumCodegen, GenerationError, generate, generate_spec};
pub use spec::EnumSpec;
