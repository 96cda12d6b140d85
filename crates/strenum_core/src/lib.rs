//! Provide the pure naming rules shared by the strenum generator and its tests.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that turn
//! user-supplied type names and variant strings into Rust identifier fragments, plus the fixed
//! prefixes and item names every generated compilation unit uses.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no codegen-specific types.
//! - Case mapping is ASCII-only so output never depends on the host locale.

pub mod conventions;
pub mod naming;

pub use naming::{DerivedIdentifier, derive_identifier, derive_private_type_name, starts_like_identifier};
