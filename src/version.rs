//! strenum version information.
//!
//! This module exposes the generator version as a single constant so the CLI and any provenance
//! reporting agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The version is deliberately *not* written into generated files: regenerating with a newer
//!   strenum must not produce a diff when the emitted code is unchanged.

/// The strenum version string (for example, `0.1.0`).
pub const STRENUM_VERSION: &str = env!("CARGO_PKG_VERSION");
