//! Derive Rust identifier fragments from type names and variant strings.
//!
//! The derivation is deliberately simple so users can predict the generated names:
//!
//! - split on every run of characters that are not ASCII alphanumeric,
//! - upper-case the first character of each segment (ASCII only),
//! - concatenate the segments.
//!
//! ## Notes
//!
//! - Non-ASCII characters act as separators. Every fragment is therefore a valid identifier
//!   continuation, and the mapping never depends on locale tables.
//! - The derivation is not injective in general (`"Aa_b"` and `"AaB"` both give `"AaB"`). Callers that
//!   need uniqueness must check the derived set themselves.

use crate::conventions;

/// A variant string paired with its identifier-safe form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedIdentifier {
    /// The literal string placed inside the quoted constant.
    pub raw: String,
    /// The Pascal-case fragment used to build constant names.
    pub pascal_case: String,
}

impl DerivedIdentifier {
    /// Derive the identifier fragment for `input`.
    pub fn derive(input: &str) -> Self {
        Self {
            raw: input.to_string(),
            pascal_case: derive_identifier(input),
        }
    }

    /// Whether the derivation produced no usable characters (e.g. `""` or `"__"`).
    pub fn is_empty(&self) -> bool {
        self.pascal_case.is_empty()
    }
}

/// Convert `input` to a Pascal-case identifier fragment.
///
/// ## Examples
/// ```rust
/// use strenum_core::derive_identifier;
/// assert_eq!(derive_identifier("Cc_xxxx_zzz"), "CcXxxxZzz");
/// assert_eq!(derive_identifier("in_review"), "InReview");
/// assert_eq!(derive_identifier("main"), "Main");
/// ```
pub fn derive_identifier(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Name of the unexported backing type for `type_name`.
///
/// The `private` prefix keeps the first character lower-case, and it also disambiguates type names
/// that already start lower-case (`"main"` gives `privateMainEnumType`, never `main`).
///
/// ## Examples
/// ```rust
/// use strenum_core::derive_private_type_name;
/// assert_eq!(derive_private_type_name("Something"), "privateSomethingEnumType");
/// assert_eq!(derive_private_type_name("main"), "privateMainEnumType");
/// ```
pub fn derive_private_type_name(type_name: &str) -> String {
    conventions::private_backing_type_name(&derive_identifier(type_name))
}

/// Check whether `name` starts the way a type name must (ASCII letter or `_`).
pub fn starts_like_identifier(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_splits_on_underscores() {
        assert_eq!(derive_identifier("Cc_xxxx_zzz"), "CcXxxxZzz");
        assert_eq!(derive_identifier("in_review"), "InReview");
    }

    #[test]
    fn test_derive_keeps_segment_tail_unchanged() {
        assert_eq!(derive_identifier("backlog"), "Backlog");
        assert_eq!(derive_identifier("HTTPServer"), "HTTPServer");
        assert_eq!(derive_identifier("xml_HTTP"), "XmlHTTP");
    }

    #[test]
    fn test_derive_collapses_separator_runs() {
        assert_eq!(derive_identifier("__a--b  c__"), "ABC");
        assert_eq!(derive_identifier("a.b/c"), "ABC");
    }

    #[test]
    fn test_derive_treats_non_ascii_as_separator() {
        assert_eq!(derive_identifier("caf\u{e9}_au_lait"), "CafAuLait");
        assert_eq!(derive_identifier("\u{fc}ber"), "Ber");
    }

    #[test]
    fn test_derive_leading_digit_is_kept() {
        assert_eq!(derive_identifier("1st_place"), "1stPlace");
    }

    #[test]
    fn test_derive_empty_inputs() {
        assert_eq!(derive_identifier(""), "");
        assert_eq!(derive_identifier("___"), "");
        assert!(DerivedIdentifier::derive("-").is_empty());
    }

    #[test]
    fn test_derive_collision_example() {
        assert_eq!(derive_identifier("Aa_b"), derive_identifier("AaB"));
    }

    #[test]
    fn test_derived_identifier_keeps_raw() {
        let id = DerivedIdentifier::derive("in_review");
        assert_eq!(id.raw, "in_review");
        assert_eq!(id.pascal_case, "InReview");
    }

    #[test]
    fn test_private_type_name() {
        assert_eq!(derive_private_type_name("Something"), "privateSomethingEnumType");
        assert_eq!(derive_private_type_name("main"), "privateMainEnumType");
        assert_eq!(derive_private_type_name("http_method"), "privateHttpMethodEnumType");
    }

    #[test]
    fn test_starts_like_identifier() {
        assert!(starts_like_identifier("Status"));
        assert!(starts_like_identifier("main"));
        assert!(starts_like_identifier("_hidden"));
        assert!(!starts_like_identifier("1st"));
        assert!(!starts_like_identifier(""));
        assert!(!starts_like_identifier("-x"));
    }
}
