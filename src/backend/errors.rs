//! Define the error kinds a generation run can surface.
//!
//! Exactly three kinds exist. The first two are user input problems the caller can fix; the third is
//! an internal defect in the emitters and is always fatal.

use thiserror::Error;

/// Error during enum code generation.
///
/// ## Examples
///
/// ```rust
/// use strenum::{GenerationError, generate};
///
/// match generate("Status", ["Aa_b", "AaB"]) {
///     Err(GenerationError::Collision { first, second, .. }) => {
///         assert_eq!((first.as_str(), second.as_str()), ("Aa_b", "AaB"));
///     }
///     other => panic!("expected a collision, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The type name or variant list is unusable (empty, not identifier-like, contains `,`).
    #[error("invalid enum spec: {0}")]
    InvalidSpec(String),

    /// Two variants derive the same identifier fragment.
    #[error("variants {first:?} and {second:?} both derive the identifier `{identifier}`; rename one of them")]
    Collision {
        first: String,
        second: String,
        identifier: String,
    },

    /// The emitted text does not parse as Rust. This is a strenum bug, never a user error.
    #[error("generated code is not valid Rust (internal error, please report): {0}")]
    CodegenInvalid(String),
}

impl GenerationError {
    /// Whether the caller can fix this by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, GenerationError::InvalidSpec(_) | GenerationError::Collision { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_names_both_variants() {
        let err = GenerationError::Collision {
            first: "Aa_b".to_string(),
            second: "AaB".to_string(),
            identifier: "AaB".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Aa_b\""));
        assert!(msg.contains("\"AaB\""));
        assert!(msg.contains("`AaB`"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(GenerationError::InvalidSpec("x".to_string()).is_user_error());
        assert!(
            GenerationError::Collision {
                first: "a".to_string(),
                second: "A".to_string(),
                identifier: "A".to_string(),
            }
            .is_user_error()
        );
        assert!(!GenerationError::CodegenInvalid("x".to_string()).is_user_error());
    }
}
