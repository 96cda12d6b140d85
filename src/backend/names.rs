//! Resolve every identifier a generated unit declares.
//!
//! [`EnumNames::resolve`] is the only place identifiers are derived. The emitters read the resulting
//! table and never derive names themselves, so all three sections agree on the same spellings.
//!
//! ## Notes
//!
//! - Collisions are reported in input order: the error names the earlier variant first.
//! - Exact duplicates are collisions too, since they would declare the same constants twice.
//! - Variant constants cannot shadow the unit's fixed items: they always carry a `str`/`Enum` prefix plus
//!   a non-empty fragment, a shape no fixed name has (`strenum_core`'s `naming_guardrails` test).

use std::collections::HashMap;

use strenum_core::{DerivedIdentifier, conventions, derive_identifier, derive_private_type_name};

use super::GenerationError;
use crate::spec::EnumSpec;

/// Names generated for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantNames {
    /// Raw string and its Pascal-case fragment.
    pub id: DerivedIdentifier,
    /// Private string constant (`strMainAaa`).
    pub str_const: String,
    /// Public enum constant (`EnumMainAaa`).
    pub enum_const: String,
}

/// Identifier table for one generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNames {
    /// Type name exactly as supplied.
    pub type_name: String,
    /// Pascal-case form of the type name.
    pub pascal: String,
    /// Public capability type (`EnumMain`).
    pub enum_type: String,
    /// Private backing type (`privateMainEnumType`).
    pub private_type: String,
    /// Per-variant names, in input order.
    pub variants: Vec<VariantNames>,
}

impl EnumNames {
    /// Derive all names for `spec`.
    ///
    /// ## Errors
    ///
    /// - [`GenerationError::InvalidSpec`] if a variant derives an empty fragment.
    /// - [`GenerationError::Collision`] if two variants derive the same fragment.
    #[tracing::instrument(skip_all, fields(type_name = spec.type_name()))]
    pub fn resolve(spec: &EnumSpec) -> Result<Self, GenerationError> {
        let pascal = derive_identifier(spec.type_name());
        let enum_type = conventions::enum_type_name(&pascal);
        let private_type = derive_private_type_name(spec.type_name());

        let mut seen: HashMap<String, &str> = HashMap::with_capacity(spec.variants().len());
        let mut variants = Vec::with_capacity(spec.variants().len());

        for raw in spec.variants() {
            let id = DerivedIdentifier::derive(raw);
            if id.is_empty() {
                return Err(GenerationError::InvalidSpec(format!(
                    "variant {:?} contains no ASCII letters or digits to derive an identifier from",
                    raw
                )));
            }
            if let Some(first) = seen.insert(id.pascal_case.clone(), raw) {
                return Err(GenerationError::Collision {
                    first: first.to_string(),
                    second: raw.clone(),
                    identifier: id.pascal_case,
                });
            }
            variants.push(VariantNames {
                str_const: conventions::str_const_name(&pascal, &id.pascal_case),
                enum_const: conventions::enum_const_name(&pascal, &id.pascal_case),
                id,
            });
        }

        let names = Self {
            type_name: spec.type_name().to_string(),
            pascal,
            enum_type,
            private_type,
            variants,
        };

        tracing::debug!(
            enum_type = %names.enum_type,
            variant_count = names.variants.len(),
            "resolved names"
        );
        Ok(names)
    }

    /// Module / file stem the unit belongs in.
    pub fn module_name(&self) -> String {
        conventions::module_name(&self.pascal)
    }
}
