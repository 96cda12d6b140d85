//! Emit string parsing and bulk conversion helpers.
//!
//! The lookup is a single `match` over the private string constants, in input order, so it is
//! exhaustive over the variant set by construction. Matching is exact byte equality: no trimming,
//! no case folding.
//!
//! ## Notes
//!
//! - `to_strings` accepts anything convertible into `Option<Enum*>`. Rust values of the capability type
//!   are never "empty", so `None` plays the role of the missing/zero value and is rejected with
//!   `UnexpectedNilError`.
//! - `must_to_strings` is a thin unwrap-or-abort layer over `to_strings`, emitted separately so it can be
//!   switched off.

use proc_macro2::TokenStream;
use quote::quote;
use strenum_core::conventions::{
    FROM_STRING_FN, FROM_STRINGS_FN, MUST_TO_STRINGS_FN, TO_STRINGS_FN, UNEXPECTED_NIL_ERROR, UNKNOWN_VALUE_ERROR,
};

use super::{EnumEmitter, GeneratedSection, GenerationError, SectionKind};

impl EnumEmitter<'_> {
    /// Emit the whole parser section: lookup, bulk helpers and (optionally) the panicking wrapper.
    pub fn emit_parser(&self) -> Result<GeneratedSection, GenerationError> {
        let from_string = self.emit_from_string()?;
        let bulk = self.emit_bulk_helpers()?;
        let must = if self.config.must_helpers {
            self.emit_must_helpers()?
        } else {
            TokenStream::new()
        };

        Ok(GeneratedSection::new(
            SectionKind::Parser,
            quote! {
                #from_string
                #bulk
                #must
            },
        ))
    }

    /// Emit `UnknownValueError`, `from_string` and the `FromStr` impl.
    pub(super) fn emit_from_string(&self) -> Result<TokenStream, GenerationError> {
        let enum_type = self.enum_type()?;
        let from_string = Self::ident(FROM_STRING_FN)?;
        let unknown = Self::ident(UNKNOWN_VALUE_ERROR)?;
        let message = format!("unknown {} {{}}", self.names.enum_type);

        let arms = self
            .names
            .variants
            .iter()
            .map(|variant| {
                let str_ident = Self::ident(&variant.str_const)?;
                let enum_ident = Self::ident(&variant.enum_const)?;
                Ok(quote! { #str_ident => Ok(#enum_ident), })
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        Ok(quote! {
            /// Error returned when a string names no variant.
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct #unknown(String);

            impl #unknown {
                /// The rejected input.
                pub fn value(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for #unknown {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, #message, self.0)
                }
            }

            impl std::error::Error for #unknown {}

            /// Looks up the variant whose string value equals `s` exactly.
            pub fn #from_string(s: &str) -> Result<#enum_type, #unknown> {
                match s {
                    #(#arms)*
                    _ => Err(#unknown(s.to_string())),
                }
            }

            impl FromStr for #enum_type {
                type Err = #unknown;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    #from_string(s)
                }
            }
        })
    }

    /// Emit `UnexpectedNilError`, `to_strings` and `from_strings`.
    pub(super) fn emit_bulk_helpers(&self) -> Result<TokenStream, GenerationError> {
        let enum_type = self.enum_type()?;
        let from_string = Self::ident(FROM_STRING_FN)?;
        let to_strings = Self::ident(TO_STRINGS_FN)?;
        let from_strings = Self::ident(FROM_STRINGS_FN)?;
        let unknown = Self::ident(UNKNOWN_VALUE_ERROR)?;
        let nil = Self::ident(UNEXPECTED_NIL_ERROR)?;
        let nil_message = format!("unexpected enum {} value: nil", self.names.enum_type);

        Ok(quote! {
            /// Error returned when a bulk conversion meets a missing value.
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct #nil;

            impl fmt::Display for #nil {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(#nil_message)
                }
            }

            impl std::error::Error for #nil {}

            /// Converts every value to its string form, preserving order and length.
            ///
            /// Fails on the first missing (`None`) element.
            pub fn #to_strings<I>(values: I) -> Result<Vec<&'static str>, #nil>
            where
                I: IntoIterator,
                I::Item: Into<Option<#enum_type>>,
            {
                values
                    .into_iter()
                    .map(|value| {
                        let value: Option<#enum_type> = value.into();
                        value.map(|v| v.as_str()).ok_or(#nil)
                    })
                    .collect()
            }

            /// Parses every string, preserving order and length.
            ///
            /// Fails on the first string that names no variant.
            pub fn #from_strings<I>(values: I) -> Result<Vec<#enum_type>, #unknown>
            where
                I: IntoIterator,
                I::Item: AsRef<str>,
            {
                values
                    .into_iter()
                    .map(|value| #from_string(value.as_ref()))
                    .collect()
            }
        })
    }

    /// Emit the panicking `must_to_strings` wrapper.
    pub(super) fn emit_must_helpers(&self) -> Result<TokenStream, GenerationError> {
        let enum_type = self.enum_type()?;
        let to_strings = Self::ident(TO_STRINGS_FN)?;
        let must_to_strings = Self::ident(MUST_TO_STRINGS_FN)?;

        Ok(quote! {
            /// Like `to_strings`, but panics on a missing element.
            pub fn #must_to_strings<I>(values: I) -> Vec<&'static str>
            where
                I: IntoIterator,
                I::Item: Into<Option<#enum_type>>,
            {
                match #to_strings(values) {
                    Ok(strings) => strings,
                    Err(err) => panic!("{}", err),
                }
            }
        })
    }
}
