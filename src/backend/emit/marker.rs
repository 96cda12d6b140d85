//! Emit the closed capability type.
//!
//! Rust has no need for a sealing marker method: the public type wraps a private backing type
//! through a private field, so code outside the generated module can hold and compare values but
//! can never construct a new one. The only values that exist are the module's constants.

use proc_macro2::TokenStream;
use quote::quote;

use super::{EnumEmitter, GeneratedSection, GenerationError, SectionKind};

impl EnumEmitter<'_> {
    /// Emit the capability type, its backing type, and the string conversions.
    pub fn emit_marker_type(&self) -> Result<GeneratedSection, GenerationError> {
        Ok(GeneratedSection::new(SectionKind::MarkerType, self.marker_type_tokens()?))
    }

    fn marker_type_tokens(&self) -> Result<TokenStream, GenerationError> {
        let enum_type = self.enum_type()?;
        let private_type = self.private_type()?;
        let doc = format!(
            " Closed set of string values. Only the `{}*` constants of this module construct it.",
            self.names.enum_type
        );

        Ok(quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct #enum_type(#private_type);

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            struct #private_type(&'static str);

            impl #private_type {
                const fn as_str(&self) -> &'static str {
                    self.0
                }
            }

            impl #enum_type {
                /// Returns the string value, verbatim.
                pub const fn as_str(&self) -> &'static str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for #enum_type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl AsRef<str> for #enum_type {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::backend::{CodegenConfig, EnumEmitter, EnumNames, SectionKind};
    use crate::spec::EnumSpec;

    fn marker_source(type_name: &str) -> String {
        let spec = EnumSpec::new(type_name, ["Aaa", "Bbb", "Ccc"]).unwrap();
        let names = EnumNames::resolve(&spec).unwrap();
        let config = CodegenConfig::default();
        let section = EnumEmitter::new(&names, &config).emit_marker_type().unwrap();
        assert_eq!(section.kind, SectionKind::MarkerType);
        section.tokens.to_string()
    }

    #[test]
    fn test_marker_declares_capability_and_backing_type() {
        let src = marker_source("Something");
        assert!(src.contains("pub struct EnumSomething (privateSomethingEnumType)"));
        assert!(src.contains("struct privateSomethingEnumType (& 'static str)"));
        assert!(!src.contains("pub struct privateSomethingEnumType"));
    }

    #[test]
    fn test_marker_exposes_string_conversion() {
        let src = marker_source("Something");
        assert!(src.contains("impl fmt :: Display for EnumSomething"));
        assert!(src.contains("impl AsRef < str > for EnumSomething"));
        assert!(src.contains("pub const fn as_str (& self) -> & 'static str"));
    }

    #[test]
    fn test_marker_parses_as_items() {
        let src = marker_source("main");
        let file = syn::parse_file(&src).unwrap();
        assert_eq!(file.items.len(), 6);
    }
}
