//! Emit the per-variant constant table.
//!
//! For every variant, in input order:
//!
//! - a private `&str` constant holding the literal text (`strMainAaa`),
//! - a public constant of the capability type built from it (`EnumMainAaa`).
//!
//! All string constants come first, then all enum constants, so regenerating after adding a variant
//! produces two small, predictable hunks.
//!
//! ## Notes
//!
//! - Literals go through `proc_macro2::Literal::string`, which escapes quotes, backslashes and control
//!   characters; variant text is never spliced into source by hand.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{EnumEmitter, GeneratedSection, GenerationError, SectionKind};

impl EnumEmitter<'_> {
    /// Emit the string and enum constants for every variant.
    pub fn emit_constants(&self) -> Result<GeneratedSection, GenerationError> {
        let enum_type = self.enum_type()?;
        let private_type = self.private_type()?;

        let mut str_consts = Vec::with_capacity(self.names.variants.len());
        let mut enum_consts = Vec::with_capacity(self.names.variants.len());

        for variant in &self.names.variants {
            let str_ident = Self::ident(&variant.str_const)?;
            let enum_ident = Self::ident(&variant.enum_const)?;
            let raw = Literal::string(&variant.id.raw);

            str_consts.push(quote! {
                const #str_ident: &str = #raw;
            });
            enum_consts.push(quote! {
                pub const #enum_ident: #enum_type = #enum_type(#private_type(#str_ident));
            });
        }

        let tokens: TokenStream = quote! {
            #(#str_consts)*
            #(#enum_consts)*
        };
        Ok(GeneratedSection::new(SectionKind::Constants, tokens))
    }
}
