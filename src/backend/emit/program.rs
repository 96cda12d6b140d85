//! Assemble a complete generated unit into formatted Rust source.
//!
//! This module implements the unit-level API for the emitter:
//!
//! - the provenance banner (tool name + invocation arguments),
//! - inner attributes and imports,
//! - the marker-type, constant and parser sections, always in that order,
//! - `syn` validation and `prettyplease` formatting.
//!
//! ## Notes
//!
//! - Emission is codegen-only: it does not read/write files or access the network.
//! - The output is validated twice: once as a token tree before formatting, and once as text after the
//!   banner has been prepended. Either failure is a [`GenerationError::CodegenInvalid`].

use proc_macro2::TokenStream;
use quote::quote;
use strenum_core::conventions::{ALLOWED_LINTS, DIR_PLACEHOLDER, TOOL_NAME, VARIANT_SEPARATOR};

use super::{EnumEmitter, GeneratedSection, GenerationError, SectionKind};

impl EnumEmitter<'_> {
    /// Emit the complete unit to formatted Rust source.
    #[tracing::instrument(skip_all, fields(enum_type = %self.names.enum_type))]
    pub fn emit_unit(&self) -> Result<String, GenerationError> {
        let sections = self.emit_sections()?;
        for section in &sections {
            tracing::debug!(kind = ?section.kind, "emitted section");
        }

        let tokens: TokenStream = sections.into_iter().map(|section| section.tokens).collect();
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| GenerationError::CodegenInvalid(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);

        let output = format!("{}{}", self.banner(), formatted);
        syn::parse_file(&output).map_err(|e| GenerationError::CodegenInvalid(e.to_string()))?;

        Ok(output)
    }

    /// Emit every section of the unit, in assembly order.
    ///
    /// Stops at the first failing section; no partial unit is returned.
    pub fn emit_sections(&self) -> Result<Vec<GeneratedSection>, GenerationError> {
        Ok(vec![
            self.emit_imports()?,
            self.emit_marker_type()?,
            self.emit_constants()?,
            self.emit_parser()?,
        ])
    }

    /// Emit the inner lint attribute and the `use` declarations the sections rely on.
    pub fn emit_imports(&self) -> Result<GeneratedSection, GenerationError> {
        let lints = ALLOWED_LINTS
            .iter()
            .map(|lint| Self::ident(lint))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GeneratedSection::new(
            SectionKind::Imports,
            quote! {
                #![allow(#(#lints),*)]

                use std::fmt;
                use std::str::FromStr;
            },
        ))
    }

    /// The provenance banner, ending with a blank line.
    ///
    /// Records the tool and the arguments that reproduce this unit. Arguments are quoted shell-style
    /// when needed, so pasting the line into a shell reruns the same generation:
    ///
    /// ```text
    /// // Code generated by "strenum"; DO NOT EDIT.
    /// // strenum <dir> Status backlog,in_review,done
    /// // strenum gen 'Http method' 'in review,done'
    /// ```
    pub fn banner(&self) -> String {
        let variants: Vec<&str> = self.names.variants.iter().map(|v| v.id.raw.as_str()).collect();
        // The placeholder is not a real argument and is written as is.
        let dir = match &self.config.output_dir {
            Some(dir) => shell_quote(dir),
            None => DIR_PLACEHOLDER.to_string(),
        };
        format!(
            "// Code generated by \"{tool}\"; DO NOT EDIT.\n// {tool} {dir} {type_name} {variants}\n\n",
            tool = TOOL_NAME,
            dir = dir,
            type_name = shell_quote(&self.names.type_name),
            variants = shell_quote(&variants.join(&VARIANT_SEPARATOR.to_string())),
        )
    }
}

/// Quote one argument for the banner.
///
/// - plain words are written unchanged
/// - anything else is single-quoted, with `'` written as `'\''`
/// - arguments holding characters that cannot appear raw in a line comment use ANSI-C `$'...'`
///   quoting, with those characters escaped
fn shell_quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_plain) {
        return arg.to_string();
    }
    if !arg.chars().any(needs_escape) {
        return format!("'{}'", arg.replace('\'', r"'\''"));
    }

    let mut out = String::with_capacity(arg.len() + 3);
    out.push_str("$'");
    for c in arg.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c if needs_escape(c) => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn is_plain(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || "_-./:@%+=,".contains(c)
    } else {
        !c.is_whitespace() && !needs_escape(c)
    }
}

// Control characters would end or corrupt the comment line; rustc denies the bidi ones
// (`text_direction_codepoint_in_comment`).
fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}
