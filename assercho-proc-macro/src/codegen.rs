//! Code generation for the debug macros.

use crate::parsing::{DebugArgs, DisabledArgs};
use crate::spelling::source_spelling;
use crate::types::{Argument, OutputMode};
use crate::validation::validate_argument_count;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{LitStr, Path};

/// Names introduced by the expansion.
///
/// Mixed-site hygiene keeps them invisible to the caller's expressions, so an
/// argument named `sink` or `value` still refers to the caller's binding.
struct Locals {
    sink: Ident,
    value: Ident,
}

impl Locals {
    fn new() -> Self {
        Self {
            sink: Ident::new("sink", Span::mixed_site()),
            value: Ident::new("value", Span::mixed_site()),
        }
    }
}

/// Generates the statements for a single `<name> = <value>` entry.
///
/// The expression is evaluated once, by reference, as the scrutinee of a
/// `match` so that temporaries live until the entry has been written. The
/// name is a string literal built from the caller's tokens.
fn generate_entry(
    krate: &Path,
    locals: &Locals,
    argument: &Argument,
    mode: OutputMode,
) -> TokenStream {
    let Locals { sink, value } = locals;
    let expr = &argument.expr;
    let name = LitStr::new(&source_spelling(&argument.source), Span::call_site());
    let prefix = mode.prefix();
    let suffix = mode.suffix();

    quote! {
        match &(#expr) {
            #value => {
                #krate::__private::label(&mut #sink, #prefix, #name);
                (&#krate::__private::Probe(#value)).render_to(&mut #sink);
                #krate::__private::text(&mut #sink, #suffix);
            }
        }
    }
}

/// Generates the `--> file(line)` banner written after the last entry.
fn generate_banner(krate: &Path, locals: &Locals) -> TokenStream {
    let sink = &locals.sink;
    quote! {
        #krate::__private::banner(&mut #sink, ::core::file!(), ::core::line!());
    }
}

/// Generate the complete expansion for one call: validate, then unroll.
///
/// Entries are emitted in source order, one block per expression, so the
/// expansion has no loop and no runtime indexing.
pub fn generate_debug_implementation(
    args: &DebugArgs,
    mode: OutputMode,
) -> syn::Result<TokenStream> {
    validate_argument_count(&args.arguments, mode)?;

    let krate = &args.krate;
    let sink_expr = &args.sink;
    let locals = Locals::new();
    let sink = &locals.sink;

    let entries = args
        .arguments
        .iter()
        .map(|argument| generate_entry(krate, &locals, argument, mode));
    let banner = mode.has_banner().then(|| generate_banner(krate, &locals));

    Ok(quote! {{
        #[allow(unused_imports)]
        use #krate::__private::{RenderKnown as _, RenderUnknown as _};
        let mut #sink = #sink_expr;
        #(#entries)*
        #banner
    }})
}

/// Generate the expansion for a disabled build: validate, then emit `()`.
///
/// The arity rules match the enabled build, so a call that compiles in one
/// profile compiles in the other. Nothing from the arguments is emitted.
pub fn generate_disabled_implementation(
    args: &DisabledArgs,
    mode: OutputMode,
) -> syn::Result<TokenStream> {
    validate_argument_count(&args.arguments, mode)?;
    Ok(quote!(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_ARGUMENTS;

    fn expand(args: DebugArgs, mode: OutputMode) -> String {
        generate_debug_implementation(&args, mode).unwrap().to_string()
    }

    #[test]
    fn test_one_block_per_expression() {
        let code = expand(syn::parse_quote!(assercho, out; a, b, c), OutputMode::Compact);
        assert_eq!(code.matches("render_to").count(), 3);
        assert_eq!(code.matches("label").count(), 3);
    }

    #[test]
    fn test_expression_emitted_once_for_evaluation() {
        let code = expand(syn::parse_quote!(assercho, out; bump(n)), OutputMode::Compact);
        assert_eq!(code.matches("match & (bump (n))").count(), 1);
        // The only other occurrence is inside the name literal.
        assert_eq!(code.matches("bump").count(), 2);
    }

    #[test]
    fn test_name_is_caller_spelling() {
        let args = syn::parse_str::<DebugArgs>("assercho, out; v[0] + v[1]").unwrap();
        let code = expand(args, OutputMode::Compact);
        assert!(code.contains("\"v[0] + v[1]\""), "{code}");
        assert!(!code.contains("stringify"));
    }

    #[test]
    fn test_compact_has_no_banner() {
        let code = expand(syn::parse_quote!(assercho, out; x), OutputMode::Compact);
        assert!(!code.contains("banner"));
        assert!(!code.contains("file !"));
        assert!(code.contains("\" \""));
    }

    #[test]
    fn test_verbose_ends_with_banner() {
        let code = expand(syn::parse_quote!(assercho, out; x, y), OutputMode::Verbose);
        assert_eq!(code.matches("banner").count(), 1);
        assert!(code.contains("\"\\t\""));
        assert!(code.contains("\"\\n\""));
        let banner_at = code.find("banner").unwrap();
        let last_entry_at = code.rfind("render_to").unwrap();
        assert!(banner_at > last_entry_at);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let args: DebugArgs = syn::parse_quote!(assercho, out;);
        assert!(generate_debug_implementation(&args, OutputMode::Compact).is_err());
    }

    #[test]
    fn test_disabled_emits_unit_only() {
        let args: DisabledArgs = syn::parse_quote!(x, side_effect(), "text");
        let code = generate_disabled_implementation(&args, OutputMode::Verbose)
            .unwrap()
            .to_string();
        assert_eq!(code, "()");
    }

    #[test]
    fn test_disabled_keeps_arity_rules() {
        let empty: DisabledArgs = syn::parse_quote!();
        let err = generate_disabled_implementation(&empty, OutputMode::Compact).unwrap_err();
        assert!(err.to_string().contains("debug! requires at least one expression"));

        let source = vec!["0"; MAX_ARGUMENTS + 1].join(", ");
        let too_many = syn::parse_str::<DisabledArgs>(&source).unwrap();
        let err = generate_disabled_implementation(&too_many, OutputMode::Verbose).unwrap_err();
        assert!(err.to_string().contains("Too many expressions for debug_verbose!"));
    }
}
