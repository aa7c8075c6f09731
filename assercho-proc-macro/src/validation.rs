//! Arity validation for argument lists.

use crate::constants::MAX_ARGUMENTS;
use crate::types::{Argument, OutputMode};
use proc_macro2::Span;
use syn::spanned::Spanned;

/// Check that the list holds between one and `MAX_ARGUMENTS` expressions.
pub fn validate_argument_count(arguments: &[Argument], mode: OutputMode) -> syn::Result<()> {
    if arguments.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            format!(
                "{} requires at least one expression. Example: {}(x, y)",
                mode.macro_name(),
                mode.macro_name()
            ),
        ));
    }

    if let Some(excess) = arguments.get(MAX_ARGUMENTS) {
        return Err(syn::Error::new(
            excess.expr.span(),
            format!(
                "Too many expressions for {} ({}). Maximum allowed: {}. \
                 Split the call into several smaller ones.",
                mode.macro_name(),
                arguments.len(),
                MAX_ARGUMENTS
            ),
        ));
    }

    Ok(())
}
