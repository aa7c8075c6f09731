//! Procedural macros behind `assercho::debug!` and `assercho::debug_verbose!`.
//!
//! These macros are not meant to be invoked directly. The `macro_rules!`
//! wrappers in the `assercho` crate forward to them after deciding, from the
//! build configuration, whether diagnostics are compiled in at all.
//!
//! # Architecture
//!
//! The expansion is divided into three phases:
//! 1. **Parsing**: the runtime crate path, the sink expression and the list of
//!    expressions are read from the invocation
//! 2. **Validation**: the list length is checked at compile-time
//! 3. **Code Generation**: one block per expression is emitted, in source order,
//!    followed by the location banner in verbose mode
//!
//! A disabled build runs the first two phases only and expands to `()`, so the
//! same calls are accepted and rejected in every profile.
//!
//! The implementation is organized into focused modules:
//! - `constants`: Mode strings and the argument limit
//! - `types`: The output mode
//! - `validation`: Arity checks
//! - `parsing`: Macro argument parsing
//! - `spelling`: Source text of each expression
//! - `codegen`: Code generation
//!
//! # Evaluation
//!
//! Every expression is evaluated exactly once, left to right, by reference.
//! The printed name is a string literal rebuilt from the caller's tokens and
//! their positions, so the expression is never spelled twice in evaluated code.
//!
//! # Name Hygiene
//!
//! The generated block is an isolated scope `{ ... }` and its locals carry
//! mixed-site spans, so they can neither shadow nor be shadowed by names used
//! in the caller's expressions.

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod spelling;
mod types;
mod validation;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use codegen::{generate_debug_implementation, generate_disabled_implementation};
use parsing::{DebugArgs, DisabledArgs};
use types::OutputMode;

fn expand(input: TokenStream, mode: OutputMode) -> TokenStream {
    let args = parse_macro_input!(input as DebugArgs);

    match generate_debug_implementation(&args, mode) {
        Ok(code) => TokenStream::from(code),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_disabled(input: TokenStream, mode: OutputMode) -> TokenStream {
    let args = parse_macro_input!(input as DisabledArgs);

    match generate_disabled_implementation(&args, mode) {
        Ok(code) => TokenStream::from(code),
        Err(err) => err.to_compile_error().into(),
    }
}

// ============================================================================
// Public Macros
// ============================================================================

/// Compact expansion: `name = value ` per expression, no banner.
///
/// # Syntax
///
/// ```ignore
/// compact!($crate, sink_expr; expr, ...)
/// ```
#[proc_macro]
pub fn compact(input: TokenStream) -> TokenStream {
    expand(input, OutputMode::Compact)
}

/// Verbose expansion: `\tname = value\n` per expression, then `--> file(line)\n`.
///
/// # Syntax
///
/// ```ignore
/// verbose!($crate, sink_expr; expr, ...)
/// ```
#[proc_macro]
pub fn verbose(input: TokenStream) -> TokenStream {
    expand(input, OutputMode::Verbose)
}

/// Disabled `compact!`: checks the argument list and expands to `()`.
///
/// # Syntax
///
/// ```ignore
/// compact_disabled!(expr, ...)
/// ```
#[proc_macro]
pub fn compact_disabled(input: TokenStream) -> TokenStream {
    expand_disabled(input, OutputMode::Compact)
}

/// Disabled `verbose!`: checks the argument list and expands to `()`.
///
/// # Syntax
///
/// ```ignore
/// verbose_disabled!(expr, ...)
/// ```
#[proc_macro]
pub fn verbose_disabled(input: TokenStream) -> TokenStream {
    expand_disabled(input, OutputMode::Verbose)
}
