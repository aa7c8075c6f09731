//! Macro argument parsing structures.

use crate::types::Argument;
use proc_macro2::TokenStream;
use syn::{
    Expr, Path, Token,
    buffer::Cursor,
    parse::{Parse, ParseStream},
};

/// Expander input: `krate, sink; exprs...`
///
/// `krate` is the `$crate` path of the runtime crate and `sink` the
/// `io::Write` value every entry is written to. Both are supplied by the
/// `macro_rules!` wrappers, never by users.
pub struct DebugArgs {
    pub krate: Path,
    pub sink: Expr,
    pub arguments: Vec<Argument>,
}

impl Parse for DebugArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let krate = input.call(Path::parse_mod_style)?;
        input.parse::<Token![,]>()?;
        let sink = input.parse()?;
        input.parse::<Token![;]>()?;

        let arguments = parse_arguments(input)?;

        Ok(Self {
            krate,
            sink,
            arguments,
        })
    }
}

/// Input of a disabled build: the expressions only.
pub struct DisabledArgs {
    pub arguments: Vec<Argument>,
}

impl Parse for DisabledArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let arguments = parse_arguments(input)?;
        Ok(Self { arguments })
    }
}

/// Comma-separated expressions, trailing comma allowed.
fn parse_arguments(input: ParseStream) -> syn::Result<Vec<Argument>> {
    let mut arguments = Vec::new();

    while !input.is_empty() {
        let begin = input.cursor();
        let expr: Expr = input.parse()?;
        let source = tokens_between(begin, input.cursor());
        arguments.push(Argument { expr, source });

        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }

    Ok(arguments)
}

/// The original token trees from `begin` up to, not including, `end`.
fn tokens_between<'a>(begin: Cursor<'a>, end: Cursor<'a>) -> TokenStream {
    let mut tokens = TokenStream::new();
    let mut cursor = begin;

    while cursor < end {
        match cursor.token_tree() {
            Some((tree, next)) => {
                tokens.extend(std::iter::once(tree));
                cursor = next;
            }
            None => break,
        }
    }

    tokens
}
