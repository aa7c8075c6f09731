//! Core types for the argument-list expander.

use crate::constants::{COMPACT_PREFIX, COMPACT_SUFFIX, VERBOSE_PREFIX, VERBOSE_SUFFIX};
use proc_macro2::TokenStream;
use syn::Expr;

/// How a call lays out its entries.
///
/// Both modes write every entry as `<prefix><name> = <value><suffix>`; they
/// differ only in the strings around an entry and in the trailing banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// All entries on one line, each followed by a single space. No banner.
    Compact,

    /// One tab-indented entry per line, then a `--> file(line)` banner.
    Verbose,
}

impl OutputMode {
    /// Text written before the captured expression source.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Compact => COMPACT_PREFIX,
            Self::Verbose => VERBOSE_PREFIX,
        }
    }

    /// Text written after each rendered value.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Compact => COMPACT_SUFFIX,
            Self::Verbose => VERBOSE_SUFFIX,
        }
    }

    /// Whether the call site banner follows the last entry.
    pub fn has_banner(self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Public macro name, used in diagnostics.
    pub fn macro_name(self) -> &'static str {
        match self {
            Self::Compact => "debug!",
            Self::Verbose => "debug_verbose!",
        }
    }
}

/// One expression of the argument list.
///
/// `source` holds the tokens exactly as they came from the invocation, with
/// the caller's spans, so the printed name can follow the caller's spelling
/// rather than the re-quoted form of `expr`.
pub struct Argument {
    pub expr: Expr,
    pub source: TokenStream,
}
