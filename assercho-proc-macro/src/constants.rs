//! Output-mode strings and compile-time limits for the expander.

// ============================================================================
// Output Mode Strings
// ============================================================================

/// Written before each entry in compact mode.
pub const COMPACT_PREFIX: &str = "";

/// Written after each entry in compact mode, including the last one.
pub const COMPACT_SUFFIX: &str = " ";

/// Written before each entry in verbose mode.
pub const VERBOSE_PREFIX: &str = "\t";

/// Written after each entry in verbose mode, including the last one, so the
/// location banner starts on its own line.
pub const VERBOSE_SUFFIX: &str = "\n";

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of expressions in a single call.
///
/// Each expression unrolls into its own block of generated code. The bound is
/// far above any hand-written call and only stops runaway code generation
/// from macro-generated argument lists.
pub const MAX_ARGUMENTS: usize = 1024;
