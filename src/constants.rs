//! Fixed text written by the debug macros.

/// Separates the captured expression text from its rendered value.
pub const NAME_VALUE_SEPARATOR: &str = " = ";

/// Rendering used for every value whose type has no rendering rule.
pub const UNKNOWN_RENDERING: &str = "<unknown>";

/// Starts the location banner written after a verbose call.
pub const BANNER_MARKER: &str = "--> ";
