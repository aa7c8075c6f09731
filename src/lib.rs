//! Print expressions next to their values, for debugging.
//!
//! This crate provides two macros:
//! - `debug!`: `name = value ` for every expression, on the current line
//! - `debug_verbose!`: one tab-indented `name = value` line per expression,
//!   followed by a `--> file(line)` banner naming the call site
//!
//! # Architecture
//!
//! A call goes through three layers, all resolved at compile-time:
//! 1. **Entry point**: the `macro_rules!` wrappers below either forward to the
//!    expander or, in a disabled build, expand to `()`
//! 2. **Expansion**: the `assercho-proc-macro` crate unrolls the argument list
//!    into one block per expression
//! 3. **Rendering**: each block picks the rendering rule for its value from
//!    the value's static type (see [`Render`])
//!
//! The runtime side is organized into focused modules:
//! - `constants`: Fixed output text
//! - `emit`: Sink helpers called by expanded code
//! - `render`: Rendering rules and their static selection
//!
//! # Disabled Builds
//!
//! Diagnostics are compiled in only when `debug_assertions` is on and the
//! `disabled` feature is off. Otherwise both macros expand to `()`: the
//! arguments are not evaluated and no strings, calls or rendering code reach
//! the binary. The argument list is still checked, so an empty or oversized
//! call fails to compile in every profile. A variable used only inside these macros is therefore unused in
//! release builds.
//!
//! # Known Limitations
//!
//! - **Interleaving**: output goes straight to stdout, one write at a time.
//!   Calls made concurrently from several threads may interleave.
//! - **No flush**: compact output has no newline, so it stays in the stdout
//!   line buffer until something else ends the line or flushes.
//! - **Fixed rules**: types outside the [`Render`] table print `<unknown>`.

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod constants;
mod emit;
mod render;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use render::Render;

/// NOT PART OF THE PUBLIC API. Used by expanded macro code.
#[doc(hidden)]
pub mod __private {
    pub use crate::emit::{banner, label, stdout, text};
    pub use crate::render::{Probe, RenderKnown, RenderUnknown};
    pub use assercho_proc_macro::{compact, compact_disabled, verbose, verbose_disabled};
}

// ============================================================================
// Public Macros
// ============================================================================

/// Prints each expression and its value on the current line.
///
/// # Syntax
///
/// ```ignore
/// debug!(expr, ...)
/// ```
///
/// Writes `<expr> = <value> ` to stdout for every expression, in order,
/// with no newline and no location banner.
///
/// Each expression is evaluated exactly once, by reference, so values are not
/// moved out of the caller's variables.
///
/// # Examples
///
/// ```
/// use assercho::debug;
///
/// let x = 42;
/// let name = String::from("hi");
/// debug!(x, name, x > 40);
/// // x = 42 name = hi x > 40 = 1
/// println!();
/// ```
#[cfg(all(debug_assertions, not(feature = "disabled")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__private::compact!($crate, $crate::__private::stdout(); $($arg)*)
    };
}

/// Prints each expression and its value on the current line.
///
/// Disabled build: checks the arguments like an enabled build, then expands
/// to `()` without evaluating them.
#[cfg(not(all(debug_assertions, not(feature = "disabled"))))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__private::compact_disabled!($($arg)*)
    };
}

/// Prints each expression and its value on its own line, then the call site.
///
/// # Syntax
///
/// ```ignore
/// debug_verbose!(expr, ...)
/// ```
///
/// Writes `\t<expr> = <value>\n` to stdout for every expression, in order,
/// then `--> <file>(<line>)\n`.
///
/// # Examples
///
/// ```
/// use assercho::debug_verbose;
///
/// let x = 42;
/// let y = 3.5;
/// debug_verbose!(x, y);
/// //	x = 42
/// //	y = 3.5
/// // --> src/main.rs(7)
/// ```
#[cfg(all(debug_assertions, not(feature = "disabled")))]
#[macro_export]
macro_rules! debug_verbose {
    ($($arg:tt)*) => {
        $crate::__private::verbose!($crate, $crate::__private::stdout(); $($arg)*)
    };
}

/// Prints each expression and its value on its own line, then the call site.
///
/// Disabled build: checks the arguments like an enabled build, then expands
/// to `()` without evaluating them.
#[cfg(not(all(debug_assertions, not(feature = "disabled"))))]
#[macro_export]
macro_rules! debug_verbose {
    ($($arg:tt)*) => {
        $crate::__private::verbose_disabled!($($arg)*)
    };
}

/// `debug!` writing to an explicit `io::Write` sink. Used by this crate's tests.
#[doc(hidden)]
#[cfg(all(debug_assertions, not(feature = "disabled")))]
#[macro_export]
macro_rules! __debug_to {
    ($sink:expr; $($arg:tt)*) => {
        $crate::__private::compact!($crate, $sink; $($arg)*)
    };
}

#[doc(hidden)]
#[cfg(not(all(debug_assertions, not(feature = "disabled"))))]
#[macro_export]
macro_rules! __debug_to {
    ($sink:expr; $($arg:tt)*) => {
        $crate::__private::compact_disabled!($($arg)*)
    };
}

/// `debug_verbose!` writing to an explicit `io::Write` sink. Used by this crate's tests.
#[doc(hidden)]
#[cfg(all(debug_assertions, not(feature = "disabled")))]
#[macro_export]
macro_rules! __debug_verbose_to {
    ($sink:expr; $($arg:tt)*) => {
        $crate::__private::verbose!($crate, $sink; $($arg)*)
    };
}

#[doc(hidden)]
#[cfg(not(all(debug_assertions, not(feature = "disabled"))))]
#[macro_export]
macro_rules! __debug_verbose_to {
    ($sink:expr; $($arg:tt)*) => {
        $crate::__private::verbose_disabled!($($arg)*)
    };
}
