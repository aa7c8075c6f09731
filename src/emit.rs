//! Sink helpers called from expanded macro code.
//!
//! Every helper writes straight to the sink it is given and drops write
//! errors: a failing sink is the surrounding program's concern, and a
//! diagnostic call has no way to report it.

use std::io::{self, Write};

use crate::constants::{BANNER_MARKER, NAME_VALUE_SEPARATOR};

/// The sink used by `debug!` and `debug_verbose!`.
///
/// The handle is not locked for the duration of a call. Each write takes the
/// stdout lock on its own, so calls made concurrently from several threads
/// may interleave at entry granularity.
#[inline]
pub fn stdout() -> io::Stdout {
    io::stdout()
}

/// Writes `<prefix><name> = `.
#[inline]
pub fn label<W: Write + ?Sized>(out: &mut W, prefix: &str, name: &str) {
    let _ = out.write_all(prefix.as_bytes());
    let _ = out.write_all(name.as_bytes());
    let _ = out.write_all(NAME_VALUE_SEPARATOR.as_bytes());
}

/// Writes an entry separator.
#[inline]
pub fn text<W: Write + ?Sized>(out: &mut W, separator: &str) {
    let _ = out.write_all(separator.as_bytes());
}

/// Writes `--> <file>(<line>)` and a newline.
#[inline]
pub fn banner<W: Write + ?Sized>(out: &mut W, file: &str, line: u32) {
    let _ = writeln!(out, "{BANNER_MARKER}{file}({line})");
}
