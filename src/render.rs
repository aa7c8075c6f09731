//! Type-directed value rendering.
//!
//! The rendering rule for a value is picked by the compiler from the value's
//! static type. [`Render`] carries the rule for every supported type; anything
//! else falls back to `<unknown>` through [`Probe`], which relies on method
//! resolution preferring a by-value receiver over an auto-referenced one:
//!
//! - [`RenderKnown`] is implemented for `Probe<T>` when `T: Render`
//! - [`RenderUnknown`] is implemented for `&Probe<T>` for every `T`
//!
//! Calling `(&Probe(value)).render_to(out)` on a concrete type therefore
//! resolves to the known rule when one exists and to the fallback otherwise,
//! with no runtime type tag involved.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::io::{self, Write};
use std::ptr::NonNull;

use crate::constants::UNKNOWN_RENDERING;

mod sealed {
    pub trait Sealed {}
}

/// Types with a rendering rule.
///
/// | Type | Rendering |
/// |---|---|
/// | `char` | the character |
/// | integers of every width | decimal |
/// | `bool` | `0` or `1` |
/// | `f32`, `f64` | shortest round-tripping digits, exponent form outside `[1e-5, 1e16)` |
/// | `Complex<f32>`, `Complex<f64>` | `<re> + <im>i` (feature `complex`) |
/// | `str`, `String`, `Cow<str>`, `CStr`, `CString` | raw text, no quoting |
/// | `[u8; N]` | raw bytes up to the first NUL |
/// | `*const T`, `*mut T`, `NonNull<T>` | hexadecimal address |
/// | `&T`, `&mut T`, `Box<T>` | as `T` |
///
/// The trait is sealed: the set of rules is fixed.
pub trait Render: sealed::Sealed {
    /// Writes the value's rendering to `out`.
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

macro_rules! impl_render_display {
    ($($ty:ty)*) => {$(
        impl sealed::Sealed for $ty {}

        impl Render for $ty {
            #[inline]
            fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                write!(out, "{self}")
            }
        }
    )*};
}

impl_render_display!(char i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

/// Floats print the shortest round-tripping digits. Inside `[1e-5, 1e16)` they
/// print positionally (`3.5`, `0.00001`), outside it in exponent form
/// (`1e300`, `1e-7`) so the digit count stays bounded.
macro_rules! impl_render_float {
    ($($ty:ty)*) => {$(
        impl sealed::Sealed for $ty {}

        impl Render for $ty {
            fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                let magnitude = self.abs();
                if *self == 0.0 || !self.is_finite() || (1e-5..1e16).contains(&magnitude) {
                    write!(out, "{self}")
                } else {
                    write!(out, "{self:e}")
                }
            }
        }
    )*};
}

impl_render_float!(f32 f64);

impl sealed::Sealed for bool {}

impl Render for bool {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(if *self { b"1" } else { b"0" })
    }
}

#[cfg(feature = "complex")]
macro_rules! impl_render_complex {
    ($($ty:ty)*) => {$(
        impl sealed::Sealed for num_complex::Complex<$ty> {}

        impl Render for num_complex::Complex<$ty> {
            fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                self.re.render(out)?;
                out.write_all(b" + ")?;
                self.im.render(out)?;
                out.write_all(b"i")
            }
        }
    )*};
}

#[cfg(feature = "complex")]
impl_render_complex!(f32 f64);

// ============================================================================
// Text
// ============================================================================

impl sealed::Sealed for str {}

impl Render for str {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl sealed::Sealed for String {}

impl Render for String {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl sealed::Sealed for Cow<'_, str> {}

impl Render for Cow<'_, str> {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl sealed::Sealed for CStr {}

impl Render for CStr {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_bytes())
    }
}

impl sealed::Sealed for CString {}

impl Render for CString {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl<const N: usize> sealed::Sealed for [u8; N] {}

/// A fixed-size character buffer, read as NUL-terminated text.
impl<const N: usize> Render for [u8; N] {
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let end = self.iter().position(|&byte| byte == 0).unwrap_or(N);
        out.write_all(&self[..end])
    }
}

// ============================================================================
// Addresses
// ============================================================================

impl<T: ?Sized> sealed::Sealed for *const T {}

impl<T: ?Sized> Render for *const T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{:p}", *self)
    }
}

impl<T: ?Sized> sealed::Sealed for *mut T {}

impl<T: ?Sized> Render for *mut T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{:p}", *self)
    }
}

impl<T: ?Sized> sealed::Sealed for NonNull<T> {}

impl<T: ?Sized> Render for NonNull<T> {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{:p}", *self)
    }
}

// ============================================================================
// Indirection
// ============================================================================

impl<T: Render + ?Sized> sealed::Sealed for &T {}

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> sealed::Sealed for &mut T {}

impl<T: Render + ?Sized> Render for &mut T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> sealed::Sealed for Box<T> {}

impl<T: Render + ?Sized> Render for Box<T> {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).render(out)
    }
}

// ============================================================================
// Static Selection
// ============================================================================

/// Borrowed value whose rendering rule is chosen at the call site.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Picked for `Probe<T>` when `T` has a rendering rule.
pub trait RenderKnown {
    fn render_to<W: Write + ?Sized>(&self, out: &mut W);
}

impl<T: Render + ?Sized> RenderKnown for Probe<'_, T> {
    #[inline]
    fn render_to<W: Write + ?Sized>(&self, out: &mut W) {
        let _ = self.0.render(out);
    }
}

/// Picked for every other type; writes `<unknown>`.
pub trait RenderUnknown {
    fn render_to<W: Write + ?Sized>(&self, out: &mut W);
}

impl<T: ?Sized> RenderUnknown for &Probe<'_, T> {
    #[inline]
    fn render_to<W: Write + ?Sized>(&self, out: &mut W) {
        let _ = out.write_all(UNKNOWN_RENDERING.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<T: Render + ?Sized>(value: &T) -> String {
        let mut out = Vec::new();
        value.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integers_render_decimal() {
        assert_eq!(rendered(&42i32), "42");
        assert_eq!(rendered(&-7i8), "-7");
        assert_eq!(rendered(&200u8), "200");
        assert_eq!(rendered(&u32::MAX), "4294967295");
        assert_eq!(rendered(&i64::MIN), "-9223372036854775808");
        assert_eq!(rendered(&u64::MAX), "18446744073709551615");
        assert_eq!(rendered(&usize::MIN), "0");
    }

    #[test]
    fn test_bool_renders_as_digit() {
        assert_eq!(rendered(&true), "1");
        assert_eq!(rendered(&false), "0");
    }

    #[test]
    fn test_char_renders_as_itself() {
        assert_eq!(rendered(&'a'), "a");
        assert_eq!(rendered(&'ß'), "ß");
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_floats_render_shortest() {
        assert_eq!(rendered(&3.5f64), "3.5");
        assert_eq!(rendered(&0.1f32), "0.1");
        assert_eq!(rendered(&1.0f64), "1");
        assert_eq!(rendered(&-2.25f64), "-2.25");
        assert_eq!(rendered(&3.14159f64), "3.14159");
        assert_eq!(rendered(&0.00001f64), "0.00001");
        assert_eq!(rendered(&123456789.0f64), "123456789");
    }

    #[test]
    fn test_floats_switch_to_exponent_outside_range() {
        assert_eq!(rendered(&1e300f64), "1e300");
        assert_eq!(rendered(&1e-7f64), "1e-7");
        assert_eq!(rendered(&-2.5e-9f64), "-2.5e-9");
        assert_eq!(rendered(&1e16f64), "1e16");
        assert_eq!(rendered(&f64::MAX), "1.7976931348623157e308");
        assert_eq!(rendered(&f32::MAX), "3.4028235e38");
        assert_eq!(rendered(&1e-7f32), "1e-7");
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(rendered(&f64::NAN), "NaN");
        assert_eq!(rendered(&f64::INFINITY), "inf");
        assert_eq!(rendered(&f32::NEG_INFINITY), "-inf");
        assert_eq!(rendered(&-0.0f64), "-0");
    }

    #[cfg(feature = "complex")]
    #[test]
    fn test_complex_renders_both_parts() {
        use num_complex::Complex;
        assert_eq!(rendered(&Complex::new(1.5f64, 2.0)), "1.5 + 2i");
        assert_eq!(rendered(&Complex::new(0.0f32, -1.0)), "0 + -1i");
        assert_eq!(rendered(&Complex::new(1e300f64, 1e-7)), "1e300 + 1e-7i");
    }

    #[test]
    fn test_text_renders_raw() {
        assert_eq!(rendered("hi"), "hi");
        assert_eq!(rendered(&String::from("say \"hi\"\n")), "say \"hi\"\n");
        assert_eq!(rendered(&Cow::Borrowed("cow")), "cow");
        assert_eq!(rendered(c"nul-terminated"), "nul-terminated");
        assert_eq!(rendered(&CString::new("owned").unwrap()), "owned");
    }

    #[test]
    fn test_char_buffer_stops_at_nul() {
        let mut buffer = [0u8; 8];
        buffer[..2].copy_from_slice(b"hi");
        assert_eq!(rendered(&buffer), "hi");
        assert_eq!(rendered(b"full"), "full");
    }

    #[test]
    fn test_pointers_render_hex_address() {
        let value = 5u16;
        let address = &value as *const u16;
        let text = rendered(&address);
        assert!(text.starts_with("0x"), "{text}");
        assert_eq!(text, format!("{address:p}"));
        assert_eq!(rendered(&NonNull::from(&value)), text);
    }

    #[test]
    fn test_indirection_is_transparent() {
        let value = 9u64;
        assert_eq!(rendered(&&value), "9");
        assert_eq!(rendered(&Box::new(true)), "1");
        assert_eq!(rendered(&Box::<str>::from("boxed")), "boxed");
    }

    #[test]
    fn test_probe_selects_rule_statically() {
        struct Opaque;

        let mut out = Vec::new();
        (&Probe(&7i16)).render_to(&mut out);
        out.push(b' ');
        (&Probe(&Opaque)).render_to(&mut out);
        out.push(b' ');
        (&Probe(&vec![1, 2, 3])).render_to(&mut out);
        out.push(b' ');
        (&Probe(&())).render_to(&mut out);

        assert_eq!(out, b"7 <unknown> <unknown> <unknown>");
    }
}
