//! A library of SGR color commands.
//!
//! This module provides straight-forward struct types that implement the
//! [`Sgr`] trait and therefore also the [`Command`] trait. Organized by
//! topic, it covers the following commands:
//!
//!   * Resetting styles:
//!       * [`ResetStyle`]
//!   * 8-bit colors:
//!       * [`Foreground8`] and [`DynForeground8`]
//!       * [`Background8`] and [`DynBackground8`]
//!   * 24-bit colors:
//!       * [`Foreground24`] and [`DynForeground24`]
//!       * [`Background24`] and [`DynBackground24`]
//!   * Raw parameter strings:
//!       * [`DynSgr`]
//!
//! Commands that take arguments come in two flavors, a static flavor relying
//! on const generics and a dynamic flavor storing the arguments. The command
//! name for the latter flavor starts with `Dyn`; unlike the static flavor, it
//! obviously is *not* zero-sized.
//!
//! The 24-bit commands also convert [`From`] a packed `0xAARRGGBB` color,
//! with red in bits 16–23, green in bits 8–15, and blue in bits 0–7. The
//! alpha bits 24–31 are carried by the packed form but never applied; the
//! terminal knows no transparency.
//!
//! You can combine several SGR commands into a compound command with the
//! [`fuse_sgr!`](crate::fuse_sgr) macro.
//!
//!
//! # Example
//!
//! Executing a command is as simple as writing its display:
//!
//! ```
//! # use spiffy::sgr::{DynForeground8, ResetStyle};
//! let swatch = format!("{}sample{}", DynForeground8(203), ResetStyle);
//! assert_eq!(swatch, "\x1b[38;5;203msample\x1b[m");
//! ```

use core::fmt;

/// A command for the terminal.
///
/// Commands provide instructions to the terminal and are communicated in-band
/// by writing ANSI escape codes. Doing so is the responsibility of the
/// [`Display`](core::fmt::Display) implementation, whereas the
/// [`Debug`](core::fmt::Debug) implementation should simply identify the
/// command.
///
/// This trait is object-safe.
pub trait Command: fmt::Debug + fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// To facilitate composition, SGR commands implement [`Sgr::write_param`],
/// which writes the parameter(s) without the leading `CSI` and the trailing
/// `m`. The `Display` implementation adds both, so displaying any SGR command
/// wraps its parameter string as `ESC [` … `m`.
///
/// Declaring `out` to be a formatter instead of an `impl fmt::Write` keeps
/// this trait object-safe.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_param(out)
    }
}

/// Combine several SGR commands into a single new SGR command.
///
/// The new SGR command preserves the order of its component commands. Upon
/// display, it emits only one ANSI escape sequence, with the components'
/// parameters separated by semicolons. Upon debug, it reveals the macro's
/// source arguments.
///
/// # Example
///
/// ```
/// # use spiffy::{fuse_sgr, sgr::{Background8, Foreground8}};
/// let alarm = fuse_sgr!(Foreground8::<196>, Background8::<16>);
/// assert_eq!(format!("{}", alarm), "\x1b[38;5;196;48;5;16m");
/// ```
#[macro_export]
macro_rules! fuse_sgr {
    ( $sgr:expr, $( $sgr2:expr ),* $(,)? ) => {{
        /// One or more SGR commands fused into one.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct FusedSgr;

        impl ::core::fmt::Debug for FusedSgr {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!(fuse_sgr!), "(", stringify!($sgr, $($sgr2),*), ")"))
            }
        }

        impl ::core::fmt::Display for FusedSgr {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("\x1b[")?;
                $crate::sgr::Sgr::write_param(self, f)?;
                f.write_str("m")
            }
        }

        impl $crate::sgr::Command for FusedSgr {}
        impl $crate::sgr::Sgr for FusedSgr {
            fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::sgr::Sgr::write_param(&$sgr, f)?;
                $(
                    f.write_str(";")?;
                    $crate::sgr::Sgr::write_param(&$sgr2, f)?;
                )*
                Ok(())
            }
        }

        FusedSgr
    }};
}

macro_rules! implement_sgr_display {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)?) => {
        impl $(< $(const $arg: $typ),+ >)? crate::sgr::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("\x1b[")?;
                crate::sgr::Sgr::write_param(self, f)?;
                f.write_str("m")
            }
        }
    };
}

// ------------------------------------ Resetting Styles -------------------------------------

/// The unit `ResetStyle` command.
///
/// Its parameter list is empty, so it displays as exactly `"\x1b[m"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetStyle;

impl Sgr for ResetStyle {
    #[inline]
    fn write_param(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

implement_sgr_display!(ResetStyle);

// -------------------------------------- 8-Bit Colors ---------------------------------------

/// The static `Foreground8<COLOR>` command.
///
/// It sets the foreground to the color with the given index in the 256-color
/// palette, using the `38;5;N` parameter form for every index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Foreground8<const COLOR: u8>;

impl<const COLOR: u8> Sgr for Foreground8<COLOR> {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("38;5;")?;
        <_ as fmt::Display>::fmt(&COLOR, out)
    }
}

implement_sgr_display!(Foreground8<COLOR: u8>);

/// The dynamic `DynForeground8(COLOR)` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynForeground8(pub u8);

impl Sgr for DynForeground8 {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("38;5;")?;
        <_ as fmt::Display>::fmt(&self.0, out)
    }
}

implement_sgr_display!(DynForeground8);

/// The static `Background8<COLOR>` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background8<const COLOR: u8>;

impl<const COLOR: u8> Sgr for Background8<COLOR> {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("48;5;")?;
        <_ as fmt::Display>::fmt(&COLOR, out)
    }
}

implement_sgr_display!(Background8<COLOR: u8>);

/// The dynamic `DynBackground8(COLOR)` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynBackground8(pub u8);

impl Sgr for DynBackground8 {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("48;5;")?;
        <_ as fmt::Display>::fmt(&self.0, out)
    }
}

implement_sgr_display!(DynBackground8);

// -------------------------------------- 24-Bit Colors --------------------------------------

/// The static `Foreground24<R, G, B>` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Foreground24<const R: u8, const G: u8, const B: u8>;

impl<const R: u8, const G: u8, const B: u8> Sgr for Foreground24<R, G, B> {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("38;2;")?;
        <_ as fmt::Display>::fmt(&R, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&G, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&B, out)
    }
}

implement_sgr_display!(Foreground24<R: u8, G: u8, B: u8>);

/// The dynamic `DynForeground24(R, G, B)` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynForeground24(pub u8, pub u8, pub u8);

impl Sgr for DynForeground24 {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("38;2;")?;
        <_ as fmt::Display>::fmt(&self.0, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&self.1, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&self.2, out)
    }
}

implement_sgr_display!(DynForeground24);

/// A packed color converts into the command for its RGB components.
impl From<u32> for DynForeground24 {
    fn from(color: u32) -> Self {
        Self(
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
        )
    }
}

/// The static `Background24<R, G, B>` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background24<const R: u8, const G: u8, const B: u8>;

impl<const R: u8, const G: u8, const B: u8> Sgr for Background24<R, G, B> {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("48;2;")?;
        <_ as fmt::Display>::fmt(&R, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&G, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&B, out)
    }
}

implement_sgr_display!(Background24<R: u8, G: u8, B: u8>);

/// The dynamic `DynBackground24(R, G, B)` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynBackground24(pub u8, pub u8, pub u8);

impl Sgr for DynBackground24 {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str("48;2;")?;
        <_ as fmt::Display>::fmt(&self.0, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&self.1, out)?;
        out.write_str(";")?;
        <_ as fmt::Display>::fmt(&self.2, out)
    }
}

implement_sgr_display!(DynBackground24);

/// A packed color converts into the command for its RGB components.
impl From<u32> for DynBackground24 {
    fn from(color: u32) -> Self {
        Self(
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
        )
    }
}

// ----------------------------------- Raw Parameter Strings ---------------------------------

/// The dynamic `DynSgr(String)` command.
///
/// It emits the wrapped parameter string verbatim, which makes it the escape
/// hatch for SGR parameters this module does not model. The empty parameter
/// string displays as `"\x1b[m"`, same as [`ResetStyle`].
///
/// This command cannot be copied, only cloned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynSgr(pub String);

impl Sgr for DynSgr {
    fn write_param(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(self.0.as_str())
    }
}

implement_sgr_display!(DynSgr);

// ===========================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_size_and_display() {
        assert_eq!(core::mem::size_of::<ResetStyle>(), 0);
        assert_eq!(core::mem::size_of::<Foreground8<88>>(), 0);
        assert_eq!(core::mem::size_of::<DynForeground8>(), 1);
        assert_eq!(core::mem::size_of::<Background24<1, 2, 3>>(), 0);
        assert_eq!(core::mem::size_of::<DynBackground24>(), 3);

        assert_eq!(format!("{}", ResetStyle), "\x1b[m");
        assert_eq!(format!("{}", Foreground8::<88>), "\x1b[38;5;88m");
        assert_eq!(format!("{}", Background8::<226>), "\x1b[48;5;226m");
        assert_eq!(
            format!("{}", Foreground24::<255, 103, 227>),
            "\x1b[38;2;255;103;227m"
        );
        assert_eq!(
            format!("{}", Background24::<134, 36, 161>),
            "\x1b[48;2;134;36;161m"
        );
    }

    #[test]
    fn test_8bit_colors_cover_every_index() {
        // The 8-bit commands use the 38;5;N form even for the first 16
        // indices, which some terminals also accept as 30-37 and 90-97.
        for color in u8::MIN..=u8::MAX {
            assert_eq!(
                format!("{}", DynForeground8(color)),
                format!("\x1b[38;5;{}m", color)
            );
            assert_eq!(
                format!("{}", DynBackground8(color)),
                format!("\x1b[48;5;{}m", color)
            );
        }
    }

    #[test]
    fn test_24bit_colors() {
        assert_eq!(format!("{}", DynForeground24(0, 0, 0)), "\x1b[38;2;0;0;0m");
        assert_eq!(
            format!("{}", DynForeground24(255, 255, 255)),
            "\x1b[38;2;255;255;255m"
        );
        assert_eq!(
            format!("{}", DynBackground24(21, 69, 136)),
            "\x1b[48;2;21;69;136m"
        );
    }

    #[test]
    fn test_packed_colors() {
        assert_eq!(
            format!("{}", DynForeground24::from(0x0015_4588)),
            "\x1b[38;2;21;69;136m"
        );
        assert_eq!(
            format!("{}", DynBackground24::from(0x00ff_00ff)),
            "\x1b[48;2;255;0;255m"
        );

        // The alpha bits are present in the packed form but never applied.
        assert_eq!(
            DynForeground24::from(0xff15_4588),
            DynForeground24::from(0x0015_4588)
        );
        assert_eq!(DynForeground24::from(0x0015_4588), DynForeground24(21, 69, 136));
        assert_eq!(DynBackground24::from(0x00c0_ffee), DynBackground24(192, 255, 238));
    }

    #[test]
    fn test_dyn_sgr() {
        assert_eq!(format!("{}", DynSgr("1;31".to_string())), "\x1b[1;31m");
        assert_eq!(format!("{}", DynSgr(String::new())), "\x1b[m");
    }

    #[test]
    fn test_fuse_sgr() {
        let cmd = fuse_sgr!(Foreground8::<196>, Background8::<16>);
        assert_eq!(format!("{}", cmd), "\x1b[38;5;196;48;5;16m");
        assert_eq!(
            format!("{:?}", cmd),
            "fuse_sgr!(Foreground8::<196>, Background8::<16>)"
        );

        let copy = cmd;
        assert_eq!(format!("{}{}", cmd, copy), format!("{}{}", cmd, cmd));

        let cmd = fuse_sgr!(DynForeground24::from(0x0015_4588), ResetStyle);
        assert_eq!(format!("{}", cmd), "\x1b[38;2;21;69;136;m");
    }

    #[test]
    fn test_borrowed_and_boxed_commands() {
        fn display(command: impl Command) -> String {
            format!("{}", command)
        }

        let reset = ResetStyle;
        assert_eq!(display(&reset), "\x1b[m");

        let boxed: Box<dyn Sgr> = Box::new(DynForeground8(17));
        assert_eq!(display(boxed), "\x1b[38;5;17m");
    }
}
