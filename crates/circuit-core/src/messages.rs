//! What the terminal tells the viewer: [`Msg`], [`Key`], [`ModMask`].

use std::ops::BitOr;

use crate::geom::Dims;

/// Keys the viewer can react to. Anything else is dropped by the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Home,
    End,
    PageUp,
    PageDown,
    Char(char),
}

/// Modifier keys held with a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1);
    pub const CTRL: Self = Self(2);
    pub const ALT: Self = Self(4);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ModMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyDown { key: Key, modifiers: ModMask },
    /// New terminal size.
    Screen { dims: Dims },
    /// First message of every run.
    Init,
    /// Interrupt, e.g. Ctrl+C.
    Quit,
}

impl Msg {
    /// A `KeyDown` with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: ModMask::NONE,
        }
    }
}
