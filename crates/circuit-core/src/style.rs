//! Colours and text attributes used when drawing boards to a terminal.

use std::ops::BitOr;

/// A 24-bit colour, `0xRRGGBB`. Zero means the terminal's own colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const DEFAULT: Self = Self(0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Set of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AttrMask(pub u8);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const REVERSE: Self = Self(1 << 1);
    pub const DIM: Self = Self(1 << 2);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Foreground, background and attributes of one screen cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    /// Terminal defaults, no attributes.
    pub const PLAIN: Self = Self {
        fg: Color::DEFAULT,
        bg: Color::DEFAULT,
        attrs: AttrMask::NONE,
    };

    /// Plain style on a `bg` background.
    pub const fn on(bg: Color) -> Self {
        Self { bg, ..Self::PLAIN }
    }

    pub const fn fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// Adds `attrs` to the ones already set.
    pub const fn with(self, attrs: AttrMask) -> Self {
        Self {
            attrs: AttrMask(self.attrs.0 | attrs.0),
            ..self
        }
    }
}
