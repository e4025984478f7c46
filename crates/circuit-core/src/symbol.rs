//! The [`Symbol`] type — the content of one board position.

use std::fmt;

/// Content of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// `O`: free for a trace.
    Open,
    /// `X`: blocked.
    Blocked,
    /// `T`: part of a trace. Never valid in input files.
    Trace,
    /// `1`: the starting component.
    Start,
    /// `2`: the ending component.
    End,
}

impl Symbol {
    /// Every symbol, in display order.
    pub const ALL: [Symbol; 5] = [
        Symbol::Open,
        Symbol::Blocked,
        Symbol::Trace,
        Symbol::Start,
        Symbol::End,
    ];

    /// The character used for this symbol in files and console output.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => 'O',
            Self::Blocked => 'X',
            Self::Trace => 'T',
            Self::Start => '1',
            Self::End => '2',
        }
    }

    /// Inverse of [`as_char`](Symbol::as_char).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'O' => Some(Self::Open),
            'X' => Some(Self::Blocked),
            'T' => Some(Self::Trace),
            '1' => Some(Self::Start),
            '2' => Some(Self::End),
            _ => None,
        }
    }

    /// Whether this symbol may appear in a board file.
    #[inline]
    pub const fn is_input(self) -> bool {
        !matches!(self, Self::Trace)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
