//! **circuit-core** — circuit boards and the terminal application loop.
//!
//! This crate provides the foundational types of the circuit tracer:
//! geometry, the [`Board`] read from a board file with its validation
//! errors, and the small Elm-architecture loop ([`App`], [`Model`],
//! [`Driver`]) used to browse solutions in a terminal.

pub mod app;
pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod messages;
pub mod screen;
pub mod style;
pub mod symbol;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use board::Board;
pub use cell::Cell;
#[cfg(feature = "serde")]
pub use error::BoardDataError;
pub use error::{BoardError, FormatError, FormatErrorKind, OccupiedPositionError};
pub use geom::{Dims, Pos};
pub use messages::{Key, ModMask, Msg};
pub use screen::{Frame, FrameCell, Screen};
pub use style::{AttrMask, Color, Style};
pub use symbol::Symbol;
