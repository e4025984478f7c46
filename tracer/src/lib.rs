//! Tracer — finds every shortest trace between two components on a
//! circuit board and shows them on the console or in a terminal viewer.

pub mod cli;
pub mod console;
pub mod viewer;

pub use cli::{Cli, Output, RunConfig, RunError, Storage, run};
pub use viewer::Viewer;
