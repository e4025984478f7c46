//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! The loop is synchronous: the driver is polled on the calling thread,
//! queued messages are fed to the model, and the redrawn screen is diffed
//! against the previous one before being flushed.

use std::collections::VecDeque;
use std::error::Error;

use crate::geom::Dims;
use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Wait briefly for input and append any messages to `out`.
    fn poll_msgs(&mut self, out: &mut Vec<Msg>) -> Result<(), Box<dyn Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Size of the drawing area handed to [`Model::draw`].
    pub dims: Dims,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    dims: Dims,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            dims: config.dims,
        }
    }

    /// The model, e.g. to inspect its state after [`run`](App::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the Model-View-Update loop until the model returns
    /// [`Effect::End`].
    ///
    /// The driver is always closed before returning, also on error.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()?;
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let mut prev = Screen::new(Dims::default());
        let mut curr = Screen::new(self.dims);
        let mut queue = VecDeque::from([Msg::Init]);
        let mut polled = Vec::new();

        loop {
            let mut needs_draw = false;
            while let Some(msg) = queue.pop_front() {
                if let Msg::Screen { .. } = msg {
                    // The terminal was cleared; repaint everything.
                    prev = Screen::new(Dims::default());
                }
                if let Some(Effect::End) = self.model.update(msg) {
                    log::debug!("model requested end");
                    return Ok(());
                }
                needs_draw = true;
            }

            if needs_draw {
                self.model.draw(&mut curr);
                let frame = compute_frame(&prev, &curr);
                if !frame.cells.is_empty() {
                    self.driver.flush(frame)?;
                }
                prev.clone_from(&curr);
            }

            self.driver.poll_msgs(&mut polled)?;
            queue.extend(polled.drain(..));
        }
    }
}
