//! Interactive terminal browser for the unsolved board and its solutions.

use circuit_core::{
    App, AppConfig, AttrMask, Board, Cell, Color, Dims, Effect, Key, Model, Msg, Pos, Screen,
    Style, Symbol,
};
use circuit_crossterm::CrosstermDriver;

const START_COLOR: Color = Color(0x57bcf2);
const END_COLOR: Color = Color(0xe03a3a);
const TRACE_COLOR: Color = Color(0xe45eeb);
const BLOCKED_COLOR: Color = Color(0x808080);
const INK: Color = Color::from_rgb(0x10, 0x10, 0x10);

/// Screen columns per board position.
const CELL_WIDTH: i32 = 3;
const SIDEBAR_WIDTH: i32 = 14;
/// Minimum number of solution entries visible in the sidebar.
const MIN_LIST_HEIGHT: i32 = 5;
const BOARD_TOP: i32 = 2;

const HELP: &str = "n/\u{2192} next  p/\u{2190} previous  Home unsolved  q quit";
const LEGEND: &str = "1 start  2 end  T trace  X blocked";

/// Browses the unsolved board and every solved copy of it.
///
/// The boards are only read.
pub struct Viewer {
    unsolved: Board,
    solved: Vec<Board>,
    /// `None` shows the unsolved board.
    current: Option<usize>,
}

impl Viewer {
    pub fn new(unsolved: Board, solved: Vec<Board>) -> Self {
        Self {
            unsolved,
            solved,
            current: None,
        }
    }

    /// Index of the solution on display, `None` for the unsolved board.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The board on display.
    pub fn shown(&self) -> &Board {
        match self.current {
            Some(i) => &self.solved[i],
            None => &self.unsolved,
        }
    }

    /// Screen size needed to draw everything.
    pub fn dims(&self) -> Dims {
        let body = self.unsolved.rows().max(MIN_LIST_HEIGHT);
        let board_w = self.unsolved.cols().saturating_mul(CELL_WIDTH);
        let text_w = HELP.chars().count().max(LEGEND.chars().count()) as i32;
        Dims::new(
            body.saturating_add(BOARD_TOP + 4),
            board_w.saturating_add(2 + SIDEBAR_WIDTH).max(text_w),
        )
    }

    fn list_height(&self) -> i32 {
        self.unsolved.rows().max(MIN_LIST_HEIGHT)
    }

    /// Show solution `index` if it exists.
    fn view(&mut self, index: usize) {
        if index < self.solved.len() {
            self.current = Some(index);
        }
    }

    fn next(&mut self) {
        match self.current {
            Some(i) => self.view(i + 1),
            None => self.view(0),
        }
    }

    fn previous(&mut self) {
        if let Some(i) = self.current {
            if i > 0 {
                self.view(i - 1);
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Char('q') | Key::Escape => return Some(Effect::End),
            Key::Char('n') | Key::ArrowRight | Key::ArrowDown | Key::PageDown => self.next(),
            Key::Char('p') | Key::ArrowLeft | Key::ArrowUp | Key::PageUp => self.previous(),
            Key::Home | Key::Char('0') => self.current = None,
            Key::End => {
                if let Some(last) = self.solved.len().checked_sub(1) {
                    self.view(last);
                }
            }
            _ => {}
        }
        None
    }

    fn title(&self) -> String {
        let n = self.solved.len();
        format!("Circuit Tracer: {n} Solution{}", if n == 1 { "" } else { "s" })
    }

    fn status(&self) -> String {
        match self.current {
            Some(i) => format!(
                "Solution {} of {} (length {})",
                i + 1,
                self.solved.len(),
                self.solved[i].traced().count()
            ),
            None if self.solved.is_empty() => "No trace connects 1 and 2".to_string(),
            None => "Unsolved board".to_string(),
        }
    }

    fn draw_board(&self, screen: &mut Screen) {
        for (p, sym) in self.shown().iter() {
            let style = symbol_style(sym);
            let at = Pos::new(BOARD_TOP + p.row, p.col.saturating_mul(CELL_WIDTH));
            screen.text(at, &format!(" {sym} "), style);
        }
    }

    fn draw_sidebar(&self, screen: &mut Screen) {
        let left = self.unsolved.cols().saturating_mul(CELL_WIDTH).saturating_add(2);
        let height = self.list_height() as usize;
        let first = match self.current {
            Some(i) if i >= height => i + 1 - height,
            _ => 0,
        };
        for (row, i) in (first..self.solved.len()).take(height).enumerate() {
            let style = if Some(i) == self.current {
                Style::PLAIN.with(AttrMask::REVERSE)
            } else {
                Style::PLAIN
            };
            let label = format!("Solution {}", i + 1);
            screen.text(Pos::new(BOARD_TOP + row as i32, left), &label, style);
        }
    }
}

fn symbol_style(sym: Symbol) -> Style {
    let colored = |bg| Style::on(bg).fg(INK).with(AttrMask::BOLD);
    match sym {
        Symbol::Start => colored(START_COLOR),
        Symbol::End => colored(END_COLOR),
        Symbol::Trace => colored(TRACE_COLOR),
        Symbol::Blocked => Style::on(BLOCKED_COLOR),
        Symbol::Open => Style::PLAIN,
    }
}

impl Model for Viewer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown { key, .. } => self.handle_key(key),
            Msg::Quit => Some(Effect::End),
            Msg::Init | Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Cell::BLANK);
        screen.text(Pos::ZERO, &self.title(), Style::PLAIN.with(AttrMask::BOLD));
        self.draw_board(screen);
        self.draw_sidebar(screen);

        let below = BOARD_TOP + self.list_height() + 1;
        let faint = Style::PLAIN.with(AttrMask::DIM);
        screen.text(Pos::new(below, 0), &self.status(), Style::PLAIN);
        screen.text(Pos::new(below + 1, 0), LEGEND, faint);
        screen.text(Pos::new(below + 2, 0), HELP, faint);
    }
}

/// Run the viewer in the terminal until the user quits.
pub fn show(unsolved: &Board, solved: Vec<Board>) -> Result<(), Box<dyn std::error::Error>> {
    let model = Viewer::new(unsolved.clone(), solved);
    let dims = model.dims();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        dims,
    });
    app.run()
}
