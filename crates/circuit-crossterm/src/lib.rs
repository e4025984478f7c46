//! Crossterm terminal driver for the circuit tracer viewer.
//!
//! Provides a [`CrosstermDriver`] that implements [`circuit_core::Driver`],
//! mapping the styled-cell screen model to a terminal via crossterm.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{
        self, Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use circuit_core::{AttrMask, Color, Dims, Driver, Frame, FrameCell, Key, ModMask, Msg, Pos};

/// How long [`Driver::poll_msgs`] waits for the first event.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Attributes the viewer uses and their crossterm counterparts.
const ATTRIBUTES: [(AttrMask, Attribute); 3] = [
    (AttrMask::BOLD, Attribute::Bold),
    (AttrMask::REVERSE, Attribute::Reverse),
    (AttrMask::DIM, Attribute::Dim),
];

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        return CtColor::Reset;
    }
    let (r, g, b) = c.rgb();
    CtColor::Rgb { r, g, b }
}

/// Terminal `(column, row)` of `p`, if it is addressable at all.
fn terminal_pos(p: Pos) -> Option<(u16, u16)> {
    Some((u16::try_from(p.col).ok()?, u16::try_from(p.row).ok()?))
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    [
        (KeyModifiers::SHIFT, ModMask::SHIFT),
        (KeyModifiers::CONTROL, ModMask::CTRL),
        (KeyModifiers::ALT, ModMask::ALT),
    ]
    .into_iter()
    .filter(|(ct, _)| mods.contains(*ct))
    .fold(ModMask::NONE, |m, (_, ours)| m | ours)
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one terminal event. Ctrl+C becomes [`Msg::Quit`].
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => {
            let modifiers = to_mod_mask(modifiers);
            let key = to_key(code)?;
            if modifiers.contains(ModMask::CTRL) && key == Key::Char('c') {
                return Some(Msg::Quit);
            }
            Some(Msg::KeyDown { key, modifiers })
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            dims: Dims::new(h as i32, w as i32),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    _private: (),
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn poll_msgs(&mut self, out: &mut Vec<Msg>) -> Result<(), Box<dyn Error>> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                out.push(msg);
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout().lock();
        if frame.full {
            queue!(stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        }
        for FrameCell { cell, pos } in &frame.cells {
            let Some((col, row)) = terminal_pos(*pos) else {
                continue;
            };
            let style = cell.style;
            queue!(
                stdout,
                cursor::MoveTo(col, row),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            for (mask, attr) in ATTRIBUTES {
                if style.attrs.contains(mask) {
                    queue!(stdout, SetAttribute(attr))?;
                }
            }
            queue!(stdout, Print(cell.ch))?;
            if !style.attrs.is_empty() {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
