//! Crossterm-backed render surface
//!
//! Owns the terminal for the lifetime of the game: raw mode + alternate
//! screen on creation, restored on drop. Frames are composed into a cell
//! back buffer and flushed with one queued write per row.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use glam::Vec2;

use super::{COLS, ROWS, Surface};
use crate::consts::{CELL_H, CELL_W};
use crate::settings::Settings;
use crate::sim::Sprite;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Render surface drawing scaled cells to the terminal
pub struct TerminalSurface {
    out: io::Stdout,
    cells: Vec<Cell>,
    color_enabled: bool,
}

impl TerminalSurface {
    /// Take over the terminal. Restored by [`Drop`].
    pub fn new(settings: &Settings) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle("Doodle Hop"),
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )?;

        Ok(Self {
            out,
            cells: vec![BLANK; COLS as usize * ROWS as usize],
            color_enabled: settings.color,
        })
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= COLS as i32 || row >= ROWS as i32 {
            return;
        }
        self.cells[row as usize * COLS as usize + col as usize] = Cell { ch, color };
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, pos: Vec2, color: Color) {
        // Logical pixels to cells; sprites always span whole cells
        let col = (pos.x / CELL_W as f32).round() as i32;
        let row = (pos.y / CELL_H as f32).round() as i32;

        for (dy, art_row) in sprite.art.iter().enumerate() {
            for (dx, ch) in art_row.chars().enumerate() {
                if ch != ' ' {
                    self.put(col + dx as i32, row + dy as i32, ch, color);
                }
            }
        }
    }

    fn draw_text(&mut self, col: u16, row: u16, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col as i32 + i as i32, row as i32, ch, color);
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut current = Color::Reset;
        for row in 0..ROWS {
            queue!(self.out, cursor::MoveTo(0, row))?;
            for col in 0..COLS {
                let cell = self.cells[row as usize * COLS as usize + col as usize];
                if self.color_enabled && cell.color != current {
                    queue!(self.out, SetForegroundColor(cell.color))?;
                    current = cell.color;
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        if self.color_enabled {
            queue!(self.out, ResetColor)?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Best effort; the terminal may already be gone
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
