//! Character screen with a 1-based cursor and a scroll region.
//!
//! [`Screen`] implements [`otty_ansi::Surface`], so it can sit behind a
//! [`otty_ansi::Decoder`] and show what a VT100 would display. Cells hold
//! bare characters without attributes.

use std::fmt;

use log::{debug, trace};
use otty_ansi::Surface;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};
use crate::grid::Grid;

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLUMNS: usize = 80;

/// Configuration options for the [`Screen`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Number of rows, at least 1.
    pub rows: usize,

    /// Number of columns, at least 1.
    pub columns: usize,

    /// Character written into erased cells.
    pub fill: char,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            fill: ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    const ORIGIN: Self = Self { row: 1, col: 1 };
}

/// A fixed-size grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    grid: Grid,
    config: ScreenConfig,
    cursor: Cursor,
    saved_cursor: Cursor,
    /// Inclusive, 1-based.
    scroll_top: usize,
    scroll_bottom: usize,
}

impl Screen {
    pub fn new(config: ScreenConfig) -> Result<Self> {
        if config.rows == 0 || config.columns == 0 {
            return Err(ScreenError::InvalidSize {
                rows: config.rows,
                columns: config.columns,
            });
        }

        Ok(Self::build(config))
    }

    /// Creates a screen of the given size filled with spaces.
    pub fn with_size(rows: usize, columns: usize) -> Result<Self> {
        Self::new(ScreenConfig {
            rows,
            columns,
            ..ScreenConfig::default()
        })
    }

    fn build(config: ScreenConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.columns, config.fill),
            cursor: Cursor::ORIGIN,
            saved_cursor: Cursor::ORIGIN,
            scroll_top: 1,
            scroll_bottom: config.rows,
            config,
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Cursor position as `(row, col)`, 1-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.row, self.cursor.col)
    }

    /// Current scroll region as inclusive `(top, bottom)` rows.
    pub fn scrolling_region(&self) -> (usize, usize) {
        (self.scroll_top, self.scroll_bottom)
    }

    /// Character at a 1-based position, `None` outside the screen.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if !(1..=self.rows()).contains(&row)
            || !(1..=self.columns()).contains(&col)
        {
            return None;
        }

        Some(self.grid[row - 1][col - 1])
    }

    /// Contents of a 1-based row, `None` outside the screen.
    pub fn line(&self, row: usize) -> Option<String> {
        if !(1..=self.rows()).contains(&row) {
            return None;
        }

        Some(self.grid[row - 1].cells.iter().collect())
    }

    /// Screen contents framed by a border, one row per line.
    pub fn pretty(&self) -> String {
        let border = format!("+{}+\n", "-".repeat(self.columns()));
        let mut out = border.clone();
        for row in self.grid.iter() {
            out.push('|');
            out.extend(row.cells.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn clamp_row(&self, row: usize) -> usize {
        row.clamp(1, self.rows())
    }

    fn clamp_col(&self, col: usize) -> usize {
        col.clamp(1, self.columns())
    }

    fn region(&self) -> std::ops::Range<usize> {
        self.scroll_top - 1..self.scroll_bottom
    }

    /// Shifts the scroll region down one row and blanks its top line.
    fn scroll_down(&mut self) {
        trace!("[screen] scroll down {:?}", self.region());
        self.grid.rotate_down(self.region());
        let fill = self.config.fill;
        self.grid[self.scroll_top - 1].clear(fill);
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::build(ScreenConfig::default())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for ch in &row.cells {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl Surface for Screen {
    fn put_char_at(&mut self, row: usize, col: usize, ch: char) {
        let row = self.clamp_row(row);
        let col = self.clamp_col(col);
        self.grid[row - 1][col - 1] = ch;
    }

    fn cursor_forward(&mut self, count: usize) {
        self.cursor.col = self.clamp_col(self.cursor.col.saturating_add(count));
    }

    fn cursor_back(&mut self, count: usize) {
        self.cursor.col = self.clamp_col(self.cursor.col.saturating_sub(count));
    }

    fn cursor_up(&mut self, count: usize) {
        self.cursor.row = self.clamp_row(self.cursor.row.saturating_sub(count));
    }

    fn cursor_down(&mut self, count: usize) {
        self.cursor.row = self.clamp_row(self.cursor.row.saturating_add(count));
    }

    fn cursor_up_reverse(&mut self) {
        if self.cursor.row == self.scroll_top {
            self.scroll_down();
        } else {
            self.cursor_up(1);
        }
    }

    fn cursor_home(&mut self, row: usize, col: usize) {
        self.cursor = Cursor {
            row: self.clamp_row(row),
            col: self.clamp_col(col),
        };
    }

    fn carriage_return(&mut self) {
        self.cursor.col = 1;
    }

    fn line_feed(&mut self) {
        if self.cursor.row == self.scroll_bottom {
            self.scroll_up();
            let fill = self.config.fill;
            self.grid[self.scroll_bottom - 1].clear(fill);
        } else {
            self.cursor_down(1);
        }
    }

    fn scroll_up(&mut self) {
        if !(self.scroll_top..=self.scroll_bottom).contains(&self.cursor.row) {
            trace!("[screen] cursor outside scroll region, not scrolling");
            return;
        }

        trace!("[screen] scroll up {:?}", self.region());
        self.grid.rotate_up(self.region());
    }

    fn scroll_region(&mut self, top: usize, bottom: usize) {
        let mut top = self.clamp_row(top);
        let mut bottom = self.clamp_row(bottom);
        if top > bottom {
            debug!("[screen] reversed scroll region {top};{bottom}");
            std::mem::swap(&mut top, &mut bottom);
        }
        self.scroll_top = top;
        self.scroll_bottom = bottom;
    }

    fn enable_full_screen_scroll(&mut self) {
        self.scroll_top = 1;
        self.scroll_bottom = self.rows();
    }

    fn erase_down(&mut self) {
        self.erase_to_end_of_line();
        let fill = self.config.fill;
        for row in self.cursor.row..self.rows() {
            self.grid[row].clear(fill);
        }
    }

    fn erase_up(&mut self) {
        self.erase_to_start_of_line();
        let fill = self.config.fill;
        for row in 0..self.cursor.row - 1 {
            self.grid[row].clear(fill);
        }
    }

    fn erase_screen(&mut self) {
        self.grid.clear(self.config.fill);
    }

    fn erase_to_end_of_line(&mut self) {
        let Cursor { row, col } = self.cursor;
        let columns = self.columns();
        self.grid[row - 1].clear_range(col - 1..columns, self.config.fill);
    }

    fn erase_to_start_of_line(&mut self) {
        let Cursor { row, col } = self.cursor;
        self.grid[row - 1].clear_range(0..col, self.config.fill);
    }

    fn erase_line(&mut self) {
        let row = self.cursor.row;
        self.grid[row - 1].clear(self.config.fill);
    }

    fn save_cursor_attrs(&mut self) {
        self.saved_cursor = self.cursor;
    }

    fn restore_cursor_attrs(&mut self) {
        self.cursor = self.saved_cursor;
    }

    fn current_row(&self) -> usize {
        self.cursor.row
    }

    fn current_col(&self) -> usize {
        self.cursor.col
    }
}
