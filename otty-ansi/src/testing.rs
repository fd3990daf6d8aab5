//! Surface double that records every call the decoder makes.

use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Put(usize, usize, char),
    Forward(usize),
    Back(usize),
    Up(usize),
    Down(usize),
    UpReverse,
    Home(usize, usize),
    CarriageReturn,
    LineFeed,
    ScrollUp,
    ScrollRegion(usize, usize),
    FullScreenScroll,
    EraseDown,
    EraseUp,
    EraseScreen,
    EraseToEndOfLine,
    EraseToStartOfLine,
    EraseLine,
    SaveCursor,
    RestoreCursor,
}

/// Tracks a clamped cursor so the write rule sees realistic margins.
#[derive(Debug)]
pub(crate) struct Recorder {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row: 1,
            col: 1,
            calls: Vec::new(),
        }
    }

    /// Positions the cursor without recording a call.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.row = row.clamp(1, self.rows);
        self.col = col.clamp(1, self.cols);
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl Surface for Recorder {
    fn put_char_at(&mut self, row: usize, col: usize, ch: char) {
        self.calls.push(Call::Put(row, col, ch));
    }

    fn cursor_forward(&mut self, count: usize) {
        self.calls.push(Call::Forward(count));
        self.col = self.col.saturating_add(count).min(self.cols);
    }

    fn cursor_back(&mut self, count: usize) {
        self.calls.push(Call::Back(count));
        self.col = self.col.saturating_sub(count).max(1);
    }

    fn cursor_up(&mut self, count: usize) {
        self.calls.push(Call::Up(count));
        self.row = self.row.saturating_sub(count).max(1);
    }

    fn cursor_down(&mut self, count: usize) {
        self.calls.push(Call::Down(count));
        self.row = self.row.saturating_add(count).min(self.rows);
    }

    fn cursor_up_reverse(&mut self) {
        self.calls.push(Call::UpReverse);
        self.row = self.row.saturating_sub(1).max(1);
    }

    fn cursor_home(&mut self, row: usize, col: usize) {
        self.calls.push(Call::Home(row, col));
        self.move_to(row, col);
    }

    fn carriage_return(&mut self) {
        self.calls.push(Call::CarriageReturn);
        self.col = 1;
    }

    fn line_feed(&mut self) {
        self.calls.push(Call::LineFeed);
        self.row = (self.row + 1).min(self.rows);
    }

    fn scroll_up(&mut self) {
        self.calls.push(Call::ScrollUp);
    }

    fn scroll_region(&mut self, top: usize, bottom: usize) {
        self.calls.push(Call::ScrollRegion(top, bottom));
    }

    fn enable_full_screen_scroll(&mut self) {
        self.calls.push(Call::FullScreenScroll);
    }

    fn erase_down(&mut self) {
        self.calls.push(Call::EraseDown);
    }

    fn erase_up(&mut self) {
        self.calls.push(Call::EraseUp);
    }

    fn erase_screen(&mut self) {
        self.calls.push(Call::EraseScreen);
    }

    fn erase_to_end_of_line(&mut self) {
        self.calls.push(Call::EraseToEndOfLine);
    }

    fn erase_to_start_of_line(&mut self) {
        self.calls.push(Call::EraseToStartOfLine);
    }

    fn erase_line(&mut self) {
        self.calls.push(Call::EraseLine);
    }

    fn save_cursor_attrs(&mut self) {
        self.calls.push(Call::SaveCursor);
    }

    fn restore_cursor_attrs(&mut self) {
        self.calls.push(Call::RestoreCursor);
    }

    fn current_row(&self) -> usize {
        self.row
    }

    fn current_col(&self) -> usize {
        self.col
    }
}
