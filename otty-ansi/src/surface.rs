//! Display surface consumed by the [`Decoder`](crate::Decoder).
//!
//! The decoder never stores cells itself. Every movement, erase and write it
//! recognizes becomes a call on a [`Surface`] implementation, which owns the
//! grid, the cursor and the scroll region. Rows and columns are 1-based and
//! implementations clamp out of range coordinates rather than failing.

/// Character grid with a cursor.
pub trait Surface {
    /// Stores `ch` in the cell at (`row`, `col`) without moving the cursor.
    fn put_char_at(&mut self, row: usize, col: usize, ch: char);

    fn cursor_forward(&mut self, count: usize);

    fn cursor_back(&mut self, count: usize);

    fn cursor_up(&mut self, count: usize);

    fn cursor_down(&mut self, count: usize);

    /// Moves the cursor up one row, scrolling the region down when the
    /// cursor already sits on its top margin (RI).
    fn cursor_up_reverse(&mut self);

    fn cursor_home(&mut self, row: usize, col: usize);

    fn carriage_return(&mut self);

    fn line_feed(&mut self);

    /// Scrolls the scroll region up by one line.
    ///
    /// The line leaving the top may reappear at the bottom with stale
    /// content; callers erase it. When the cursor sits outside the region
    /// nothing scrolls, so a write at the bottom-right corner below the
    /// region only ends up erasing the cursor's own line.
    fn scroll_up(&mut self);

    /// Restricts scrolling to rows `top..=bottom`.
    fn scroll_region(&mut self, top: usize, bottom: usize);

    fn enable_full_screen_scroll(&mut self);

    /// Erases from the cursor to the end of the screen.
    fn erase_down(&mut self);

    /// Erases from the start of the screen to the cursor.
    fn erase_up(&mut self);

    fn erase_screen(&mut self);

    fn erase_to_end_of_line(&mut self);

    fn erase_to_start_of_line(&mut self);

    fn erase_line(&mut self);

    fn save_cursor_attrs(&mut self);

    fn restore_cursor_attrs(&mut self);

    fn current_row(&self) -> usize;

    fn current_col(&self) -> usize;
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn put_char_at(&mut self, row: usize, col: usize, ch: char) {
        (**self).put_char_at(row, col, ch);
    }

    fn cursor_forward(&mut self, count: usize) {
        (**self).cursor_forward(count);
    }

    fn cursor_back(&mut self, count: usize) {
        (**self).cursor_back(count);
    }

    fn cursor_up(&mut self, count: usize) {
        (**self).cursor_up(count);
    }

    fn cursor_down(&mut self, count: usize) {
        (**self).cursor_down(count);
    }

    fn cursor_up_reverse(&mut self) {
        (**self).cursor_up_reverse();
    }

    fn cursor_home(&mut self, row: usize, col: usize) {
        (**self).cursor_home(row, col);
    }

    fn carriage_return(&mut self) {
        (**self).carriage_return();
    }

    fn line_feed(&mut self) {
        (**self).line_feed();
    }

    fn scroll_up(&mut self) {
        (**self).scroll_up();
    }

    fn scroll_region(&mut self, top: usize, bottom: usize) {
        (**self).scroll_region(top, bottom);
    }

    fn enable_full_screen_scroll(&mut self) {
        (**self).enable_full_screen_scroll();
    }

    fn erase_down(&mut self) {
        (**self).erase_down();
    }

    fn erase_up(&mut self) {
        (**self).erase_up();
    }

    fn erase_screen(&mut self) {
        (**self).erase_screen();
    }

    fn erase_to_end_of_line(&mut self) {
        (**self).erase_to_end_of_line();
    }

    fn erase_to_start_of_line(&mut self) {
        (**self).erase_to_start_of_line();
    }

    fn erase_line(&mut self) {
        (**self).erase_line();
    }

    fn save_cursor_attrs(&mut self) {
        (**self).save_cursor_attrs();
    }

    fn restore_cursor_attrs(&mut self) {
        (**self).restore_cursor_attrs();
    }

    fn current_row(&self) -> usize {
        (**self).current_row()
    }

    fn current_col(&self) -> usize {
        (**self).current_col()
    }
}
