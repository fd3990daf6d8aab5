use crate::config::DecoderConfig;
use crate::surface::Surface;

const BACKSPACE: char = '\u{8}';

/// Places a plain character at the cursor and advances it.
///
/// `\r`, `\n` and backspace only move the cursor. Any other character is
/// stored in the current cell, then the cursor steps right. At the right
/// margin it wraps to column 1 of the next row; at the bottom-right corner
/// the surface scrolls and the reused bottom line is erased.
pub(crate) fn write_ch<S: Surface>(
    surface: &mut S,
    config: &DecoderConfig,
    ch: char,
) {
    match ch {
        '\r' => {
            surface.carriage_return();
            return;
        },
        '\n' => {
            if config.newline_mode {
                surface.carriage_return();
            }
            surface.line_feed();
            return;
        },
        BACKSPACE => {
            surface.cursor_back(1);
            return;
        },
        _ => {},
    }

    let row = surface.current_row();
    let col = surface.current_col();
    surface.put_char_at(row, col, ch);

    surface.cursor_forward(1);
    if surface.current_col() != col {
        return;
    }

    surface.cursor_down(1);
    let next_row = surface.current_row();
    if next_row != row {
        surface.cursor_home(next_row, 1);
    } else {
        surface.scroll_up();
        surface.cursor_home(next_row, 1);
        surface.erase_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, Recorder};

    fn write(surface: &mut Recorder, text: &str) {
        let config = DecoderConfig::default();
        for ch in text.chars() {
            write_ch(surface, &config, ch);
        }
    }

    #[test]
    fn advances_within_a_line() {
        let mut surface = Recorder::new(2, 3);
        write(&mut surface, "ab");

        assert_eq!(
            surface.calls,
            vec![
                Call::Put(1, 1, 'a'),
                Call::Forward(1),
                Call::Put(1, 2, 'b'),
                Call::Forward(1),
            ]
        );
        assert_eq!(surface.cursor(), (1, 3));
    }

    #[test]
    fn wraps_at_right_margin() {
        let mut surface = Recorder::new(2, 3);
        surface.move_to(1, 3);
        write(&mut surface, "x");

        assert_eq!(
            surface.calls,
            vec![
                Call::Put(1, 3, 'x'),
                Call::Forward(1),
                Call::Down(1),
                Call::Home(2, 1),
            ]
        );
        assert_eq!(surface.cursor(), (2, 1));
    }

    #[test]
    fn scrolls_at_bottom_right_corner() {
        let mut surface = Recorder::new(24, 80);
        surface.move_to(24, 80);
        write(&mut surface, "z");

        assert_eq!(
            surface.calls,
            vec![
                Call::Put(24, 80, 'z'),
                Call::Forward(1),
                Call::Down(1),
                Call::ScrollUp,
                Call::Home(24, 1),
                Call::EraseLine,
            ]
        );
        assert_eq!(surface.cursor(), (24, 1));
    }

    #[test]
    fn control_characters_only_move_the_cursor() {
        let mut surface = Recorder::new(5, 5);
        surface.move_to(2, 3);
        write(&mut surface, "\r\n\u{8}");

        assert_eq!(
            surface.calls,
            vec![Call::CarriageReturn, Call::LineFeed, Call::Back(1)]
        );
    }

    #[test]
    fn backspace_stops_at_first_column() {
        let mut surface = Recorder::new(5, 5);
        surface.move_to(3, 1);
        write(&mut surface, "\u{8}");

        assert_eq!(surface.cursor(), (3, 1));
        assert!(!surface.calls.iter().any(|call| matches!(call, Call::Put(..))));
    }

    #[test]
    fn newline_mode_returns_carriage() {
        let mut surface = Recorder::new(5, 5);
        let config = DecoderConfig { newline_mode: true };
        write_ch(&mut surface, &config, '\n');

        assert_eq!(surface.calls, vec![Call::CarriageReturn, Call::LineFeed]);
    }
}
