//! In-memory character screen for the `otty-ansi` decoder.
//!
//! [`Screen`] is a plain `rows x columns` grid of characters implementing
//! [`otty_ansi::Surface`]. Feed it through a [`otty_ansi::Decoder`] to see
//! what a VT100 would show:
//!
//! ```
//! use otty_ansi::Decoder;
//! use otty_screen::Screen;
//!
//! let mut decoder = Decoder::new(Screen::default());
//! decoder.process_text("\x1b[2;3Hhi");
//!
//! let screen = decoder.surface();
//! assert_eq!(screen.char_at(2, 3), Some('h'));
//! assert_eq!(screen.cursor(), (2, 5));
//! ```

mod error;
mod grid;
mod screen;

pub use error::{Result, ScreenError};
pub use screen::{Screen, ScreenConfig};

pub use otty_ansi::{Decoder, DecoderConfig, Surface};
