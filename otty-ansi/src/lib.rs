//! Streaming ANSI/VT100 escape sequence decoder.
//!
//! [`Decoder`] reads the character stream a child process writes to its
//! terminal and turns it into operations on a [`Surface`]: cursor movement,
//! erasing, scrolling and plain character writes with line wrapping. The
//! recognizer is a transition table over [`State`] built on `otty-fsm`.
//!
//! Color and attribute codes (SGR), charset designation, DEC private modes
//! and ANSI.SYS screen modes are parsed and discarded.

mod config;
mod decoder;
mod state;
mod surface;
mod table;
mod write;

#[cfg(test)]
mod testing;

pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use state::State;
pub use surface::Surface;
