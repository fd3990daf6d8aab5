use std::fmt;

use otty_fsm::Params;

use crate::config::DecoderConfig;
use crate::state::State;
use crate::surface::Surface;
use crate::table::{self, AnsiMachine, Memory};
use crate::write::write_ch;

/// Streaming ANSI/VT100 decoder bound to one [`Surface`].
///
/// Characters are consumed one at a time with no lookahead. Recognized
/// sequences become calls on the surface, plain characters are written at
/// the cursor, and anything the decoder does not understand is logged and
/// dropped so decoding resumes with the next character.
///
/// The decoder expects already decoded characters; turning raw pty bytes
/// into text (and handling split multi-byte sequences) is up to the caller.
pub struct Decoder<S: Surface> {
    machine: AnsiMachine<S>,
    memory: Memory<S>,
}

impl<S: Surface> Decoder<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(surface: S, config: DecoderConfig) -> Self {
        Self {
            machine: table::build(),
            memory: Memory {
                surface,
                params: Params::new(),
                config,
            },
        }
    }

    /// Feeds a single character.
    pub fn process_char(&mut self, ch: char) {
        if self.machine.step(ch, &mut self.memory) == State::Init {
            self.memory.params.clear();
        }
    }

    /// Feeds every character of `text` in order.
    pub fn process_text(&mut self, text: &str) {
        self.process_chars(text.chars());
    }

    /// Feeds a sequence of characters in order.
    pub fn process_chars<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        for ch in chars {
            self.process_char(ch);
        }
    }

    /// Writes `ch` at the cursor using the plain character rules, bypassing
    /// escape sequence recognition.
    pub fn write_char(&mut self, ch: char) {
        write_ch(&mut self.memory.surface, &self.memory.config, ch);
    }

    /// Drops any partially received sequence.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.memory.params.clear();
    }

    #[inline]
    pub fn state(&self) -> State {
        self.machine.state()
    }

    /// Number of numeric parameters collected for the sequence in flight.
    #[inline]
    pub fn pending_params(&self) -> usize {
        self.memory.params.len()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.memory.config
    }

    pub fn surface(&self) -> &S {
        &self.memory.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.memory.surface
    }

    pub fn into_surface(self) -> S {
        self.memory.surface
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for Decoder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("state", &self.machine.state())
            .field("memory", &self.memory)
            .finish()
    }
}
