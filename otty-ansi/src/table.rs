//! VT100/ANSI transition table.
//!
//! The table mirrors the sequences a classic VT100 host emits and a handful
//! of dialect extensions (Linux console private CSI, ANSI.SYS screen modes).
//! Sequences the table does not know fall through to [`unhandled`], which
//! logs the offending state and symbol and drops back to [`State::Init`].

use log::{debug, error, trace};
use otty_fsm::{MAX_PARAMS, Machine, Params, Step};

use crate::config::DecoderConfig;
use crate::state::State;
use crate::surface::Surface;
use crate::write::write_ch;

const ESC: char = '\u{1b}';
const DIGITS: &str = "0123456789";

/// Working memory shared by all handlers.
#[derive(Debug)]
pub(crate) struct Memory<S> {
    pub surface: S,
    pub params: Params,
    pub config: DecoderConfig,
}

pub(crate) type AnsiMachine<S> = Machine<State, char, Memory<S>>;

pub(crate) fn build<S: Surface>() -> AnsiMachine<S> {
    use State::*;

    let mut fsm: AnsiMachine<S> = Machine::new(Init, Some(unhandled), Init);

    fsm.add_transition_any(Init, Some(emit), Init);
    fsm.add_transition(Init, ESC, None, Esc);

    // ESC
    fsm.add_transition_any(Esc, Some(unhandled), Init);
    fsm.add_transition(Esc, '(', None, G0Scs);
    fsm.add_transition(Esc, ')', None, G1Scs);
    fsm.add_transition_list(G0Scs, "AB012".chars(), None, Init);
    fsm.add_transition_list(G1Scs, "AB012".chars(), None, Init);
    fsm.add_transition(Esc, '7', Some(cursor_save), Init);
    fsm.add_transition(Esc, '8', Some(cursor_restore), Init);
    fsm.add_transition(Esc, 'M', Some(up_reverse), Init);
    fsm.add_transition(Esc, '>', Some(up_reverse), Init);
    fsm.add_transition(Esc, '<', Some(up_reverse), Init);
    // Application keypad.
    fsm.add_transition(Esc, '=', None, Init);
    fsm.add_transition(Esc, '#', None, GraphicsPound);
    fsm.add_transition_any(GraphicsPound, None, Init);
    fsm.add_transition(Esc, '%', None, SelCharSet);
    fsm.add_transition_any(SelCharSet, None, Init);
    fsm.add_transition(Esc, '[', None, Elb);

    // CSI without parameters
    fsm.add_transition(Elb, 'H', Some(home_origin), Init);
    fsm.add_transition(Elb, 'D', Some(back_one), Init);
    fsm.add_transition(Elb, 'B', Some(down_one), Init);
    fsm.add_transition(Elb, 'C', Some(forward_one), Init);
    fsm.add_transition(Elb, 'A', Some(up_one), Init);
    fsm.add_transition(Elb, 'J', Some(erase_down), Init);
    fsm.add_transition(Elb, 'K', Some(erase_end_of_line), Init);
    fsm.add_transition(Elb, 'r', Some(enable_scroll), Init);
    fsm.add_transition(Elb, 'm', Some(discard), Init);
    fsm.add_transition(Elb, '?', None, ModeCrap);
    fsm.add_transition(Elb, '=', None, ScreenMode);

    // CSI with a single parameter
    fsm.add_transition_list(Elb, DIGITS.chars(), Some(start_number), Number1);
    fsm.add_transition_list(
        Number1,
        DIGITS.chars(),
        Some(build_number),
        Number1,
    );
    fsm.add_transition(Number1, 'D', Some(back), Init);
    fsm.add_transition(Number1, 'B', Some(down), Init);
    fsm.add_transition(Number1, 'C', Some(forward), Init);
    fsm.add_transition(Number1, 'A', Some(up), Init);
    fsm.add_transition(Number1, 'J', Some(erase), Init);
    fsm.add_transition(Number1, 'K', Some(erase_in_line), Init);
    // RM - reset mode
    fsm.add_transition(Number1, 'l', Some(discard), Init);
    // SGR
    fsm.add_transition(Number1, 'm', Some(discard), Init);
    // DSR
    fsm.add_transition(Number1, 'n', Some(discard), Init);
    // DECSCA
    fsm.add_transition(Number1, 'q', Some(discard), Init);
    // Linux console private CSI
    fsm.add_transition(Number1, ']', Some(discard), Init);
    fsm.add_transition(Number1, ';', None, Semicolon);

    // DEC private modes: ESC [ ? Pn ; ... h/l
    fsm.add_transition_list(
        ModeCrap,
        DIGITS.chars(),
        Some(start_number),
        ModeCrapNum,
    );
    fsm.add_transition_list(
        ModeCrapNum,
        DIGITS.chars(),
        Some(build_number),
        ModeCrapNum,
    );
    fsm.add_transition(ModeCrapNum, ';', None, ModeCrapSemi);
    fsm.add_transition_list(
        ModeCrapSemi,
        DIGITS.chars(),
        Some(start_number),
        ModeCrapNum,
    );
    fsm.add_transition(ModeCrapNum, 'l', Some(discard), Init);
    fsm.add_transition(ModeCrapNum, 'h', Some(discard), Init);

    // ANSI.SYS screen modes: ESC [ = Pn ; ... h/l
    fsm.add_transition_list(
        ScreenMode,
        DIGITS.chars(),
        Some(start_number),
        ScreenModeNum,
    );
    fsm.add_transition_list(
        ScreenModeNum,
        DIGITS.chars(),
        Some(build_number),
        ScreenModeNum,
    );
    fsm.add_transition(ScreenModeNum, ';', None, ScreenMode);
    fsm.add_transition(ScreenModeNum, 'l', Some(discard), Init);
    fsm.add_transition(ScreenModeNum, 'h', Some(discard), Init);

    // CSI with two parameters
    fsm.add_transition_any(Semicolon, Some(unhandled), Init);
    fsm.add_transition_list(
        Semicolon,
        DIGITS.chars(),
        Some(start_number),
        Number2,
    );
    fsm.add_transition_list(
        Number2,
        DIGITS.chars(),
        Some(build_number),
        Number2,
    );
    fsm.add_transition_any(Number2, Some(unhandled), Init);
    fsm.add_transition(Number2, 'H', Some(home), Init);
    fsm.add_transition(Number2, 'f', Some(home), Init);
    fsm.add_transition(Number2, 'r', Some(scroll_region), Init);
    fsm.add_transition(Number2, 'm', Some(discard), Init);
    fsm.add_transition(Number2, 'q', Some(discard), Init);
    fsm.add_transition(Number2, ']', Some(discard), Init);
    fsm.add_transition(Number2, ';', None, SemicolonX);

    // SGR, DECSCA and Linux private CSI may carry any number of parameters.
    fsm.add_transition_any(SemicolonX, Some(unhandled), Init);
    fsm.add_transition_list(
        SemicolonX,
        DIGITS.chars(),
        Some(start_number),
        NumberX,
    );
    fsm.add_transition_list(
        NumberX,
        DIGITS.chars(),
        Some(build_number),
        NumberX,
    );
    fsm.add_transition_any(NumberX, Some(unhandled), Init);
    fsm.add_transition(NumberX, 'm', Some(discard), Init);
    fsm.add_transition(NumberX, 'q', Some(discard), Init);
    fsm.add_transition(NumberX, ']', Some(discard), Init);
    fsm.add_transition(NumberX, ';', None, SemicolonX);

    fsm
}

/// Pops the parameter a handler needs.
///
/// The table only routes into popping handlers after the matching push, so
/// an empty stack here is a defect in the table.
fn pop_param<S>(
    memory: &mut Memory<S>,
    step: Step<State, char>,
) -> Option<usize> {
    let param = memory.params.pop().map(usize::from);
    if param.is_none() {
        error!(
            "[defect: ansi] missing parameter state: {} symbol: {:?}",
            step.state, step.symbol
        );
    }
    param
}

fn unhandled<S>(memory: &mut Memory<S>, step: Step<State, char>) {
    debug!(
        "[unexpected: ansi] state: {} symbol: {:?}",
        step.state, step.symbol
    );
    memory.params.clear();
}

/// Consumes a sequence the decoder parses but does not model.
fn discard<S>(memory: &mut Memory<S>, step: Step<State, char>) {
    trace!(
        "[discarded: ansi] state: {} final: {:?} params: {}",
        step.state,
        step.symbol,
        memory.params.len()
    );
    memory.params.clear();
}

fn emit<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    write_ch(&mut memory.surface, &memory.config, step.symbol);
}

fn start_number<S>(memory: &mut Memory<S>, step: Step<State, char>) {
    let was_full = memory.params.is_full();
    memory.params.start(step.symbol);
    if !was_full && memory.params.is_full() {
        debug!(
            "[unexpected: ansi] more than {MAX_PARAMS} parameters state: {}",
            step.state
        );
    }
}

fn build_number<S>(memory: &mut Memory<S>, step: Step<State, char>) {
    memory.params.extend(step.symbol);
}

fn back_one<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_back(1);
}

fn back<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    if let Some(count) = pop_param(memory, step) {
        memory.surface.cursor_back(count);
    }
}

fn down_one<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_down(1);
}

fn down<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    if let Some(count) = pop_param(memory, step) {
        memory.surface.cursor_down(count);
    }
}

fn forward_one<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_forward(1);
}

fn forward<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    if let Some(count) = pop_param(memory, step) {
        memory.surface.cursor_forward(count);
    }
}

fn up_one<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_up(1);
}

fn up<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    if let Some(count) = pop_param(memory, step) {
        memory.surface.cursor_up(count);
    }
}

fn up_reverse<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_up_reverse();
}

fn home_origin<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.cursor_home(1, 1);
}

fn home<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    let Some(col) = pop_param(memory, step) else {
        return;
    };
    let Some(row) = pop_param(memory, step) else {
        return;
    };
    memory.surface.cursor_home(row, col);
}

fn erase_down<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.erase_down();
}

/// ED - erase in display.
fn erase<S: Surface>(memory: &mut Memory<S>, step: Step<State, char>) {
    match pop_param(memory, step) {
        Some(0) => memory.surface.erase_down(),
        Some(1) => memory.surface.erase_up(),
        Some(2) => memory.surface.erase_screen(),
        Some(mode) => {
            debug!("[unexpected: ansi] erase in display mode: {mode}")
        },
        None => {},
    }
}

fn erase_end_of_line<S: Surface>(
    memory: &mut Memory<S>,
    _: Step<State, char>,
) {
    memory.surface.erase_to_end_of_line();
}

/// EL - erase in line.
fn erase_in_line<S: Surface>(
    memory: &mut Memory<S>,
    step: Step<State, char>,
) {
    match pop_param(memory, step) {
        Some(0) => memory.surface.erase_to_end_of_line(),
        Some(1) => memory.surface.erase_to_start_of_line(),
        Some(2) => memory.surface.erase_line(),
        Some(mode) => {
            debug!("[unexpected: ansi] erase in line mode: {mode}")
        },
        None => {},
    }
}

fn enable_scroll<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.enable_full_screen_scroll();
}

fn scroll_region<S: Surface>(
    memory: &mut Memory<S>,
    step: Step<State, char>,
) {
    let Some(bottom) = pop_param(memory, step) else {
        return;
    };
    let Some(top) = pop_param(memory, step) else {
        return;
    };
    memory.surface.scroll_region(top, bottom);
}

fn cursor_save<S: Surface>(memory: &mut Memory<S>, _: Step<State, char>) {
    memory.surface.save_cursor_attrs();
}

fn cursor_restore<S: Surface>(
    memory: &mut Memory<S>,
    _: Step<State, char>,
) {
    memory.surface.restore_cursor_attrs();
}
