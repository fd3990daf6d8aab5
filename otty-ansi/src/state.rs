use std::fmt;

/// States of the ANSI decoder.
///
/// `Init` is the ground state: plain characters are written from it and
/// every completed or abandoned sequence returns to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Init,
    /// `ESC` seen.
    Esc,
    /// `ESC (` - designate G0 character set.
    G0Scs,
    /// `ESC )` - designate G1 character set.
    G1Scs,
    /// `ESC #` - line size control.
    GraphicsPound,
    /// `ESC %` - select character set.
    SelCharSet,
    /// `ESC [` - control sequence introducer.
    Elb,
    Number1,
    Semicolon,
    Number2,
    SemicolonX,
    NumberX,
    /// `ESC [ ?` - DEC private mode.
    ModeCrap,
    ModeCrapNum,
    ModeCrapSemi,
    /// `ESC [ =` - ANSI.SYS screen mode.
    ScreenMode,
    ScreenModeNum,
}

impl State {
    /// All states, in declaration order.
    pub const ALL: [State; 17] = [
        State::Init,
        State::Esc,
        State::G0Scs,
        State::G1Scs,
        State::GraphicsPound,
        State::SelCharSet,
        State::Elb,
        State::Number1,
        State::Semicolon,
        State::Number2,
        State::SemicolonX,
        State::NumberX,
        State::ModeCrap,
        State::ModeCrapNum,
        State::ModeCrapSemi,
        State::ScreenMode,
        State::ScreenModeNum,
    ];
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use State::*;
        let name = match self {
            Init => "INIT",
            Esc => "ESC",
            G0Scs => "G0SCS",
            G1Scs => "G1SCS",
            GraphicsPound => "GRAPHICS_POUND",
            SelCharSet => "SEL_CHARACTER_SET",
            Elb => "ELB",
            Number1 => "NUMBER_1",
            Semicolon => "SEMICOLON",
            Number2 => "NUMBER_2",
            SemicolonX => "SEMICOLON_X",
            NumberX => "NUMBER_X",
            ModeCrap => "MODECRAP",
            ModeCrapNum => "MODECRAP_NUM",
            ModeCrapSemi => "MODECRAP_SEMICOLON",
            ScreenMode => "SCREEN_MODE",
            ScreenModeNum => "SCREEN_MODE_NUM",
        };
        f.write_str(name)
    }
}
