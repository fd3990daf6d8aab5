//! Generic table-driven state machine used by the otty escape decoders.
//!
//! [`Machine`] resolves `(state, symbol)` pairs to transitions with a fixed
//! precedence (exact symbol, symbol class, per-state wildcard, default) and
//! runs the bound [`Action`] against caller owned memory. [`Params`] is the
//! working memory most decoders need on top of that: a stack of decimal
//! arguments accumulated digit by digit.

mod machine;
mod params;
mod transitions;

pub use machine::Machine;
pub use params::{MAX_PARAM, MAX_PARAMS, Params};
pub use transitions::{Action, Matched, Step, Transition};
