use std::fmt;
use std::hash::Hash;

use crate::transitions::{Action, Matched, Step, Table, Transition};

/// Table-driven finite state machine.
///
/// The machine is generic over its state type `St`, its input symbol type
/// `I` and the working memory `M` that actions mutate. It stores only the
/// table and the current state; the memory is owned by the caller and lent
/// to [`Machine::step`], which keeps the machine reusable for any consumer
/// and makes reentrant stepping from inside an action impossible.
///
/// ```
/// use otty_fsm::{Machine, Step};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum State {
///     Idle,
///     Counting,
/// }
///
/// fn count(total: &mut u32, _: Step<State, char>) {
///     *total += 1;
/// }
///
/// let mut machine = Machine::new(State::Idle, None, State::Idle);
/// machine.add_transition(State::Idle, '(', None, State::Counting);
/// machine.add_transition(State::Counting, ')', None, State::Idle);
/// machine.add_transition_any(State::Counting, Some(count), State::Counting);
///
/// let mut total = 0;
/// for ch in "a(bcd)e".chars() {
///     machine.step(ch, &mut total);
/// }
///
/// assert_eq!(total, 3);
/// assert_eq!(machine.state(), State::Idle);
/// ```
pub struct Machine<St, I, M> {
    initial: St,
    state: St,
    table: Table<St, I, M>,
}

impl<St, I, M> Machine<St, I, M>
where
    St: Copy + Eq + Hash,
    I: Copy + Eq + Hash,
{
    /// Creates a machine in `initial` state with the mandatory default
    /// transition used for every input the table does not cover.
    #[must_use]
    pub fn new(
        initial: St,
        default_action: Option<Action<St, I, M>>,
        default_next: St,
    ) -> Self {
        Self {
            initial,
            state: initial,
            table: Table::new(Transition {
                action: default_action,
                next: default_next,
            }),
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> St {
        self.state
    }

    /// Returns to the initial state without running any action.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }

    /// Registers a transition for an exact `symbol` read in `state`.
    pub fn add_transition(
        &mut self,
        state: St,
        symbol: I,
        action: Option<Action<St, I, M>>,
        next: St,
    ) {
        self.table
            .insert_exact(state, symbol, Transition { action, next });
    }

    /// Registers a transition for any member of `symbols` read in `state`.
    pub fn add_transition_list<S>(
        &mut self,
        state: St,
        symbols: S,
        action: Option<Action<St, I, M>>,
        next: St,
    ) where
        S: IntoIterator<Item = I>,
    {
        self.table.insert_class(
            state,
            symbols.into_iter().collect(),
            Transition { action, next },
        );
    }

    /// Registers the transition taken by `state` when neither an exact
    /// symbol nor a class matches.
    pub fn add_transition_any(
        &mut self,
        state: St,
        action: Option<Action<St, I, M>>,
        next: St,
    ) {
        self.table.insert_any(state, Transition { action, next });
    }

    /// Replaces the state independent fallback transition.
    pub fn set_default_transition(
        &mut self,
        action: Option<Action<St, I, M>>,
        next: St,
    ) {
        self.table.set_default(Transition { action, next });
    }

    /// Resolves the transition `symbol` would take from `state` without
    /// running it.
    pub fn lookup(
        &self,
        state: St,
        symbol: I,
    ) -> (Matched, Transition<St, I, M>) {
        self.table.resolve(state, symbol)
    }

    /// Number of registered transitions, the default one excluded.
    pub fn transition_count(&self) -> usize {
        self.table.len()
    }

    /// Feeds one symbol.
    ///
    /// The bound action, if any, runs before the state changes and observes
    /// the state the symbol was read in. Returns the new state.
    pub fn step(&mut self, symbol: I, memory: &mut M) -> St {
        let (_, transition) = self.table.resolve(self.state, symbol);

        if let Some(action) = transition.action {
            action(
                memory,
                Step {
                    state: self.state,
                    symbol,
                },
            );
        }

        self.state = transition.next;
        self.state
    }
}

impl<St: fmt::Debug, I, M> fmt::Debug for Machine<St, I, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("initial", &self.initial)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
