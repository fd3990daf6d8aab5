//! Transition table storage for the [`Machine`](crate::Machine).
//!
//! A table maps `(state, input)` pairs to a [`Transition`]: an optional
//! action and the state to enter afterwards. Inputs are registered in three
//! flavours which are consulted in a fixed order when a symbol arrives:
//!
//! 1. an exact symbol registered for the state,
//! 2. a symbol class (a list of symbols) registered for the state,
//! 3. the wildcard registered for the state,
//! 4. the single, state independent default transition.
//!
//! The lookup always yields a transition, so the machine has no failure path.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Context handed to an [`Action`] when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<St, I> {
    /// State the symbol was read in.
    pub state: St,
    /// The symbol that triggered the transition.
    pub symbol: I,
}

/// Callback bound to a transition.
///
/// Actions receive the working memory of the embedding component and never
/// the machine itself, so they cannot feed more input while a step is in
/// progress.
pub type Action<St, I, M> = fn(&mut M, Step<St, I>);

/// Resolved table entry.
pub struct Transition<St, I, M> {
    /// Runs before the state changes; `None` consumes the symbol silently.
    pub action: Option<Action<St, I, M>>,
    /// State entered after the action.
    pub next: St,
}

impl<St: Copy, I, M> Clone for Transition<St, I, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<St: Copy, I, M> Copy for Transition<St, I, M> {}

impl<St: fmt::Debug, I, M> fmt::Debug for Transition<St, I, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("action", &self.action.is_some())
            .field("next", &self.next)
            .finish()
    }
}

/// Which part of the table produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched {
    /// The symbol was registered on its own for the state.
    Exact,
    /// The symbol belongs to a class registered for the state.
    Class,
    /// The state's wildcard.
    Any,
    /// The state independent fallback.
    Default,
}

pub(crate) struct Table<St, I, M> {
    exact: HashMap<(St, I), Transition<St, I, M>>,
    classes: HashMap<St, Vec<(Vec<I>, Transition<St, I, M>)>>,
    any: HashMap<St, Transition<St, I, M>>,
    default: Transition<St, I, M>,
}

impl<St, I, M> Table<St, I, M>
where
    St: Copy + Eq + Hash,
    I: Copy + Eq + Hash,
{
    pub(crate) fn new(default: Transition<St, I, M>) -> Self {
        Self {
            exact: HashMap::new(),
            classes: HashMap::new(),
            any: HashMap::new(),
            default,
        }
    }

    pub(crate) fn insert_exact(
        &mut self,
        state: St,
        symbol: I,
        transition: Transition<St, I, M>,
    ) {
        self.exact.insert((state, symbol), transition);
    }

    /// Registers a class. A class with the same members replaces the old one
    /// in place so that the registration order of other classes is kept.
    pub(crate) fn insert_class(
        &mut self,
        state: St,
        symbols: Vec<I>,
        transition: Transition<St, I, M>,
    ) {
        let classes = self.classes.entry(state).or_default();
        match classes.iter_mut().find(|(members, _)| *members == symbols) {
            Some(entry) => entry.1 = transition,
            None => classes.push((symbols, transition)),
        }
    }

    pub(crate) fn insert_any(
        &mut self,
        state: St,
        transition: Transition<St, I, M>,
    ) {
        self.any.insert(state, transition);
    }

    pub(crate) fn set_default(&mut self, transition: Transition<St, I, M>) {
        self.default = transition;
    }

    pub(crate) fn resolve(
        &self,
        state: St,
        symbol: I,
    ) -> (Matched, Transition<St, I, M>) {
        if let Some(transition) = self.exact.get(&(state, symbol)) {
            return (Matched::Exact, *transition);
        }

        let class = self.classes.get(&state).and_then(|classes| {
            classes
                .iter()
                .find(|(members, _)| members.contains(&symbol))
                .map(|(_, transition)| *transition)
        });
        if let Some(transition) = class {
            return (Matched::Class, transition);
        }

        if let Some(transition) = self.any.get(&state) {
            return (Matched::Any, *transition);
        }

        (Matched::Default, self.default)
    }

    pub(crate) fn len(&self) -> usize {
        self.exact.len()
            + self.classes.values().map(Vec::len).sum::<usize>()
            + self.any.len()
    }
}
