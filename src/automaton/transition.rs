use crate::automaton::StateId;

/// The reserved symbol for transitions taken without consuming input.
pub const EPSILON: char = 'ε';

pub fn is_epsilon(symbol: char) -> bool {
    symbol == EPSILON
}

/// Key of a transition table entry. Two keys are equal iff they leave the same state on the same
/// symbol; the destination(s) live in the table itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Transition {
    from: StateId,
    symbol: char,
}

impl Transition {
    pub(crate) fn new(from: StateId, symbol: char) -> Self {
        Transition { from, symbol }
    }

    pub(crate) fn get_from(&self) -> StateId {
        self.from
    }

    pub(crate) fn get_symbol(&self) -> char {
        self.symbol
    }
}
