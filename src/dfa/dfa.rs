use crate::automaton::{Automaton, State, StateId, StateRegistry, Transition};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A deterministic finite automaton. Every (state, symbol) key has at most one destination;
/// a missing entry acts as a non-accepting sink.
#[derive(Clone, Debug, Default)]
pub struct DFA {
    registry: StateRegistry,
    transitions: HashMap<Transition, StateId>, // (from_state, symbol) -> to_state
}

pub struct DfaSimulator {
    dfa: Rc<DFA>,
    current_state: Option<StateId>,
}

impl DFA {
    pub fn new() -> Self {
        DFA {
            registry: StateRegistry::new(),
            transitions: HashMap::new(),
        }
    }

    /// Adds `from --symbol--> to`.
    ///
    /// Re-adding the transition already stored for (from, symbol) succeeds; a different
    /// destination for an existing key is refused rather than overwritten.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: char) -> bool {
        if !self.registry.has_symbol(symbol) {
            return false;
        }
        let (Some(from), Some(to)) = (self.registry.lookup(from), self.registry.lookup(to)) else {
            return false;
        };

        let existing = self
            .transitions
            .entry(Transition::new(from, symbol))
            .or_insert(to);
        *existing == to
    }

    pub fn get_to_state(&self, from: &str, symbol: char) -> Option<&State> {
        let from = self.registry.lookup(from)?;
        self.get_next_state(from, symbol)
            .map(|to| self.registry.state(to))
    }

    pub(crate) fn get_next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions
            .get(&Transition::new(state, symbol))
            .copied()
    }

    /// Returns an independent copy in which every `symbol1` transition is relabeled `symbol2`
    /// and vice versa.
    ///
    /// `None` if neither symbol is in the alphabet, or if a relabeled transition cannot be added
    /// to the copy (for instance because only one of the two symbols is in the alphabet).
    pub fn swap(&self, symbol1: char, symbol2: char) -> Option<DFA> {
        if !self.registry.has_symbol(symbol1) && !self.registry.has_symbol(symbol2) {
            return None;
        }

        let mut swapped = DFA {
            registry: self.registry.clone(),
            transitions: HashMap::with_capacity(self.transitions.len()),
        };

        for (transition, to_state) in self.transitions.iter() {
            let symbol = match transition.get_symbol() {
                symbol if symbol == symbol1 => symbol2,
                symbol if symbol == symbol2 => symbol1,
                symbol => symbol,
            };
            let from = self.registry.state(transition.get_from()).get_name();
            let to = self.registry.state(*to_state).get_name();
            if !swapped.add_transition(from, to, symbol) {
                return None;
            }
        }

        Some(swapped)
    }
}

impl Automaton for DFA {
    fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut StateRegistry {
        &mut self.registry
    }

    fn accepts(&self, input: &str) -> bool {
        let Some(mut current_state) = self.registry.get_start() else {
            return false;
        };

        for symbol in input.chars() {
            match self.get_next_state(current_state, symbol) {
                Some(next_state) => current_state = next_state,
                None => return false,
            }
        }

        self.registry.state(current_state).is_final()
    }
}

impl fmt::Display for DFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.registry
            .fmt_table(f, |state, symbol| match self.get_next_state(state, symbol) {
                Some(to_state) => self.registry.state(to_state).get_name().to_string(),
                None => "ERR".to_string(),
            })
    }
}

impl DfaSimulator {
    pub fn new(dfa: Rc<DFA>) -> Self {
        let current_state = dfa.registry.get_start();
        DfaSimulator { dfa, current_state }
    }

    pub fn reset_simulation(&mut self) {
        self.current_state = self.dfa.registry.get_start();
    }

    // Simulate the DFA with a single character
    // Returns whether the new current state is final, or None once the DFA has reached a dead end
    // (no start state, or no transition on the character)
    pub fn simulate_single_char(&mut self, input: char) -> Option<bool> {
        let next_state = self
            .current_state
            .and_then(|state| self.dfa.get_next_state(state, input));
        self.current_state = next_state;

        next_state.map(|state| self.dfa.registry.state(state).is_final())
    }

    pub fn get_current_state(&self) -> Option<&State> {
        self.current_state
            .map(|state| self.dfa.registry.state(state))
    }

    pub fn is_accepting(&self) -> bool {
        self.get_current_state().is_some_and(State::is_final)
    }
}
