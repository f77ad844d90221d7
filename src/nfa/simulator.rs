use crate::automaton::{is_epsilon, State, StateId};
use crate::nfa::NFA;
use std::collections::BTreeSet;

/// Feeds an [`NFA`] one character at a time, tracking every state it could be in at once.
///
/// The active set is always closed under epsilon transitions. The simulator also remembers the
/// widest active set seen since the last reset.
pub struct NfaSimulator<'a> {
    nfa: &'a NFA,
    active: BTreeSet<StateId>,
    max_active: usize,
}

impl<'a> NfaSimulator<'a> {
    pub fn new(nfa: &'a NFA) -> Self {
        let mut simulator = NfaSimulator {
            nfa,
            active: BTreeSet::new(),
            max_active: 0,
        };
        simulator.reset_simulation();
        simulator
    }

    pub fn reset_simulation(&mut self) {
        self.active = match self.nfa.registry.get_start() {
            Some(start) => self.nfa.epsilon_closure(start),
            None => BTreeSet::new(),
        };
        self.max_active = self.active.len();
    }

    /// Advances every active state over `input`. Returns `false` once no state is active anymore,
    /// after which every further character keeps the set empty.
    pub fn simulate_single_char(&mut self, input: char) -> bool {
        let mut next = BTreeSet::new();
        if !is_epsilon(input) {
            for state in self.active.iter() {
                if let Some(destinations) = self.nfa.destinations(*state, input) {
                    next.extend(destinations.iter().copied());
                }
            }
        }

        let direct: Vec<StateId> = next.iter().copied().collect();
        for state in direct {
            next.extend(self.nfa.epsilon_closure(state));
        }

        self.max_active = self.max_active.max(next.len());
        self.active = next;
        !self.active.is_empty()
    }

    pub fn is_accepting(&self) -> bool {
        self.active
            .iter()
            .any(|state| self.nfa.registry.state(*state).is_final())
    }

    pub fn get_active_states(&self) -> Vec<&'a State> {
        let nfa = self.nfa;
        self.active
            .iter()
            .map(|state| nfa.registry.state(*state))
            .collect()
    }

    pub fn get_max_active(&self) -> usize {
        self.max_active
    }
}
