use crate::automaton::{is_epsilon, Automaton, State, StateId, StateRegistry, Transition, EPSILON};
use crate::nfa::search::{SearchQueue, SearchState};
use crate::nfa::NfaSimulator;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// A non-deterministic finite automaton with epsilon transitions.
///
/// Each (state, symbol) key maps to a non-empty set of destinations. [`EPSILON`] is a member of
/// the alphabet from construction on and is never consumed as input.
#[derive(Clone, Debug)]
pub struct NFA {
    pub(crate) registry: StateRegistry,
    transitions: HashMap<Transition, BTreeSet<StateId>>,
}

impl Default for NFA {
    fn default() -> Self {
        Self::new()
    }
}

impl NFA {
    pub fn new() -> Self {
        let mut registry = StateRegistry::new();
        registry.add_sigma(EPSILON);
        NFA {
            registry,
            transitions: HashMap::new(),
        }
    }

    /// Adds `from --symbol--> t` for every `t` in `to`.
    ///
    /// Fails without recording anything if the symbol is not in the alphabet, if any state is
    /// unknown, or if `to` is empty.
    pub fn add_transition<'a, I>(&mut self, from: &str, to: I, symbol: char) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.registry.has_symbol(symbol) {
            return false;
        }
        let Some(from) = self.registry.lookup(from) else {
            return false;
        };

        let mut destinations = BTreeSet::new();
        for name in to {
            match self.registry.lookup(name) {
                Some(id) => destinations.insert(id),
                None => return false,
            };
        }
        if destinations.is_empty() {
            return false;
        }

        self.transitions
            .entry(Transition::new(from, symbol))
            .or_default()
            .extend(destinations);
        true
    }

    /// Destination states of `from` on `symbol`, in registration order.
    pub fn get_to_state(&self, from: &str, symbol: char) -> Option<Vec<&State>> {
        let from = self.registry.lookup(from)?;
        self.destinations(from, symbol).map(|destinations| {
            destinations
                .iter()
                .map(|id| self.registry.state(*id))
                .collect()
        })
    }

    pub(crate) fn destinations(&self, from: StateId, symbol: char) -> Option<&BTreeSet<StateId>> {
        self.transitions.get(&Transition::new(from, symbol))
    }

    /// The states reachable from `name` over zero or more epsilon transitions, `name` included.
    /// `None` if no such state is registered.
    pub fn e_closure(&self, name: &str) -> Option<HashSet<&State>> {
        let start = self.registry.lookup(name)?;
        Some(
            self.epsilon_closure(start)
                .into_iter()
                .map(|id| self.registry.state(id))
                .collect(),
        )
    }

    pub(crate) fn epsilon_closure(&self, start: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut stack = vec![start];

        while let Some(state) = stack.pop() {
            if !closure.insert(state) {
                continue;
            }
            if let Some(destinations) = self.destinations(state, EPSILON) {
                stack.extend(
                    destinations
                        .iter()
                        .filter(|destination| !closure.contains(*destination)),
                );
            }
        }

        closure
    }

    /// The largest number of states active at once while reading `input` left to right, counting
    /// the epsilon closure before the first character. `0` if no start state is set.
    pub fn max_copies(&self, input: &str) -> usize {
        if self.registry.get_start().is_none() {
            return 0;
        }

        let mut simulator = NfaSimulator::new(self);
        for symbol in input.chars() {
            // An empty active set stays empty; the maximum can no longer change.
            if !simulator.simulate_single_char(symbol) {
                break;
            }
        }
        simulator.get_max_active()
    }

    /// Whether the transition table is structurally deterministic: no epsilon entry and no entry
    /// with more than one destination. Reachability is not considered.
    pub fn is_dfa(&self) -> bool {
        self.transitions.iter().all(|(transition, destinations)| {
            !is_epsilon(transition.get_symbol()) && destinations.len() == 1
        })
    }

    fn is_final_state(&self, state: StateId) -> bool {
        self.registry.state(state).is_final()
    }

    fn expand_epsilon(
        &self,
        input: &[char],
        search_state: SearchState,
        queue: &mut SearchQueue,
    ) -> bool {
        let closure = self.epsilon_closure(search_state.state);
        let exhausted = search_state.offset == input.len();

        if exhausted && closure.iter().any(|state| self.is_final_state(*state)) {
            return true;
        }

        for state in closure {
            if state != search_state.state {
                queue.push(SearchState::new(search_state.offset, state));
            }
        }
        false
    }

    fn expand_symbol(
        &self,
        input: &[char],
        search_state: SearchState,
        queue: &mut SearchQueue,
    ) -> bool {
        let Some(&symbol) = input.get(search_state.offset) else {
            return false;
        };
        if is_epsilon(symbol) {
            return false;
        }
        let Some(destinations) = self.destinations(search_state.state, symbol) else {
            return false;
        };

        let offset = search_state.offset + 1;
        if offset == input.len()
            && destinations
                .iter()
                .any(|state| self.is_final_state(*state))
        {
            return true;
        }

        // With the input exhausted, these configurations still get an epsilon expansion so that
        // trailing epsilon moves into a final state are honoured.
        for state in destinations {
            queue.push(SearchState::new(offset, *state));
        }
        false
    }
}

impl Automaton for NFA {
    fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut StateRegistry {
        &mut self.registry
    }

    fn accepts(&self, input: &str) -> bool {
        let Some(start) = self.registry.get_start() else {
            return false;
        };

        let input: Vec<char> = input.chars().collect();
        let mut queue = SearchQueue::new(SearchState::new(0, start));

        while let Some(search_state) = queue.pop() {
            if self.expand_epsilon(&input, search_state, &mut queue)
                || self.expand_symbol(&input, search_state, &mut queue)
            {
                return true;
            }
        }

        false
    }
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.registry.fmt_table(f, |state, symbol| {
            match self.destinations(state, symbol) {
                Some(destinations) => {
                    let names: Vec<&str> = destinations
                        .iter()
                        .map(|id| self.registry.state(*id).get_name())
                        .collect();
                    format!("{{{}}}", names.join(","))
                }
                None => "-".to_string(),
            }
        })
    }
}
