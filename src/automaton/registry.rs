use crate::automaton::{State, StateId};
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Named states plus the alphabet they are driven by. Both keep insertion order so that listings
/// are deterministic.
#[derive(Clone, Debug, Default)]
pub struct StateRegistry {
    states: IndexMap<String, State>,
    sigma: IndexSet<char>,
    start: Option<StateId>,
}

impl StateRegistry {
    pub(crate) fn new() -> Self {
        StateRegistry {
            states: IndexMap::new(),
            sigma: IndexSet::new(),
            start: None,
        }
    }

    pub(crate) fn add_state(&mut self, name: &str) -> bool {
        if self.states.contains_key(name) {
            return false;
        }
        self.states.insert(name.to_string(), State::new(name));
        true
    }

    pub(crate) fn set_start(&mut self, name: &str) -> bool {
        let Some(id) = self.lookup(name) else {
            return false;
        };

        // Only one state may carry the initial flag at a time.
        if let Some(previous) = self.start.replace(id) {
            self.states[previous.0].set_initial(false);
        }
        self.states[id.0].set_initial(true);
        true
    }

    pub(crate) fn set_final(&mut self, name: &str) -> bool {
        match self.states.get_mut(name) {
            Some(state) => {
                state.set_final(true);
                true
            }
            None => false,
        }
    }

    pub(crate) fn add_sigma(&mut self, symbol: char) {
        self.sigma.insert(symbol);
    }

    pub(crate) fn get_sigma(&self) -> &IndexSet<char> {
        &self.sigma
    }

    pub(crate) fn has_symbol(&self, symbol: char) -> bool {
        self.sigma.contains(&symbol)
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<StateId> {
        self.states.get_index_of(name).map(StateId)
    }

    pub(crate) fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    // Ids are only minted by `lookup`/`ids` on this registry, and states are never removed.
    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub(crate) fn get_start(&self) -> Option<StateId> {
        self.start
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len()).map(StateId)
    }

    /// Writes the `Q`, `Sigma`, `delta`, `q0` and `F` listing. `cell` renders the table entry for
    /// one (state, symbol) pair.
    pub(crate) fn fmt_table<F>(&self, f: &mut fmt::Formatter<'_>, cell: F) -> fmt::Result
    where
        F: Fn(StateId, char) -> String,
    {
        write!(f, "Q = {{ ")?;
        for name in self.states.keys() {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "}}")?;

        write!(f, "Sigma = {{ ")?;
        for symbol in self.sigma.iter() {
            write!(f, "{} ", symbol)?;
        }
        writeln!(f, "}}")?;

        write!(f, "delta = \n\t")?;
        for symbol in self.sigma.iter() {
            write!(f, "{}\t", symbol)?;
        }
        writeln!(f)?;
        for id in self.ids() {
            write!(f, "{}", self.state(id).get_name())?;
            for symbol in self.sigma.iter() {
                write!(f, "\t{}", cell(id, *symbol))?;
            }
            writeln!(f)?;
        }

        if let Some(start) = self.start {
            write!(f, "\nq0 = {}", self.state(start).get_name())?;
        }

        write!(f, "\nF = {{ ")?;
        for state in self.states.values().filter(|state| state.is_final()) {
            write!(f, "{} ", state.get_name())?;
        }
        writeln!(f, "}}")
    }
}
