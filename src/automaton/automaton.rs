use crate::automaton::{State, StateRegistry};
use indexmap::IndexSet;

/// Construction and query surface shared by [`crate::nfa::NFA`] and [`crate::dfa::DFA`].
///
/// Every operation is name-based. Precondition failures are reported through the return value
/// (`false` or `None`) and leave the automaton untouched.
pub trait Automaton {
    fn registry(&self) -> &StateRegistry;

    fn registry_mut(&mut self) -> &mut StateRegistry;

    /// Decides whether `input` is in the language of the automaton. Always `false` when no start
    /// state has been set.
    fn accepts(&self, input: &str) -> bool;

    /// Registers a new state. Returns `false` if the name is already taken.
    fn add_state(&mut self, name: &str) -> bool {
        self.registry_mut().add_state(name)
    }

    /// Makes `name` the start state, clearing the flag on the previous one.
    fn set_start(&mut self, name: &str) -> bool {
        self.registry_mut().set_start(name)
    }

    fn set_final(&mut self, name: &str) -> bool {
        self.registry_mut().set_final(name)
    }

    fn add_sigma(&mut self, symbol: char) {
        self.registry_mut().add_sigma(symbol)
    }

    fn get_sigma(&self) -> &IndexSet<char> {
        self.registry().get_sigma()
    }

    fn get_state(&self, name: &str) -> Option<&State> {
        self.registry().get_state(name)
    }

    fn get_start(&self) -> Option<&str> {
        let registry = self.registry();
        registry
            .get_start()
            .map(|id| registry.state(id).get_name())
    }

    fn is_start(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(State::is_initial)
    }

    fn is_final(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(State::is_final)
    }
}
