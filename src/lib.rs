pub mod automaton;
pub mod definition;
pub mod dfa;
pub mod error_handling;
pub mod nfa;

pub use automaton::{Automaton, State, EPSILON};
pub use dfa::DFA;
pub use nfa::NFA;

const VERSION: &str = "0.0.1";

pub fn version() -> &'static str {
    VERSION
}
