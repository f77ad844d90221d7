pub(crate) mod automaton;
pub(crate) mod registry;
pub(crate) mod state;
pub(crate) mod transition;

pub use automaton::Automaton;
pub use registry::StateRegistry;
pub use state::{State, StateId};
pub use transition::{is_epsilon, EPSILON};

pub(crate) use transition::Transition;
