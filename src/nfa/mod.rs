pub(crate) mod nfa;
mod search;
mod simulator;


pub use nfa::NFA;
pub use simulator::NfaSimulator;
