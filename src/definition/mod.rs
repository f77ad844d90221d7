mod definition;

pub use definition::AutomatonDefinition;
pub use definition::AutomatonKind;
pub use definition::Machine;
pub use definition::TransitionDefinition;
