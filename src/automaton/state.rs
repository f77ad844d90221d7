/// Index of a state inside its automaton's registry. States are never removed, so an id stays
/// valid for the lifetime of the automaton that handed it out.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(pub(crate) usize);

/// A named state with its initial/final flags.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct State {
    name: String,
    initial: bool,
    fin: bool,
}

impl State {
    pub(crate) fn new(name: &str) -> Self {
        State {
            name: name.to_string(),
            initial: false,
            fin: false,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn is_initial(&self) -> bool {
        self.initial
    }

    pub fn is_final(&self) -> bool {
        self.fin
    }

    pub(crate) fn set_initial(&mut self, initial: bool) {
        self.initial = initial;
    }

    pub(crate) fn set_final(&mut self, fin: bool) {
        self.fin = fin;
    }
}
