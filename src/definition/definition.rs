use crate::automaton::Automaton;
use crate::dfa::DFA;
use crate::error_handling::Error::{
    DuplicateState, IOError, InvalidDefinition, InvalidSymbol, MissingDefinitionKey,
    SymbolNotInSigma, TransitionRejected, UnknownAutomatonKind, UnknownState, YamlParsingError,
};
use crate::error_handling::{Error, Result};
use crate::nfa::NFA;
use indexmap::IndexMap;
use serde_yaml::Value;
use std::fmt;
use std::io::Read;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AutomatonKind {
    Dfa,
    Nfa,
}

pub struct TransitionDefinition {
    from: String,
    symbol: char,
    to: Vec<String>,
}

impl TransitionDefinition {
    pub fn get_from(&self) -> &str {
        &self.from
    }

    pub fn get_symbol(&self) -> char {
        self.symbol
    }

    pub fn get_to(&self) -> &Vec<String> {
        &self.to
    }
}

/// An automaton described in YAML:
///
/// ```yaml
/// kind: nfa
/// sigma: [a, b]
/// states: [s1, s2]
/// start: s1
/// final: [s2]
/// transitions:
///   - { from: s1, symbol: a, to: [s1, s2] }
///   - { from: s1, symbol: ε, to: s2 }
/// ```
pub struct AutomatonDefinition {
    kind: AutomatonKind,
    sigma: Vec<char>,
    states: Vec<String>,
    start: Option<String>,
    finals: Vec<String>,
    transitions: Vec<TransitionDefinition>,
}

/// A built automaton of either kind.
#[derive(Debug)]
pub enum Machine {
    Dfa(DFA),
    Nfa(NFA),
}

impl Machine {
    pub fn as_automaton(&self) -> &dyn Automaton {
        match self {
            Machine::Dfa(dfa) => dfa,
            Machine::Nfa(nfa) => nfa,
        }
    }

    pub fn accepts(&self, input: &str) -> bool {
        self.as_automaton().accepts(input)
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Machine::Dfa(dfa) => write!(f, "{}", dfa),
            Machine::Nfa(nfa) => write!(f, "{}", nfa),
        }
    }
}

impl AutomatonDefinition {
    pub fn get_kind(&self) -> AutomatonKind {
        self.kind
    }

    pub fn get_sigma(&self) -> &Vec<char> {
        &self.sigma
    }

    pub fn get_states(&self) -> &Vec<String> {
        &self.states
    }

    pub fn get_start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn get_finals(&self) -> &Vec<String> {
        &self.finals
    }

    pub fn get_transitions(&self) -> &Vec<TransitionDefinition> {
        &self.transitions
    }
}

impl AutomatonDefinition {
    const KIND_KEY: &'static str = "kind";
    const SIGMA_KEY: &'static str = "sigma";
    const STATES_KEY: &'static str = "states";
    const START_KEY: &'static str = "start";
    const FINAL_KEY: &'static str = "final";
    const TRANSITIONS_KEY: &'static str = "transitions";
    const FROM_KEY: &'static str = "from";
    const SYMBOL_KEY: &'static str = "symbol";
    const TO_KEY: &'static str = "to";

    pub fn parse_from_file(yaml_file_path: &str) -> Result<AutomatonDefinition> {
        match std::fs::File::open(yaml_file_path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    return Err(IOError(e));
                }
                Self::parse_from_str(contents.as_str())
            }
            Err(e) => Err(IOError(e)),
        }
    }

    pub fn parse_from_str(yaml_content: &str) -> Result<AutomatonDefinition> {
        match Self::load_kv_pairs_from_yaml_content(yaml_content) {
            Ok(kv_pairs) => Self::load_from_kv_pairs(kv_pairs),
            Err(e) => Err(YamlParsingError(e)),
        }
    }

    fn get_key_value<'a>(
        kv_map: &'a IndexMap<String, Value>,
        key: &'static str,
    ) -> Result<&'a Value> {
        kv_map.get(key).ok_or(MissingDefinitionKey(key))
    }

    fn load_kv_pairs_from_yaml_content(
        yaml_content: &str,
    ) -> serde_yaml::Result<IndexMap<String, Value>> {
        let kv_map_result: IndexMap<String, Value> = serde_yaml::from_str(yaml_content)?;
        Ok(kv_map_result)
    }

    // Unquoted YAML scalars such as `0` or `true` are not strings, but are valid names here.
    fn scalar_to_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn parse_name(value: &Value, context: &'static str) -> Result<String> {
        Self::scalar_to_string(value).ok_or(InvalidDefinition(context))
    }

    fn parse_names(value: &Value, context: &'static str) -> Result<Vec<String>> {
        match value {
            Value::Sequence(sequence) => sequence
                .iter()
                .map(|val| Self::parse_name(val, context))
                .collect(),
            _ => Err(InvalidDefinition(context)),
        }
    }

    fn parse_symbol(value: &Value) -> Result<char> {
        let symbol = Self::parse_name(value, "a symbol must be a single character")?;
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(InvalidSymbol(symbol)),
        }
    }

    fn parse_transition(value: &Value) -> Result<TransitionDefinition> {
        let Value::Mapping(mapping) = value else {
            return Err(InvalidDefinition("a transition must be a mapping"));
        };
        let field = |key: &'static str| mapping.get(key).ok_or(MissingDefinitionKey(key));

        let from = Self::parse_name(field(Self::FROM_KEY)?, "`from` must name a state")?;
        let symbol = Self::parse_symbol(field(Self::SYMBOL_KEY)?)?;
        let to = match field(Self::TO_KEY)? {
            sequence @ Value::Sequence(_) => {
                Self::parse_names(sequence, "`to` must name a state or list states")?
            }
            single => vec![Self::parse_name(
                single,
                "`to` must name a state or list states",
            )?],
        };

        Ok(TransitionDefinition { from, symbol, to })
    }

    fn load_from_kv_pairs(kv_pairs: IndexMap<String, Value>) -> Result<Self> {
        // Handle kind
        let kind = match Self::parse_name(
            Self::get_key_value(&kv_pairs, Self::KIND_KEY)?,
            "`kind` must be `dfa` or `nfa`",
        )?
        .to_ascii_lowercase()
        .as_str()
        {
            "dfa" => AutomatonKind::Dfa,
            "nfa" => AutomatonKind::Nfa,
            other => return Err(UnknownAutomatonKind(other.to_string())),
        };

        // Handle sigma
        let sigma = match Self::get_key_value(&kv_pairs, Self::SIGMA_KEY)? {
            Value::Sequence(sequence) => sequence
                .iter()
                .map(Self::parse_symbol)
                .collect::<Result<Vec<char>>>()?,
            _ => return Err(InvalidDefinition("`sigma` must be a list of symbols")),
        };

        // Handle states
        let states = Self::parse_names(
            Self::get_key_value(&kv_pairs, Self::STATES_KEY)?,
            "`states` must be a list of state names",
        )?;

        // Handle the optional keys
        let start = match kv_pairs.get(Self::START_KEY) {
            Some(value) => Some(Self::parse_name(value, "`start` must name a state")?),
            None => None,
        };
        let finals = match kv_pairs.get(Self::FINAL_KEY) {
            Some(value) => Self::parse_names(value, "`final` must be a list of state names")?,
            None => Vec::new(),
        };
        let transitions = match kv_pairs.get(Self::TRANSITIONS_KEY) {
            Some(Value::Sequence(sequence)) => sequence
                .iter()
                .map(Self::parse_transition)
                .collect::<Result<Vec<TransitionDefinition>>>()?,
            Some(_) => {
                return Err(InvalidDefinition(
                    "`transitions` must be a list of transitions",
                ))
            }
            None => Vec::new(),
        };

        Ok(Self {
            kind,
            sigma,
            states,
            start,
            finals,
            transitions,
        })
    }
}

impl AutomatonDefinition {
    /// Builds the automaton named by `kind`.
    pub fn build(&self) -> Result<Machine> {
        match self.kind {
            AutomatonKind::Dfa => Ok(Machine::Dfa(self.build_dfa()?)),
            AutomatonKind::Nfa => Ok(Machine::Nfa(self.build_nfa()?)),
        }
    }

    pub fn build_dfa(&self) -> Result<DFA> {
        let mut dfa = DFA::new();
        self.populate(&mut dfa)?;

        for transition in self.transitions.iter() {
            let [to] = transition.to.as_slice() else {
                return Err(InvalidDefinition(
                    "a DFA transition must have exactly one destination",
                ));
            };
            if !dfa.add_transition(&transition.from, to, transition.symbol) {
                return Err(Self::rejected_transition(&dfa, transition));
            }
        }

        Ok(dfa)
    }

    pub fn build_nfa(&self) -> Result<NFA> {
        let mut nfa = NFA::new();
        self.populate(&mut nfa)?;

        for transition in self.transitions.iter() {
            let to = transition.to.iter().map(String::as_str);
            if !nfa.add_transition(&transition.from, to, transition.symbol) {
                return Err(Self::rejected_transition(&nfa, transition));
            }
        }

        Ok(nfa)
    }

    fn populate(&self, automaton: &mut dyn Automaton) -> Result<()> {
        for symbol in self.sigma.iter() {
            automaton.add_sigma(*symbol);
        }
        for name in self.states.iter() {
            if !automaton.add_state(name) {
                return Err(DuplicateState(name.clone()));
            }
        }
        if let Some(start) = &self.start {
            if !automaton.set_start(start) {
                return Err(UnknownState(start.clone()));
            }
        }
        for name in self.finals.iter() {
            if !automaton.set_final(name) {
                return Err(UnknownState(name.clone()));
            }
        }
        Ok(())
    }

    // Works out which precondition made the automaton refuse `transition`.
    fn rejected_transition(automaton: &dyn Automaton, transition: &TransitionDefinition) -> Error {
        if !automaton.get_sigma().contains(&transition.symbol) {
            return SymbolNotInSigma(transition.symbol);
        }
        let names = std::iter::once(&transition.from).chain(transition.to.iter());
        for name in names {
            if automaton.get_state(name).is_none() {
                return UnknownState(name.clone());
            }
        }
        if transition.to.is_empty() {
            return InvalidDefinition("a transition must have at least one destination");
        }
        TransitionRejected {
            from: transition.from.clone(),
            symbol: transition.symbol,
        }
    }
}
