use fa_sim::definition::{AutomatonDefinition, AutomatonKind, Machine};
use fa_sim::error_handling::{Error, Result};
use fa_sim::Automaton;

fn definition_path(file_name: &str) -> String {
    let project_root = env!("CARGO_MANIFEST_DIR");
    std::path::Path::new(project_root)
        .join("demos")
        .join("definitions")
        .join(file_name)
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_cycle_nfa_definition() -> Result<()> {
    let definition = AutomatonDefinition::parse_from_file(&definition_path("cycle_nfa.yaml"))?;
    assert_eq!(definition.get_kind(), AutomatonKind::Nfa);

    let Machine::Nfa(nfa) = definition.build()? else {
        panic!("expected an NFA");
    };
    for input in ["aa", "aaa", "aaaa"] {
        assert!(nfa.accepts(input), "{input}");
    }
    assert!(!nfa.accepts("a"));
    assert_eq!(nfa.max_copies("aaa"), 2);

    Ok(())
}

#[test]
fn test_epsilon_nfa_definition() -> Result<()> {
    let machine =
        AutomatonDefinition::parse_from_file(&definition_path("epsilon_nfa.yaml"))?.build()?;

    for input in ["ab", "aab", "bab", "abab"] {
        assert!(machine.accepts(input), "{input}");
    }
    for input in ["", "a", "ba", "abb"] {
        assert!(!machine.accepts(input), "{input}");
    }

    let Machine::Nfa(nfa) = &machine else {
        panic!("expected an NFA");
    };
    assert!(!nfa.is_dfa());
    assert_eq!(nfa.max_copies(""), 2);
    assert_eq!(nfa.max_copies("ab"), 3);

    Ok(())
}

#[test]
fn test_parity_dfa_definition() -> Result<()> {
    let machine =
        AutomatonDefinition::parse_from_file(&definition_path("parity_dfa.yaml"))?.build()?;
    let Machine::Dfa(dfa) = &machine else {
        panic!("expected a DFA");
    };

    assert!(machine.accepts("0101"));
    assert!(!machine.accepts("0110"));
    assert!(machine.to_string().contains("q0 = a"));

    // The same table read as an NFA is structurally deterministic.
    let nfa = AutomatonDefinition::parse_from_file(&definition_path("parity_dfa.yaml"))?
        .build_nfa()?;
    assert!(nfa.is_dfa());

    let swapped = dfa.swap('0', '1').unwrap();
    assert!(swapped.accepts("1010"));

    Ok(())
}

#[test]
fn test_missing_file() {
    let result = AutomatonDefinition::parse_from_file(&definition_path("missing.yaml"));
    assert!(matches!(result, Err(Error::IOError(_))));
}
