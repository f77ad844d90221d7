use fa_sim::nfa::NfaSimulator;
use fa_sim::{Automaton, EPSILON, NFA};

fn cycle_nfa() -> NFA {
    let mut nfa = NFA::new();
    nfa.add_sigma('a');
    assert!(nfa.add_state("s1"));
    assert!(nfa.set_start("s1"));
    assert!(nfa.add_state("s2"));
    assert!(nfa.add_state("s3"));
    assert!(nfa.set_final("s3"));

    assert!(nfa.add_transition("s1", ["s2"], 'a'));
    assert!(nfa.add_transition("s2", ["s2", "s3"], 'a'));
    nfa
}

#[test]
fn test_cycle_acceptance() {
    let nfa = cycle_nfa();
    assert!(nfa.accepts("aa"));
    assert!(nfa.accepts("aaa"));
    assert!(!nfa.accepts("a"));
    assert!(!nfa.accepts(""));
    assert!(!nfa.accepts("ab"));
}

#[test]
fn test_fan_out_max_copies() {
    let mut nfa = NFA::new();
    nfa.add_sigma('a');
    for name in ["s1", "s2", "s3"] {
        assert!(nfa.add_state(name));
    }
    assert!(nfa.set_start("s1"));
    assert!(nfa.set_final("s3"));
    assert!(nfa.add_transition("s1", ["s2", "s3"], 'a'));

    assert_eq!(nfa.max_copies(""), 1);
    assert_eq!(nfa.max_copies("a"), 2);
    assert_eq!(nfa.max_copies("aa"), 2);
    assert!(nfa.accepts("a"));
    assert!(!nfa.is_dfa());
}

#[test]
fn test_multiple_transitions_from_one_state() {
    let mut nfa = NFA::new();
    nfa.add_sigma('b');
    assert!(nfa.add_state("s1"));
    assert!(nfa.set_start("s1"));
    assert!(nfa.add_state("s2"));
    assert!(nfa.set_final("s2"));
    assert!(nfa.add_state("s3"));
    assert!(nfa.add_transition("s1", ["s2"], 'b'));
    assert!(nfa.add_transition("s1", ["s3"], 'b'));

    assert!(nfa.accepts("b"));
    assert_eq!(nfa.max_copies("b"), 2);
}

#[test]
fn test_multiple_symbols_in_sequence() {
    let mut nfa = NFA::new();
    nfa.add_sigma('a');
    nfa.add_sigma('b');
    for name in ["s1", "s2", "s3"] {
        assert!(nfa.add_state(name));
    }
    assert!(nfa.set_start("s1"));
    assert!(nfa.set_final("s3"));
    assert!(nfa.add_transition("s1", ["s2"], 'a'));
    assert!(nfa.add_transition("s2", ["s3"], 'b'));

    assert!(nfa.accepts("ab"));
    assert!(!nfa.accepts("ba"));
}

#[test]
fn test_epsilon_self_loop_is_not_dfa() {
    let mut nfa = NFA::new();
    nfa.add_sigma('a');
    assert!(nfa.add_state("q0"));
    assert!(nfa.set_start("q0"));
    assert!(nfa.set_final("q0"));
    assert!(nfa.add_transition("q0", ["q0"], EPSILON));

    assert!(!nfa.is_dfa());
    assert!(nfa.accepts(""));
    assert!(!nfa.accepts("a"));
    assert_eq!(nfa.max_copies("a"), 1);

    let mut labeled = NFA::new();
    labeled.add_sigma('a');
    assert!(labeled.add_state("q0"));
    assert!(labeled.set_start("q0"));
    assert!(labeled.set_final("q0"));
    assert!(labeled.add_transition("q0", ["q0"], 'a'));

    assert!(labeled.is_dfa());
    assert!(labeled.accepts("aaa"));
}

#[test]
fn test_start_and_final_flags() {
    let mut nfa = cycle_nfa();
    assert!(nfa.is_start("s1"));
    assert!(!nfa.is_start("s2"));
    assert!(!nfa.is_final("s1"));
    assert!(nfa.is_final("s3"));
    assert!(!nfa.is_final("missing"));
    assert_eq!(nfa.get_start(), Some("s1"));

    assert!(nfa.set_start("s3"));
    assert!(nfa.is_start("s3"));
    assert!(!nfa.is_start("s1"));
    assert!(nfa.accepts(""));

    assert!(nfa.set_final("s1"));
    assert!(nfa.is_final("s1"));
    assert!(nfa.get_state("s1").unwrap().is_final());
}

#[test]
fn test_unknown_names_do_not_mutate() {
    let mut nfa = cycle_nfa();
    let before = nfa.to_string();

    assert!(!nfa.add_state("s1"));
    assert!(!nfa.set_start("missing"));
    assert!(!nfa.set_final("missing"));
    assert!(!nfa.add_transition("missing", ["s1"], 'a'));
    assert!(!nfa.add_transition("s1", ["s3", "missing"], 'a'));
    assert!(!nfa.add_transition("s1", ["s3"], 'z'));

    assert_eq!(nfa.to_string(), before);
    assert!(nfa.get_state("missing").is_none());
}

#[test]
fn test_step_by_step_simulation() {
    let nfa = cycle_nfa();
    let mut simulator = NfaSimulator::new(&nfa);
    assert_eq!(simulator.get_active_states().len(), 1);
    assert!(!simulator.is_accepting());

    assert!(simulator.simulate_single_char('a'));
    assert!(!simulator.is_accepting());
    assert!(simulator.simulate_single_char('a'));
    assert!(simulator.is_accepting());

    let names: Vec<&str> = simulator
        .get_active_states()
        .into_iter()
        .map(|state| state.get_name())
        .collect();
    assert_eq!(names, vec!["s2", "s3"]);
    assert_eq!(simulator.get_max_active(), 2);

    assert!(!simulator.simulate_single_char('b'));
    assert!(!simulator.is_accepting());

    simulator.reset_simulation();
    assert_eq!(simulator.get_max_active(), 1);
}
