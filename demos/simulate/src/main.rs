use fa_sim::definition::{AutomatonDefinition, Machine};
use fa_sim::error_handling::Result;

use clap::{Arg, ArgAction, Command};

fn main() -> Result<()> {
    let matches = Command::new("fa-sim-simulate")
        .version("1.0")
        .arg(
            Arg::new("definition")
                .help("Path to the automaton definition file")
                .required(true)
                .value_name("DEFINITION_FILE"),
        )
        .arg(
            Arg::new("input")
                .help("Input strings to run through the automaton")
                .action(ArgAction::Append)
                .value_name("INPUT"),
        )
        .arg(
            Arg::new("swap")
                .long("swap")
                .help("For a DFA, relabel two symbols before running the inputs")
                .num_args(2)
                .value_names(["SYMBOL1", "SYMBOL2"]),
        )
        .get_matches();

    let definition_path: &String = matches
        .get_one("definition")
        .expect("no definition file found");
    let inputs: Vec<&String> = matches
        .get_many::<String>("input")
        .map(|inputs| inputs.collect())
        .unwrap_or_default();

    let definition = AutomatonDefinition::parse_from_file(definition_path.as_str())?;
    let mut machine = definition.build()?;

    if let Some(symbols) = matches.get_many::<String>("swap") {
        let symbols: Vec<char> = symbols.filter_map(|s| s.chars().next()).collect();
        let swapped = match (&machine, symbols.as_slice()) {
            (Machine::Dfa(dfa), [symbol1, symbol2]) => {
                let swapped = dfa.swap(*symbol1, *symbol2);
                if swapped.is_none() {
                    println!("[WARN] cannot swap {:?} and {:?}", symbol1, symbol2);
                }
                swapped
            }
            _ => {
                println!("[WARN] --swap only applies to DFAs");
                None
            }
        };
        if let Some(swapped) = swapped {
            machine = Machine::Dfa(swapped);
        }
    }

    println!("{}", machine);
    if let Machine::Nfa(nfa) = &machine {
        println!("[INFO] is_dfa: {}", nfa.is_dfa());
    }

    for input in inputs {
        let verdict = if machine.accepts(input) { "accept" } else { "reject" };
        match &machine {
            Machine::Nfa(nfa) => println!(
                "{:?}: {} (max copies: {})",
                input,
                verdict,
                nfa.max_copies(input)
            ),
            Machine::Dfa(_) => println!("{:?}: {}", input, verdict),
        }
    }

    Ok(())
}
