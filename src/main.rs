use std::env;
use std::process;

use env_logger::Env;
use log::error;
use table_dfa::{DFABuilder, DFABuilding};

// binary numerals without leading zeros: 0|1[01]*
const SYMBOLS: [char; 2] = ['0', '1'];

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let dfa = DFABuilder::new(&SYMBOLS, 3, 2)
        .add_final(2)
        .add_final(3)
        .map_symbol('1', 1)
        .add_transition(1, 0, 2)
        .add_transition(1, 1, 3)
        .add_transition(3, 0, 3)
        .add_transition(3, 1, 3)
        .finalize();
    let mut dfa = match dfa {
        Ok(dfa) => dfa,
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        }
    };

    let mut words: Vec<String> = env::args().skip(1).collect();
    if words.is_empty() {
        words = ["0", "1", "10", "0110", "1011", "12", ""]
            .iter()
            .map(|w| w.to_string())
            .collect();
    }
    for word in &words {
        let verdict = if dfa.run(word) { "accepted" } else { "rejected" };
        println!("{:?}: {}", word, verdict);
    }
}
