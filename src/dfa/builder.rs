// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use log::debug;

use crate::alphabet::Alphabet;
use crate::dfa::core::DFA;
use crate::error::{DFAError, Result};

/// The `DFABuilder` follows the builder pattern and allows to create a
/// table-driven Deterministic Finite Automaton. The builder is moved at each
/// call so it is necessary to bind to a new variable the return value for each
/// function of the builder.
///
/// The configuration is applied by `finalize` in a fixed order: the dense
/// table, then single transitions (which override the table), then symbol
/// classes, then the starting state.
///
/// # Errors
///
/// Return an error if the alphabet is not sorted, if a transition is added
/// twice, or if any part of the configuration is rejected by the automaton.
///
/// # Examples
///
/// ```
/// use table_dfa::dfa::builder::*;
///
/// // identifiers: [a-z][a-z0-9]*
/// let symbols: Vec<char> = "0123456789abcdefghijklmnopqrstuvwxyz".chars().collect();
/// let mut dfa = DFABuilder::new(&symbols, 2, 2)
///     .add_final(2)
///     .map_class("abcdefghijklmnopqrstuvwxyz", 1)
///     .add_transition(1, 1, 2)
///     .add_transition(2, 0, 2)
///     .add_transition(2, 1, 2)
///     .finalize()
///     .unwrap();
/// assert!(dfa.run("x86"));
/// assert!(!dfa.run("86x"));
/// ```
///
/// ```
/// use table_dfa::dfa::builder::*;
/// use table_dfa::DFAError;
///
/// let symbols = ['a', 'b'];
/// let dfa = DFABuilder::new(&symbols, 2, 1)
///     .add_transition(1, 0, 2)
///     .add_transition(1, 0, 1)
///     .finalize();
/// match dfa {
///     Err(DFAError::DuplicatedTransition { state, column }) => assert_eq!((state, column), (1, 0)),
///     _ => panic!("DuplicatedTransition expected."),
/// }
/// ```
#[derive(Debug)]
pub struct DFABuilder<'a> {
    alphabet: Alphabet<'a>,
    num_states: usize,
    num_columns: usize,
    finals: Vec<usize>,
    start: Option<usize>,
    classes: Vec<(char, usize)>,
    table: Option<Vec<usize>>,
    transitions: HashMap<(usize, usize), usize>,
}

/// DFABuilding is the trait associated to the DFABuilder type.
///
/// It is implemented for `Result<DFABuilder>` too, so that the first error of
/// a chain is carried to `finalize` instead of unwrapping at each stage.
pub trait DFABuilding<'a> {
    /// Overrides the starting state (`1` by default).
    fn set_start(self, state: usize) -> Result<DFABuilder<'a>>;

    /// Add a final state to the DFA.
    fn add_final(self, state: usize) -> Result<DFABuilder<'a>>;

    /// Maps one symbol to a column.
    fn map_symbol(self, symbol: char, column: usize) -> Result<DFABuilder<'a>>;

    /// Maps every symbol of `symbols` to the same column.
    fn map_class(self, symbols: &str, column: usize) -> Result<DFABuilder<'a>>;

    /// Add a transition to the DFA.
    ///
    /// # Errors
    ///
    /// Return a DFAError::DuplicatedTransition if a transition with the same
    /// source state and column has already been added, even if the
    /// destination state is the same.
    fn add_transition(self, src: usize, column: usize, dest: usize) -> Result<DFABuilder<'a>>;

    /// Supplies a dense `num_states x num_columns` table. Row `r` is state `r + 1`.
    fn fill_table(self, table: Vec<usize>) -> Result<DFABuilder<'a>>;

    /// Finalize the building of the DFA.
    fn finalize(self) -> Result<DFA<'a>>;
}

impl<'a> DFABuilder<'a> {
    /// Creates a new DFABuilder over the sorted `symbols`.
    pub fn new(symbols: &'a [char], num_states: usize, num_columns: usize) -> Result<DFABuilder<'a>> {
        let alphabet = Alphabet::new(symbols)?;
        Ok(DFABuilder {
            alphabet,
            num_states,
            num_columns,
            finals: Vec::new(),
            start: None,
            classes: Vec::new(),
            table: None,
            transitions: HashMap::new(),
        })
    }
}

impl<'a> DFABuilding<'a> for DFABuilder<'a> {
    fn set_start(self, state: usize) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).set_start(state)
    }

    fn add_final(self, state: usize) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).add_final(state)
    }

    fn map_symbol(self, symbol: char, column: usize) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).map_symbol(symbol, column)
    }

    fn map_class(self, symbols: &str, column: usize) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).map_class(symbols, column)
    }

    fn add_transition(self, src: usize, column: usize, dest: usize) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).add_transition(src, column, dest)
    }

    fn fill_table(self, table: Vec<usize>) -> Result<DFABuilder<'a>> {
        Ok::<_, DFAError>(self).fill_table(table)
    }

    fn finalize(self) -> Result<DFA<'a>> {
        Ok::<_, DFAError>(self).finalize()
    }
}

impl<'a> DFABuilding<'a> for Result<DFABuilder<'a>> {
    fn set_start(self, state: usize) -> Result<DFABuilder<'a>> {
        self.map(|mut dfa| {
            dfa.start = Some(state);
            dfa
        })
    }

    fn add_final(self, state: usize) -> Result<DFABuilder<'a>> {
        self.map(|mut dfa| {
            dfa.finals.push(state);
            dfa
        })
    }

    fn map_symbol(self, symbol: char, column: usize) -> Result<DFABuilder<'a>> {
        self.map(|mut dfa| {
            dfa.classes.push((symbol, column));
            dfa
        })
    }

    fn map_class(self, symbols: &str, column: usize) -> Result<DFABuilder<'a>> {
        self.map(|mut dfa| {
            dfa.classes.extend(symbols.chars().map(|symbol| (symbol, column)));
            dfa
        })
    }

    fn add_transition(self, src: usize, column: usize, dest: usize) -> Result<DFABuilder<'a>> {
        self.and_then(|mut dfa| {
            if dfa.transitions.insert((src, column), dest).is_some() {
                return Err(DFAError::DuplicatedTransition { state: src, column });
            }
            Ok(dfa)
        })
    }

    fn fill_table(self, table: Vec<usize>) -> Result<DFABuilder<'a>> {
        self.map(|mut dfa| {
            dfa.table = Some(table);
            dfa
        })
    }

    fn finalize(self) -> Result<DFA<'a>> {
        self.and_then(|builder| {
            let mut dfa = DFA::new(builder.alphabet, builder.num_states, builder.num_columns, builder.finals)?;
            if let Some(table) = builder.table {
                dfa.fill_transition_table(&table)?;
            }
            for (&(src, column), &dest) in &builder.transitions {
                dfa.set_transition(src, column, dest)?;
            }
            for &(symbol, column) in &builder.classes {
                dfa.set_symbol_mapping(symbol, column)?;
            }
            if let Some(start) = builder.start {
                dfa.set_initial_state(start)?;
            }
            dfa.clear_stats();
            debug!(
                "built dfa: {} explicit transitions, {} mapped symbols",
                builder.transitions.len(),
                builder.classes.len()
            );
            Ok(dfa)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::state::State;

    // (ab)*c over columns a=0, b=1, c=2
    fn abc() -> Result<DFABuilder<'static>> {
        const SYMBOLS: [char; 3] = ['a', 'b', 'c'];
        DFABuilder::new(&SYMBOLS, 3, 3)
            .add_final(3)
            .map_symbol('b', 1)
            .map_symbol('c', 2)
            .add_transition(1, 0, 2)
            .add_transition(1, 2, 3)
            .add_transition(2, 1, 1)
    }

    #[test]
    fn test_dfa() {
        let mut dfa = abc().finalize().unwrap();
        let samples = vec![
            ("ababac", false),
            ("ababc", true),
            ("", false),
            ("abc", true),
            ("c", true),
            ("ac", false),
            ("ababababababababababababababababababababc", true),
        ];

        for (input, expected_result) in samples {
            assert!(dfa.run(input) == expected_result, "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_dfa_builder_duplicated_transition() {
        let dfa = abc().add_transition(1, 0, 3).finalize();
        match dfa {
            Err(DFAError::DuplicatedTransition { state, column }) => assert!((state, column) == (1, 0)),
            _ => panic!("DuplicatedTransition expected."),
        }
    }

    #[test]
    fn test_dfa_builder_unsorted_alphabet() {
        let symbols = ['b', 'a'];
        let dfa = DFABuilder::new(&symbols, 1, 1).add_final(1).finalize();
        match dfa {
            Err(DFAError::UnsortedAlphabet { index }) => assert_eq!(index, 1),
            _ => panic!("UnsortedAlphabet expected."),
        }
    }

    #[test]
    fn test_dfa_builder_first_error_wins() {
        let dfa = abc()
            .add_transition(2, 1, 1)
            .map_symbol('z', 0)
            .finalize();
        match dfa {
            Err(DFAError::DuplicatedTransition { state, column }) => assert!((state, column) == (2, 1)),
            _ => panic!("DuplicatedTransition expected."),
        }
    }

    #[test]
    fn test_dfa_builder_bad_symbol() {
        match abc().map_symbol('z', 0).finalize() {
            Err(DFAError::SymbolNotInAlphabet('z')) => (),
            _ => panic!("SymbolNotInAlphabet expected."),
        }
    }

    #[test]
    fn test_dfa_builder_bad_final() {
        match abc().add_final(4).finalize() {
            Err(DFAError::NotLiveState(4)) => (),
            _ => panic!("NotLiveState expected."),
        }
    }

    #[test]
    fn test_dfa_builder_table_then_override() {
        let symbols = ['0', '1'];
        let mut dfa = DFABuilder::new(&symbols, 2, 2)
            .add_final(2)
            .map_symbol('1', 1)
            .fill_table(vec![2, 1, 2, 1])
            .add_transition(2, 1, 0)
            .finalize()
            .unwrap();
        assert_eq!(dfa.get_transition(1, 1), Ok(State::Live(1)));
        assert_eq!(dfa.get_transition(2, 1), Ok(State::Sink));
        assert!(dfa.run("110"));
        assert!(!dfa.run("101"));
        assert_eq!(dfa.stats().steps, 6);
    }

    #[test]
    fn test_dfa_builder_start() {
        let mut dfa = abc().set_start(2).finalize().unwrap();
        assert_eq!(dfa.initial_state(), State::Live(2));
        assert!(dfa.run("bc"));
        assert!(!dfa.run("abc"));
    }
}
