// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashSet;

use itertools::iproduct;
use log::{debug, trace, warn};

use crate::alphabet::Alphabet;
use crate::dfa::state::State;
use crate::dfa::stats::StepStats;
use crate::error::{DFAError, Result};

/// The type `DFA` represents a Deterministic Finite Automaton driven one
/// symbol at a time. The transitions are stored in a dense table indexed by
/// state and column.
///
/// Symbols are first mapped to a column: several symbols may share a column
/// (all the digits, for instance), which keeps the table narrow. The table has
/// one row per live state plus row `0` for the sink state. Every cell starts
/// as `State::Sink`, so any transition that is never configured rejects.
///
/// The alphabet is borrowed and may be shared by many automata. The final
/// states, column mapping and transition table are owned.
///
/// A `DFA` is a single mutable resource with no internal locking: concurrent
/// scans need one automaton each (cloning is cheap and the alphabet is shared).
///
/// # Examples
///
/// ```
/// use table_dfa::alphabet::Alphabet;
/// use table_dfa::dfa::core::DFA;
///
/// let symbols = ['0', '1'];
/// let alphabet = Alphabet::new(&symbols).unwrap();
/// let mut dfa = DFA::new(alphabet, 2, 1, vec![1]).unwrap();
/// dfa.fill_column_mapping(&symbols, &[0, 0]).unwrap();
/// dfa.set_transition(1, 0, 1).unwrap();
///
/// for c in "0110".chars() {
///     dfa.advance(c);
/// }
/// assert!(dfa.is_accepting());
///
/// dfa.reset();
/// dfa.advance('0');
/// dfa.advance('2');
/// assert!(!dfa.is_alive());
/// ```
#[derive(Debug, Clone)]
pub struct DFA<'a> {
    alphabet: Alphabet<'a>,
    column_map: Vec<usize>,
    num_states: usize,
    num_columns: usize,
    // (num_states + 1) * num_columns, row-major, row 0 is the sink
    transitions: Vec<State>,
    finals: HashSet<usize>,
    initial: State,
    current: State,
    alive: bool,
    stats: StepStats,
}

impl<'a> DFA<'a> {
    /// Creates an automaton with `num_states` live states and `num_columns`
    /// columns. Every symbol maps to column `0` and every transition rejects
    /// until configured. The initial state is `1`.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::NoStates` or a `DFAError::NoColumns` if the table
    /// would be empty.
    ///
    /// Return a `DFAError::NotLiveState` if a final state is `0` or greater
    /// than `num_states`.
    ///
    /// Return a `DFAError::TableTooLarge` if the number of cells overflows.
    pub fn new(
        alphabet: Alphabet<'a>,
        num_states: usize,
        num_columns: usize,
        final_states: Vec<usize>,
    ) -> Result<DFA<'a>> {
        if num_states == 0 {
            return Err(DFAError::NoStates);
        }
        if num_columns == 0 {
            return Err(DFAError::NoColumns);
        }
        if let Some(&state) = final_states.iter().find(|&&s| s == 0 || s > num_states) {
            return Err(DFAError::NotLiveState(state));
        }
        let cells = num_states
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(num_columns))
            .ok_or(DFAError::TableTooLarge {
                num_states,
                num_columns,
            })?;
        debug!(
            "new dfa: {} symbols, {} states, {} columns, {} finals",
            alphabet.len(),
            num_states,
            num_columns,
            final_states.len()
        );
        Ok(DFA {
            alphabet,
            column_map: vec![0; alphabet.len()],
            num_states,
            num_columns,
            transitions: vec![State::Sink; cells],
            finals: final_states.into_iter().collect(),
            initial: State::Live(1),
            current: State::Live(1),
            alive: true,
            stats: StepStats::default(),
        })
    }

    fn cell(&self, state: usize, column: usize) -> usize {
        state * self.num_columns + column
    }

    fn locate(&mut self, symbol: char) -> Option<usize> {
        let (index, probes) = self.alphabet.probe(symbol);
        self.stats.record_lookup(probes);
        index
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column < self.num_columns {
            Ok(())
        } else {
            Err(DFAError::InvalidColumn {
                column,
                num_columns: self.num_columns,
            })
        }
    }

    /// Maps `symbol` to `column`.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::SymbolNotInAlphabet` or a `DFAError::InvalidColumn`.
    /// The mapping is left untouched in both cases.
    pub fn set_symbol_mapping(&mut self, symbol: char, column: usize) -> Result<()> {
        let index = self
            .locate(symbol)
            .ok_or(DFAError::SymbolNotInAlphabet(symbol))?;
        self.check_column(column)?;
        self.column_map[index] = column;
        Ok(())
    }

    /// Maps `symbols[i]` to `mapping[i]` for every pair.
    ///
    /// A full mapping supplies one column per alphabet symbol. Every pair is
    /// checked before anything is written.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::LengthMismatch` if `mapping` is longer than the
    /// alphabet. Nothing is written.
    ///
    /// Return a `DFAError::SymbolNotInAlphabet` or a `DFAError::InvalidColumn`
    /// for the first bad pair. Nothing is written.
    ///
    /// Return a `DFAError::IncompleteMapping` if some alphabet symbol got no
    /// column, either because fewer pairs were supplied or because `symbols`
    /// repeats a symbol. The supplied pairs *are* written.
    pub fn fill_column_mapping(&mut self, symbols: &[char], mapping: &[usize]) -> Result<()> {
        let alphabet = self.alphabet.len();
        if alphabet < mapping.len() {
            return Err(DFAError::LengthMismatch {
                alphabet,
                mapping: mapping.len(),
            });
        }
        let mut entries = Vec::with_capacity(mapping.len());
        let mut seen = vec![false; alphabet];
        for (&symbol, &column) in symbols.iter().zip(mapping) {
            let index = self
                .locate(symbol)
                .ok_or(DFAError::SymbolNotInAlphabet(symbol))?;
            self.check_column(column)?;
            seen[index] = true;
            entries.push((index, column));
        }
        for &(index, column) in &entries {
            self.column_map[index] = column;
        }
        let covered = seen.iter().filter(|&&s| s).count();
        if covered != alphabet {
            warn!("column mapping covers {} of {} symbols", covered, alphabet);
            return Err(DFAError::IncompleteMapping {
                alphabet,
                mapping: covered,
            });
        }
        Ok(())
    }

    /// Column currently assigned to `symbol`, or `None` if it is not in the
    /// alphabet.
    pub fn column_of(&self, symbol: char) -> Option<usize> {
        self.alphabet.index_of(symbol).map(|index| self.column_map[index])
    }

    /// Returns the state reached from `state` on `column`.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::InvalidState` if `state > num_states`, and a
    /// `DFAError::InvalidColumn` if `column >= num_columns`.
    pub fn get_transition(&self, state: usize, column: usize) -> Result<State> {
        if state > self.num_states {
            return Err(DFAError::InvalidState(state));
        }
        self.check_column(column)?;
        Ok(self.transitions[self.cell(state, column)])
    }

    /// Sets the transition from `state` on `column` to `new_state`. Writing
    /// `0` as `new_state` makes the transition reject.
    ///
    /// Row `0` can be written but is never read: a dead automaton ignores
    /// its input until reset.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::InvalidSourceState`, a
    /// `DFAError::InvalidTargetState` or a `DFAError::InvalidColumn`. The
    /// table is left untouched.
    pub fn set_transition(&mut self, state: usize, column: usize, new_state: usize) -> Result<()> {
        if state > self.num_states {
            return Err(DFAError::InvalidSourceState(state));
        }
        if new_state > self.num_states {
            return Err(DFAError::InvalidTargetState(new_state));
        }
        self.check_column(column)?;
        let cell = self.cell(state, column);
        self.transitions[cell] = State::from(new_state);
        Ok(())
    }

    /// Copies a dense `num_states x num_columns` row-major table. Row `r` of
    /// `table` configures live state `r + 1`; the sink row is not part of it.
    /// A table laid out with the reject row first must drop that row before
    /// being passed here, or every state shifts by one.
    ///
    /// A cell that cannot be written is logged and skipped, the others are
    /// still written.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::TableShape` if `table` has the wrong size. Nothing
    /// is written.
    ///
    /// Return a `DFAError::PartialFill` with the number of skipped cells.
    pub fn fill_transition_table(&mut self, table: &[usize]) -> Result<()> {
        let expected = self.num_states * self.num_columns;
        if table.len() != expected {
            return Err(DFAError::TableShape {
                expected,
                got: table.len(),
            });
        }
        let mut failed = 0;
        for (row, column) in iproduct!(0..self.num_states, 0..self.num_columns) {
            let target = table[row * self.num_columns + column];
            if let Err(err) = self.set_transition(row + 1, column, target) {
                warn!("skipping transition ({},{}) -> {}: {}", row + 1, column, target, err);
                failed += 1;
            }
        }
        if failed > 0 {
            return Err(DFAError::PartialFill { failed });
        }
        Ok(())
    }

    /// Consumes one symbol.
    ///
    /// A symbol outside the alphabet, or a transition to the sink, kills the
    /// automaton. A dead automaton ignores further symbols until `reset`.
    pub fn advance(&mut self, symbol: char) {
        if !self.alive {
            return;
        }
        let next = match self.locate(symbol) {
            Some(index) => {
                let column = self.column_map[index];
                self.transitions[self.cell(self.current.index(), column)]
            }
            None => State::Sink,
        };
        self.stats.steps += 1;
        trace!("{} --{:?}--> {}", self.current, symbol, next);
        self.current = next;
        if next.is_sink() {
            self.alive = false;
            self.stats.rejections += 1;
        }
    }

    /// True if the automaton is alive and in a final state.
    pub fn is_accepting(&self) -> bool {
        self.alive && self.finals.contains(&self.current.index())
    }

    /// Goes back to the initial state and revives the automaton.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.alive = true;
    }

    /// Changes the initial state and resets the automaton onto it.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::NotLiveState` if `state` is `0` or greater than
    /// `num_states`.
    pub fn set_initial_state(&mut self, state: usize) -> Result<()> {
        if state == 0 || state > self.num_states {
            return Err(DFAError::NotLiveState(state));
        }
        self.initial = State::Live(state);
        self.reset();
        Ok(())
    }

    /// Test if an input string is a word of the language defined by the DFA.
    /// The automaton is reset first and left where the input ended.
    pub fn run(&mut self, input: &str) -> bool {
        self.reset();
        for symbol in input.chars() {
            if !self.alive {
                break;
            }
            self.advance(symbol);
        }
        self.is_accepting()
    }

    /// False once the sink state has been entered.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The state the automaton is in.
    pub fn current_state(&self) -> State {
        self.current
    }

    /// The state `reset` goes back to.
    pub fn initial_state(&self) -> State {
        self.initial
    }

    /// The borrowed alphabet.
    pub fn alphabet(&self) -> Alphabet<'a> {
        self.alphabet
    }

    /// Number of live states.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Width of the transition table.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// The accepting states.
    pub fn final_states(&self) -> &HashSet<usize> {
        &self.finals
    }

    /// Work done since creation or the last `clear_stats`.
    pub fn stats(&self) -> StepStats {
        self.stats
    }

    /// Zeroes the work counters.
    pub fn clear_stats(&mut self) {
        self.stats = StepStats::default();
    }
}
