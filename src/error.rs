// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::result;

use thiserror::Error;

/// The `DFAError` type.
///
/// Every variant is a configuration error reported by the call that detected
/// it. None of them is raised while the automaton consumes input: an unknown
/// symbol during `advance` only kills the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DFAError {
    /// The symbol does not belong to the alphabet.
    #[error("symbol {0:?} is not in the alphabet")]
    SymbolNotInAlphabet(char),
    /// The mapping vector is longer than the alphabet. Nothing was written.
    #[error("mapping of length {mapping} does not fit an alphabet of length {alphabet}")]
    LengthMismatch {
        /// Length of the engine alphabet.
        alphabet: usize,
        /// Length of the supplied mapping vector.
        mapping: usize,
    },
    /// The mapping vector is shorter than the alphabet. The supplied prefix
    /// was written, the remaining symbols kept their previous column.
    #[error("mapping of length {mapping} left part of an alphabet of length {alphabet} unchanged")]
    IncompleteMapping {
        /// Length of the engine alphabet.
        alphabet: usize,
        /// Number of entries actually applied.
        mapping: usize,
    },
    /// The state is outside `0..=num_states`.
    #[error("invalid state {0}")]
    InvalidState(usize),
    /// The source state of a transition is outside `0..=num_states`.
    #[error("invalid source state {0}")]
    InvalidSourceState(usize),
    /// The target state of a transition is outside `0..=num_states`.
    #[error("invalid target state {0}")]
    InvalidTargetState(usize),
    /// The column is outside `0..num_columns`.
    #[error("column {column} out of range (table has {num_columns} columns)")]
    InvalidColumn {
        /// Offending column.
        column: usize,
        /// Width of the transition table.
        num_columns: usize,
    },
    /// A final or initial state is not a live state (`1..=num_states`).
    #[error("state {0} is not a live state")]
    NotLiveState(usize),
    /// The transition from `state` on `column` is defined twice in a builder.
    #[error("duplicated transition ({state},{column})")]
    DuplicatedTransition {
        /// Source state.
        state: usize,
        /// Column of the transition.
        column: usize,
    },
    /// The alphabet is not strictly increasing at `index`.
    #[error("alphabet is not sorted (or has a duplicate) at index {index}")]
    UnsortedAlphabet {
        /// First index whose symbol is not greater than its predecessor.
        index: usize,
    },
    /// `(num_states + 1) * num_columns` does not fit in a `usize`.
    #[error("a table of {num_states} states and {num_columns} columns is too large")]
    TableTooLarge {
        /// Requested number of live states.
        num_states: usize,
        /// Requested number of columns.
        num_columns: usize,
    },
    /// A transition table needs at least one column.
    #[error("the transition table needs at least one column")]
    NoColumns,
    /// An automaton needs at least one live state.
    #[error("the automaton needs at least one live state")]
    NoStates,
    /// A dense source table has the wrong number of cells.
    #[error("dense table has {got} cells, expected {expected}")]
    TableShape {
        /// `num_states * num_columns`.
        expected: usize,
        /// Length of the supplied table.
        got: usize,
    },
    /// Some cells of a bulk table fill were rejected. The others were written.
    #[error("{failed} transition cells were rejected")]
    PartialFill {
        /// Number of rejected cells.
        failed: usize,
    },
}

/// Alias for result::Result<T,DFAError>.
pub type Result<T> = result::Result<T, DFAError>;
