// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]

//! Table-driven deterministic finite automaton engine.
//!
//! A scanner builds a [`DFA`] over a sorted alphabet, configures its column
//! mapping and transition table, then feeds it one symbol at a time with
//! [`DFA::advance`], checks [`DFA::is_alive`] to know whether the current
//! token can still grow, asks [`DFA::is_accepting`] at a token boundary and
//! calls [`DFA::reset`] before the next token.

/// sorted alphabet and symbol lookup
pub mod alphabet;
/// dfa api
pub mod dfa;
/// errors
pub mod error;

pub use alphabet::Alphabet;
pub use dfa::builder::{DFABuilder, DFABuilding};
pub use dfa::core::DFA;
pub use dfa::state::State;
pub use dfa::stats::StepStats;
pub use error::{DFAError, Result};
