// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// A state of the automaton.
///
/// Index `0` is reserved for the rejecting state, `Sink`. Live states are
/// numbered from `1`. A fresh transition table is filled with `Sink`, so every
/// transition that is never configured rejects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The rejecting state. Once entered it is never left until a reset.
    #[default]
    Sink,
    /// A live state, always `>= 1`.
    Live(usize),
}

impl State {
    /// Maps a numeric state to a `State`: `0` is `Sink`, anything else is live.
    pub fn from_index(index: usize) -> State {
        match index {
            0 => State::Sink,
            n => State::Live(n),
        }
    }

    /// Numeric form of the state, `0` for `Sink`.
    pub fn index(self) -> usize {
        match self {
            State::Sink => 0,
            State::Live(n) => n,
        }
    }

    /// True for `Sink`.
    pub fn is_sink(self) -> bool {
        self == State::Sink
    }
}

impl From<usize> for State {
    fn from(index: usize) -> State {
        State::from_index(index)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            State::Sink => write!(f, "sink"),
            State::Live(n) => write!(f, "q{}", n),
        }
    }
}
