// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;

use crate::error::{DFAError, Result};

/// Returns the index of `target` in `list`, or `None` if it is absent.
///
/// `list` must be sorted in increasing order. On an unsorted list the result
/// is unspecified but always in bounds.
///
/// # Examples
///
/// ```
/// use table_dfa::alphabet::binary_search_index;
///
/// let digits = ['0', '1', '2', '3'];
/// assert_eq!(binary_search_index(&digits, '2'), Some(2));
/// assert_eq!(binary_search_index(&digits, 'x'), None);
/// assert_eq!(binary_search_index(&[], 'x'), None);
/// ```
pub fn binary_search_index(list: &[char], target: char) -> Option<usize> {
    probe(list, target).0
}

// Same as `binary_search_index` but also reports the number of probes.
pub(crate) fn probe(list: &[char], target: char) -> (Option<usize>, u64) {
    // half-open window [left, right)
    let mut left = 0;
    let mut right = list.len();
    let mut probes = 0;
    while left < right {
        let middle = left + (right - left) / 2;
        probes += 1;
        match list[middle].cmp(&target) {
            Ordering::Less => left = middle + 1,
            Ordering::Greater => right = middle,
            Ordering::Equal => return (Some(middle), probes),
        }
    }
    (None, probes)
}

/// A borrowed, validated view over a sorted set of symbols.
///
/// The automaton never owns its alphabet: several engines built over the same
/// input language share one symbol slice. The slice is checked once, on
/// construction, to be strictly increasing so that every lookup afterwards can
/// use a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<'a> {
    symbols: &'a [char],
}

impl<'a> Alphabet<'a> {
    /// Wraps `symbols` after checking that it is strictly increasing.
    ///
    /// # Errors
    ///
    /// Return a `DFAError::UnsortedAlphabet` holding the first index whose
    /// symbol is not greater than the previous one.
    pub fn new(symbols: &'a [char]) -> Result<Alphabet<'a>> {
        match symbols.windows(2).position(|pair| pair[0] >= pair[1]) {
            Some(index) => Err(DFAError::UnsortedAlphabet { index: index + 1 }),
            None => Ok(Alphabet { symbols }),
        }
    }

    /// Index of `symbol` in the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        binary_search_index(self.symbols, symbol)
    }

    pub(crate) fn probe(&self, symbol: char) -> (Option<usize>, u64) {
        probe(self.symbols, symbol)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet has no symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The underlying symbols, in increasing order.
    pub fn symbols(&self) -> &'a [char] {
        self.symbols
    }
}
