// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

/// Work counters kept by an automaton while it runs.
///
/// They are bookkeeping only: reading or clearing them never changes what the
/// automaton recognizes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    /// Calls to `advance` made while alive.
    pub steps: u64,
    /// Symbol lookups in the alphabet (steps and mapping calls).
    pub lookups: u64,
    /// Probes made by the binary searches behind those lookups.
    pub comparisons: u64,
    /// Steps that sent the automaton to the sink state.
    pub rejections: u64,
}

impl StepStats {
    pub(crate) fn record_lookup(&mut self, probes: u64) {
        self.lookups += 1;
        self.comparisons += probes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup() {
        let mut stats = StepStats::default();
        stats.record_lookup(3);
        stats.record_lookup(1);
        assert_eq!(stats.lookups, 2);
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.rejections, 0);
    }
}
