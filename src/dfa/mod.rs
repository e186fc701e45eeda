// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

/// dfa builder api
pub mod builder;
/// dfa core api
pub mod core;
/// dfa states
pub mod state;
/// dfa work counters
pub mod stats;
