// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised by the interval algebra.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
  /// Pairwise union of two intervals separated by a gap, or involving the empty interval.
  /// Such ranges must be combined with `IntervalSet` instead.
  #[error("cannot unify non-overlapping intervals (use an interval set for that)")]
  InvalidUnion,
  /// Two consecutive sorted intervals were neither ordered nor mergeable during normalization.
  #[error("internal error: sorted intervals are neither disjoint nor mergeable")]
  InvariantViolation,
}
