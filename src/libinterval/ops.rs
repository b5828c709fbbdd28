// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations that are not covered by the `gcollections` vocabulary.

use crate::interval::Interval;
use std::ops::RangeInclusive;

/// Conversion of bound pairs into an interval. Invalid or degenerate pairs become `Interval::Empty`.
pub trait ToInterval<T> {
  fn to_interval(self) -> Interval<T>;
}

impl<T> ToInterval<T> for Interval<T> {
  fn to_interval(self) -> Interval<T> { self }
}

impl<T: Ord> ToInterval<T> for (T, T) {
  fn to_interval(self) -> Interval<T> {
    let (begin, end) = self;
    Interval::new(begin, end)
  }
}

impl<T: Ord> ToInterval<T> for RangeInclusive<T> {
  fn to_interval(self) -> Interval<T> {
    let (begin, end) = self.into_inner();
    Interval::new(begin, end)
  }
}

impl<T> ToInterval<T> for () {
  fn to_interval(self) -> Interval<T> {
    Interval::Empty
  }
}

/// Measure of the space covered by an interval or an interval set.
///
/// The output is the difference type of the bounds (`<T as Sub>::Output`), it must have a zero to measure the empty interval.
pub trait Length {
  type Output;
  fn length(&self) -> Self::Output;
}
