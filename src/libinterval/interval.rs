// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed interval over any totally ordered type.
//!
//! An interval is either `Interval::Empty` or a span `[begin, end]` with `begin < end`. The only way to obtain a span is through `Interval::new` (or a conversion built on it), which maps every degenerate pair (`end <= begin`) to `Interval::Empty`.
//!
//! The empty interval is ordered before every span and never takes part in a union. Two spans that merely *touch* (`a.end == b.begin`) do not intersect but can be unified.
//!
//! Operations are provided through the traits of `gcollections::ops`, and `&` / `|` are available as operators:
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalError};
//!
//! let a = Interval::new(1, 5);
//! let b = Interval::new(3, 8);
//! assert_eq!(&a & &b, Interval::new(3, 5));
//! assert_eq!(&a | &b, Ok(Interval::new(1, 8)));
//! assert_eq!(a | Interval::new(6, 7), Err(IntervalError::InvalidUnion));
//! ```

use crate::error::IntervalError;
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Disjoint, Empty, Intersection, IsEmpty, Overlap, ProperSubset, Subset, Union};
use num_traits::Zero;
use std::cmp::{max, min, Ordering};
use std::ops::{BitAnd, BitOr, RangeInclusive, Sub};

/// Bounds of a non-empty interval, `begin < end` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span<T> {
  begin: T,
  end: T
}

impl<T> Span<T> {
  pub fn begin(&self) -> &T {
    &self.begin
  }

  pub fn end(&self) -> &T {
    &self.end
  }

  pub fn into_bounds(self) -> (T, T) {
    (self.begin, self.end)
  }
}

impl<T: Ord> Span<T> {
  fn is_within(&self, other: &Span<T>) -> bool {
    self.begin >= other.begin && self.end <= other.end
  }

  // Overlapping or touching.
  fn is_joinable(&self, other: &Span<T>) -> bool {
    self.end >= other.begin && other.end >= self.begin
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Interval<T> {
  Empty,
  Span(Span<T>)
}

impl<T: Ord> Interval<T> {
  /// Builds `[begin, end]`, or `Interval::Empty` when `end <= begin`.
  pub fn new(begin: T, end: T) -> Interval<T> {
    if end <= begin {
      Interval::Empty
    }
    else {
      Interval::Span(Span { begin, end })
    }
  }

  /// Same as `new`, a missing endpoint gives the empty interval.
  pub fn from_bounds(begin: Option<T>, end: Option<T>) -> Interval<T> {
    match (begin, end) {
      (Some(begin), Some(end)) => Interval::new(begin, end),
      _ => Interval::Empty
    }
  }

  /// `true` if `self` is empty, or if `other` is empty, or if `self` ends strictly before `other` begins.
  pub fn is_before_than(&self, other: &Interval<T>) -> bool {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) => a.end < b.begin,
      _ => true
    }
  }

  /// `true` only if both intervals are spans and `self` begins strictly after `other` ends.
  /// Unlike `is_before_than`, an empty operand gives `false`.
  pub fn is_after_than(&self, other: &Interval<T>) -> bool {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) => b.end < a.begin,
      _ => false
    }
  }

  /// `other ⊆ self`, see `Subset`.
  pub fn encloses(&self, other: &Interval<T>) -> bool {
    other.is_subset(self)
  }
}

impl<T> Interval<T> {
  pub fn is_empty(&self) -> bool {
    match self {
      Interval::Empty => true,
      Interval::Span(_) => false
    }
  }

  pub fn is_span(&self) -> bool {
    !self.is_empty()
  }

  pub fn as_span(&self) -> Option<&Span<T>> {
    match self {
      Interval::Empty => None,
      Interval::Span(span) => Some(span)
    }
  }

  pub fn begin(&self) -> Option<&T> {
    self.as_span().map(Span::begin)
  }

  pub fn end(&self) -> Option<&T> {
    self.as_span().map(Span::end)
  }

  pub fn bounds(&self) -> Option<(&T, &T)> {
    self.as_span().map(|span| (&span.begin, &span.end))
  }

  pub fn into_bounds(self) -> Option<(T, T)> {
    match self {
      Interval::Empty => None,
      Interval::Span(span) => Some(span.into_bounds())
    }
  }
}

impl<T> Default for Interval<T> {
  fn default() -> Interval<T> {
    Interval::Empty
  }
}

impl<T: Ord> From<(T, T)> for Interval<T> {
  fn from(bounds: (T, T)) -> Interval<T> {
    bounds.to_interval()
  }
}

impl<T: Ord> From<RangeInclusive<T>> for Interval<T> {
  fn from(range: RangeInclusive<T>) -> Interval<T> {
    range.to_interval()
  }
}

// The empty interval sorts first, spans are compared on `(begin, end)`.
impl<T: Ord> Ord for Interval<T> {
  fn cmp(&self, other: &Interval<T>) -> Ordering {
    match (self, other) {
      (Interval::Empty, Interval::Empty) => Ordering::Equal,
      (Interval::Empty, Interval::Span(_)) => Ordering::Less,
      (Interval::Span(_), Interval::Empty) => Ordering::Greater,
      (Interval::Span(a), Interval::Span(b)) =>
        a.begin.cmp(&b.begin).then_with(|| a.end.cmp(&b.end))
    }
  }
}

impl<T: Ord> PartialOrd for Interval<T> {
  fn partial_cmp(&self, other: &Interval<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> Collection for Interval<T> {
  type Item = T;
}

impl<T> Empty for Interval<T> {
  fn empty() -> Interval<T> {
    Interval::Empty
  }
}

impl<T> IsEmpty for Interval<T> {
  fn is_empty(&self) -> bool {
    matches!(self, Interval::Empty)
  }
}

/// Membership of a single value, bounds included.
impl<T: Ord> Contains for Interval<T> {
  fn contains(&self, value: &T) -> bool {
    match self {
      Interval::Empty => false,
      Interval::Span(span) => &span.begin <= value && value <= &span.end
    }
  }
}

impl<T: Ord + Clone> Intersection for Interval<T> {
  type Output = Interval<T>;

  /// Touching spans have no intersection. A span nested inside the other is returned unchanged.
  fn intersection(&self, other: &Interval<T>) -> Interval<T> {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) => {
        if a.end <= b.begin || b.end <= a.begin {
          Interval::Empty
        }
        else if a.is_within(b) {
          self.clone()
        }
        else if b.is_within(a) {
          other.clone()
        }
        else {
          Interval::new(
            max(&a.begin, &b.begin).clone(),
            min(&a.end, &b.end).clone())
        }
      }
      _ => Interval::Empty
    }
  }
}

impl<T: Ord + Clone> Union for Interval<T> {
  type Output = Result<Interval<T>, IntervalError>;

  /// Hull of two overlapping or touching spans. Fails with `IntervalError::InvalidUnion` if a gap separates them or if one is empty.
  fn union(&self, other: &Interval<T>) -> Result<Interval<T>, IntervalError> {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) if a.is_joinable(b) => {
        if a.is_within(b) {
          Ok(other.clone())
        }
        else if b.is_within(a) {
          Ok(self.clone())
        }
        else {
          Ok(Interval::new(
            min(&a.begin, &b.begin).clone(),
            max(&a.end, &b.end).clone()))
        }
      }
      _ => Err(IntervalError::InvalidUnion)
    }
  }
}

/// `self ⊆ other`. The empty interval is a subset of nothing and nothing contains it, including another empty interval.
impl<T: Ord> Subset for Interval<T> {
  fn is_subset(&self, other: &Interval<T>) -> bool {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) => a.is_within(b),
      _ => false
    }
  }
}

impl<T: Ord> ProperSubset for Interval<T> {
  fn is_proper_subset(&self, other: &Interval<T>) -> bool {
    self.is_subset(other) && self != other
  }
}

/// The intersection is non-empty.
impl<T: Ord> Overlap for Interval<T> {
  fn overlap(&self, other: &Interval<T>) -> bool {
    match (self, other) {
      (Interval::Span(a), Interval::Span(b)) => a.end > b.begin && b.end > a.begin,
      _ => false
    }
  }
}

/// A strict gap separates the two intervals. Touching spans are neither disjoint nor overlapping.
impl<T: Ord> Disjoint for Interval<T> {
  fn is_disjoint(&self, other: &Interval<T>) -> bool {
    self.is_before_than(other) || self.is_after_than(other)
  }
}

impl<T> Length for Interval<T> where
 T: Clone + Sub,
 <T as Sub>::Output: Zero
{
  type Output = <T as Sub>::Output;

  fn length(&self) -> Self::Output {
    match self {
      Interval::Empty => Zero::zero(),
      Interval::Span(span) => span.end.clone() - span.begin.clone()
    }
  }
}

impl<'a, 'b, T: Ord + Clone> BitAnd<&'b Interval<T>> for &'a Interval<T> {
  type Output = Interval<T>;

  fn bitand(self, other: &'b Interval<T>) -> Interval<T> {
    self.intersection(other)
  }
}

impl<'a, 'b, T: Ord + Clone> BitOr<&'b Interval<T>> for &'a Interval<T> {
  type Output = Result<Interval<T>, IntervalError>;

  fn bitor(self, other: &'b Interval<T>) -> Result<Interval<T>, IntervalError> {
    self.union(other)
  }
}

forward_all_binop!(impl<T: +Ord +Clone> BitAnd for Interval<T>, bitand);
forward_all_binop!(impl<T: +Ord +Clone> BitOr for Interval<T>, bitor -> Result<Interval<T>, IntervalError>);

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use quickcheck_macros::quickcheck;

  const empty: Interval<i32> = Interval::Empty;
  const i0_10: Interval<i32> = Interval::Span(Span { begin: 0, end: 10 });
  const i0_5: Interval<i32> = Interval::Span(Span { begin: 0, end: 5 });
  const i5_10: Interval<i32> = Interval::Span(Span { begin: 5, end: 10 });
  const i2_8: Interval<i32> = Interval::Span(Span { begin: 2, end: 8 });
  const i3_7: Interval<i32> = Interval::Span(Span { begin: 3, end: 7 });
  const i6_20: Interval<i32> = Interval::Span(Span { begin: 6, end: 20 });
  const i20_30: Interval<i32> = Interval::Span(Span { begin: 20, end: 30 });
  const im30_m20: Interval<i32> = Interval::Span(Span { begin: -30, end: -20 });

  #[test]
  fn new_normalizes_degenerate_bounds() {
    assert_eq!(Interval::new(0, 10), i0_10);
    assert_eq!(Interval::new(10, 0), empty);
    assert_eq!(Interval::new(5, 5), empty);
    assert_eq!(Interval::from_bounds(Some(0), Some(10)), i0_10);
    assert_eq!(Interval::from_bounds(None, Some(10)), empty);
    assert_eq!(Interval::from_bounds(Some(0), None), empty);
    assert_eq!(Interval::<i32>::from_bounds(None, None), empty);
    assert!(empty.is_empty());
    assert!(!i0_10.is_empty());
    assert!(i0_10.is_span());
    assert_eq!(Interval::<i32>::default(), empty);
    assert_eq!(<Interval<i32> as Empty>::empty(), empty);
  }

  #[test]
  fn to_interval_test() {
    assert_eq!(i0_10.to_interval(), i0_10);
    assert_eq!((0, 10).to_interval(), i0_10);
    assert_eq!((10, 0).to_interval(), empty);
    assert_eq!((0..=10).to_interval(), i0_10);
    assert_eq!(ToInterval::<i32>::to_interval(()), empty);
    assert_eq!(Interval::from((0, 5)), i0_5);
    assert_eq!(Interval::from(5..=10), i5_10);
  }

  #[test]
  fn accessors() {
    assert_eq!(i2_8.begin(), Some(&2));
    assert_eq!(i2_8.end(), Some(&8));
    assert_eq!(i2_8.bounds(), Some((&2, &8)));
    assert_eq!(i2_8.into_bounds(), Some((2, 8)));
    assert_eq!(empty.begin(), None);
    assert_eq!(empty.end(), None);
    assert_eq!(empty.into_bounds(), None);
    assert_eq!(i2_8.as_span().map(|s| *s.begin()), Some(2));
  }

  #[test]
  fn ordering() {
    assert!(empty < im30_m20);
    assert!(empty < i0_10);
    assert!(i0_5 < i0_10);
    assert!(i0_10 < i2_8);
    assert!(i20_30 > i6_20);
    assert_eq!(empty.cmp(&empty), Ordering::Equal);

    let mut intervals = vec![i20_30, i0_10, empty, im30_m20, i0_5, empty];
    intervals.sort();
    assert_eq!(intervals, vec![empty, empty, im30_m20, i0_5, i0_10, i20_30]);
  }

  #[test]
  fn before_after_asymmetry() {
    let cases = vec![
      (empty, empty, true, false),
      (empty, i0_10, true, false),
      (i0_10, empty, true, false),
      (i0_5, i6_20, true, false),
      (i6_20, i0_5, false, true),
      // touching is neither before nor after
      (i0_5, i5_10, false, false),
      (i5_10, i0_5, false, false),
      (i0_10, i2_8, false, false),
    ];
    for (a, b, before, after) in cases {
      assert_eq!(a.is_before_than(&b), before, "{:?} before {:?}", a, b);
      assert_eq!(a.is_after_than(&b), after, "{:?} after {:?}", a, b);
    }
  }

  #[test]
  fn intersection_test() {
    let sym_cases = vec![
      (empty, empty, empty),
      (empty, i0_10, empty),
      (i0_10, i0_10, i0_10),
      (i0_5, i5_10, empty),
      (i0_5, i20_30, empty),
      (i0_10, i2_8, i2_8),
      (i0_10, i6_20, Interval::new(6, 10)),
      (i2_8, i5_10, Interval::new(5, 8)),
      (im30_m20, i0_10, empty),
    ];
    for (a, b, expected) in sym_cases {
      assert_eq!(a.intersection(&b), expected, "{:?} & {:?}", a, b);
      assert_eq!(b.intersection(&a), expected, "{:?} & {:?}", b, a);
      assert_eq!(&a & &b, expected);
      assert_eq!(a & b, expected);
    }
  }

  #[test]
  fn union_test() {
    let sym_cases = vec![
      (i0_10, i0_10, Ok(i0_10)),
      (i0_10, i2_8, Ok(i0_10)),
      (i0_5, i5_10, Ok(i0_10)),
      (i0_5, i3_7, Ok(Interval::new(0, 7))),
      (i2_8, i6_20, Ok(Interval::new(2, 20))),
      (i0_5, i6_20, Err(IntervalError::InvalidUnion)),
      (im30_m20, i20_30, Err(IntervalError::InvalidUnion)),
      (empty, i0_10, Err(IntervalError::InvalidUnion)),
      (empty, empty, Err(IntervalError::InvalidUnion)),
    ];
    for (a, b, expected) in sym_cases {
      assert_eq!(a.union(&b), expected, "{:?} | {:?}", a, b);
      assert_eq!(b.union(&a), expected, "{:?} | {:?}", b, a);
      assert_eq!(&a | &b, expected);
    }
  }

  #[test]
  fn equal_bounds_behave_as_empty() {
    let degenerate = Interval::new(5, 5);
    for i in vec![empty, i0_10, i0_5, i5_10] {
      assert_eq!(degenerate.intersection(&i), empty);
      assert_eq!(degenerate.union(&i), Err(IntervalError::InvalidUnion));
    }
  }

  #[test]
  fn subset_test() {
    let cases = vec![
      (i2_8, i0_10, true),
      (i0_10, i0_10, true),
      (i0_10, i2_8, false),
      (i0_5, i5_10, false),
      (empty, i0_10, false),
      (i0_10, empty, false),
      (empty, empty, false),
    ];
    for (a, b, expected) in cases {
      assert_eq!(a.is_subset(&b), expected, "{:?} ⊆ {:?}", a, b);
      assert_eq!(b.encloses(&a), expected, "{:?} encloses {:?}", b, a);
    }
    assert!(i2_8.is_proper_subset(&i0_10));
    assert!(!i0_10.is_proper_subset(&i0_10));
  }

  #[test]
  fn overlap_and_disjoint() {
    assert!(i0_10.overlap(&i2_8));
    assert!(!i0_5.overlap(&i5_10));
    assert!(!i0_5.is_disjoint(&i5_10));
    assert!(i0_5.is_disjoint(&i6_20));
    assert!(i6_20.is_disjoint(&i0_5));
    assert!(!empty.overlap(&i0_10));
    assert!(empty.is_disjoint(&i0_10));
  }

  #[test]
  fn contains_value() {
    assert!(i0_10.contains(&0));
    assert!(i0_10.contains(&5));
    assert!(i0_10.contains(&10));
    assert!(!i0_10.contains(&11));
    assert!(!i0_10.contains(&-1));
    assert!(!empty.contains(&0));
  }

  #[test]
  fn length_test() {
    assert_eq!(i0_10.length(), 10);
    assert_eq!(im30_m20.length(), 10);
    assert_eq!(i3_7.length(), 4);
    assert_eq!(empty.length(), 0);
  }

  #[quickcheck]
  fn qc_intersection_commutative(a: (i8, i8), b: (i8, i8)) -> bool {
    let (a, b) = (a.to_interval(), b.to_interval());
    a.intersection(&b) == b.intersection(&a)
  }

  #[quickcheck]
  fn qc_intersection_idempotent(a: (i8, i8)) -> bool {
    let a = a.to_interval();
    a.intersection(&a) == a
  }

  #[quickcheck]
  fn qc_union_commutative(a: (i8, i8), b: (i8, i8)) -> bool {
    let (a, b) = (a.to_interval(), b.to_interval());
    a.union(&b) == b.union(&a)
  }

  #[quickcheck]
  fn qc_union_fails_on_gap(a: (i8, i8), b: (i8, i8)) -> bool {
    let (a, b) = (a.to_interval(), b.to_interval());
    let gap = a.is_empty() || b.is_empty() || a.is_disjoint(&b);
    gap == a.union(&b).is_err()
  }

  #[quickcheck]
  fn qc_operands_enclosed_by_union(a: (i8, i8), b: (i8, i8)) -> bool {
    let (a, b) = (a.to_interval(), b.to_interval());
    match a.union(&b) {
      Ok(hull) => hull.encloses(&a) && hull.encloses(&b),
      Err(_) => true
    }
  }

  #[quickcheck]
  fn qc_empty_is_before_everything(a: (i8, i8)) -> bool {
    let a = a.to_interval();
    let nothing: Interval<i8> = Interval::Empty;
    nothing.is_before_than(&a) && !nothing.is_after_than(&a) && !(a < nothing)
  }
}
