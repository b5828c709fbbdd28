// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical set of closed intervals.
//!
//! An interval set stores its members sorted, pairwise disjoint and non-touching, and never stores the empty interval. For example, building a set from `[5, 8]`, `[1, 3]`, `[3, 4]` and an empty interval gives `{[1, 4], [5, 8]}`.
//!
//! Every set, including the result of the set operations, goes through the same normalization: the input is sorted and swept once from left to right, merging each interval into the previous one when they overlap or touch. The binary operations walk the canonical sequences of both operands in a single pass, so they run in `O(n + m)`.
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalSet};
//!
//! let s1: IntervalSet<i32> = vec![Interval::new(10, 15), Interval::new(1, 5)].into();
//! let s2 = IntervalSet::from(Interval::new(3, 12));
//!
//! assert_eq!(&s1 & &s2, IntervalSet::new(vec![Interval::new(3, 5), Interval::new(10, 12)]));
//! assert_eq!(&s1 | &s2, IntervalSet::from(Interval::new(1, 15)));
//! assert_eq!(&s1 - &s2, IntervalSet::new(vec![Interval::new(1, 3), Interval::new(12, 15)]));
//! assert_eq!(s1.min(), Some(&Interval::new(1, 5)));
//! ```
//!
//! # See also
//! [interval](../interval/index.html)

use crate::error::IntervalError;
use crate::interval::{Interval, Span};
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Difference, Disjoint, Empty, Intersection, IsEmpty, ProperSubset, Subset, SymmetricDifference, Union};
use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::{FromIterator, Peekable};
use std::ops::{BitAnd, BitOr, BitXor, Index, Sub};
use std::slice;
use tracing::{error, trace};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
  intervals: Vec<Interval<T>>
}

impl<T: Ord + Clone> IntervalSet<T> {
  /// Normalizes an arbitrary collection of intervals: unsorted, overlapping and empty intervals are accepted.
  ///
  /// # Panics
  /// If the normalization sweep meets two sorted intervals that are neither ordered nor mergeable, which cannot happen with a lawful `Ord` implementation of `T`. Use `try_new` to get the error instead.
  pub fn new<I>(intervals: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    match IntervalSet::try_new(intervals) {
      Ok(set) => set,
      Err(e) => panic!("{}", e)
    }
  }

  pub fn try_new<I>(intervals: I) -> Result<IntervalSet<T>, IntervalError> where
   I: IntoIterator<Item=Interval<T>>
  {
    let mut sorted: Vec<Interval<T>> = intervals.into_iter().collect();
    trace!(count = sorted.len(), "normalizing interval set");
    sorted.sort();
    let mut res = Vec::with_capacity(sorted.len());
    for interval in sorted.into_iter().skip_while(Interval::is_empty) {
      join_or_push(&mut res, interval)?;
    }
    Ok(IntervalSet { intervals: res })
  }

  /// Smallest interval covering the whole set.
  pub fn span(&self) -> Interval<T> {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) =>
        Interval::from_bounds(front.begin().cloned(), back.end().cloned()),
      _ => Interval::Empty
    }
  }
}

impl<T> IntervalSet<T> {
  /// Number of intervals in the set.
  pub fn len(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
    self.intervals.iter()
  }

  pub fn as_slice(&self) -> &[Interval<T>] {
    &self.intervals
  }

  pub fn get(&self, index: usize) -> Option<&Interval<T>> {
    self.intervals.get(index)
  }

  /// First interval of the set, `None` if the set is empty.
  pub fn min(&self) -> Option<&Interval<T>> {
    self.intervals.first()
  }

  /// Last interval of the set, `None` if the set is empty.
  pub fn max(&self) -> Option<&Interval<T>> {
    self.intervals.last()
  }

  fn spans(&self) -> impl Iterator<Item=&Span<T>> {
    self.intervals.iter().filter_map(Interval::as_span)
  }
}

// Sweep step of the normalization, `x` must not start before the last interval of `res`.
fn join_or_push<T: Ord + Clone>(res: &mut Vec<Interval<T>>, x: Interval<T>) -> Result<(), IntervalError> {
  if x.is_empty() {
    return Ok(());
  }
  match res.last_mut() {
    Some(last) if !last.is_before_than(&x) => {
      // Not before and not starting earlier: `x` overlaps or touches `last`.
      if last.begin() > x.begin() {
        error!("unordered intervals met during normalization");
        return Err(IntervalError::InvariantViolation);
      }
      *last = last.union(&x).map_err(|_| IntervalError::InvariantViolation)?;
    }
    _ => res.push(x)
  }
  Ok(())
}

type Cursor<'a, T> = Peekable<slice::Iter<'a, Interval<T>>>;

// Consumes the interval with the lowest lower bound.
fn advance_lower<'a, T: Ord>(a: &mut Cursor<'a, T>, b: &mut Cursor<'a, T>) -> Option<&'a Interval<T>> {
  match (a.peek().copied(), b.peek().copied()) {
    (Some(i), Some(j)) => if i <= j { a.next() } else { b.next() },
    _ => None
  }
}

// Consumes the interval with the lowest upper bound, both of them if they end together.
fn advance_lub<'a, T: Ord>(a: &mut Cursor<'a, T>, b: &mut Cursor<'a, T>) {
  if let (Some(i), Some(j)) = (a.peek().copied(), b.peek().copied()) {
    match i.end().cmp(&j.end()) {
      Ordering::Less => { a.next(); }
      Ordering::Greater => { b.next(); }
      Ordering::Equal => { a.next(); b.next(); }
    }
  }
}

impl<T> Default for IntervalSet<T> {
  fn default() -> IntervalSet<T> {
    IntervalSet { intervals: vec![] }
  }
}

impl<T: Ord + Clone> FromIterator<Interval<T>> for IntervalSet<T> {
  fn from_iter<I>(iterable: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    IntervalSet::new(iterable)
  }
}

impl<T: Ord + Clone> From<Vec<Interval<T>>> for IntervalSet<T> {
  fn from(intervals: Vec<Interval<T>>) -> IntervalSet<T> {
    IntervalSet::new(intervals)
  }
}

impl<T: Ord + Clone> From<Interval<T>> for IntervalSet<T> {
  fn from(interval: Interval<T>) -> IntervalSet<T> {
    IntervalSet::new(Some(interval))
  }
}

impl<T> IntoIterator for IntervalSet<T> {
  type Item = Interval<T>;
  type IntoIter = ::std::vec::IntoIter<Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
  type Item = &'a Interval<T>;
  type IntoIter = slice::Iter<'a, Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.iter()
  }
}

impl<T> Index<usize> for IntervalSet<T> {
  type Output = Interval<T>;

  fn index(&self, index: usize) -> &Interval<T> {
    &self.intervals[index]
  }
}

impl<T> Collection for IntervalSet<T> {
  type Item = Interval<T>;
}

impl<T> Empty for IntervalSet<T> {
  fn empty() -> IntervalSet<T> {
    IntervalSet::default()
  }
}

impl<T> IsEmpty for IntervalSet<T> {
  fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }
}

/// An interval belongs to the set if one member encloses it entirely. The empty interval belongs to no set.
impl<T: Ord> Contains for IntervalSet<T> {
  fn contains(&self, value: &Interval<T>) -> bool {
    if value.is_empty() {
      return false;
    }
    // Members are disjoint, only the last one starting before `value` can enclose it.
    let candidates = self.intervals.partition_point(|i| i.begin() <= value.begin());
    candidates > 0 && self.intervals[candidates - 1].encloses(value)
  }
}

impl<T: Ord + Clone> Union for IntervalSet<T> {
  type Output = IntervalSet<T>;

  fn union(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    if self.is_empty() {
      return rhs.clone();
    }
    if rhs.is_empty() {
      return self.clone();
    }
    trace!(lhs = self.len(), rhs = rhs.len(), "interval set union");
    let a = &mut self.intervals.iter().peekable();
    let b = &mut rhs.intervals.iter().peekable();
    let mut res = Vec::with_capacity(self.len() + rhs.len());
    while let Some(lower) = advance_lower(a, b) {
      push_canonical(&mut res, lower.clone());
    }
    for rest in a.chain(b) {
      push_canonical(&mut res, rest.clone());
    }
    IntervalSet::new(res)
  }
}

// The merged stream is sorted by construction, a failure here is a bug in the caller.
fn push_canonical<T: Ord + Clone>(res: &mut Vec<Interval<T>>, x: Interval<T>) {
  if let Err(e) = join_or_push(res, x) {
    panic!("{}", e);
  }
}

impl<T: Ord + Clone> Intersection for IntervalSet<T> {
  type Output = IntervalSet<T>;

  fn intersection(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    if self.is_empty() || rhs.is_empty() {
      return IntervalSet::empty();
    }
    trace!(lhs = self.len(), rhs = rhs.len(), "interval set intersection");
    let a = &mut self.intervals.iter().peekable();
    let b = &mut rhs.intervals.iter().peekable();
    let mut res = vec![];
    while let (Some(i), Some(j)) = (a.peek().copied(), b.peek().copied()) {
      if i.is_before_than(j) {
        a.next();
      }
      else if j.is_before_than(i) {
        b.next();
      }
      else {
        let joint = i.intersection(j);
        if !joint.is_empty() {
          res.push(joint);
        }
        advance_lub(a, b);
      }
    }
    IntervalSet::new(res)
  }
}

impl<T: Ord + Clone> Difference for IntervalSet<T> {
  type Output = IntervalSet<T>;

  fn difference(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    if self.is_empty() || rhs.is_empty() {
      return self.clone();
    }
    trace!(lhs = self.len(), rhs = rhs.len(), "interval set difference");
    let mut a = self.spans();
    let mut b = rhs.spans().peekable();
    let mut res = Vec::with_capacity(self.len());
    let bounds = |span: &Span<T>| (span.begin().clone(), span.end().clone());

    // `pending` is the part `[cursor, end]` of the current interval of `self` not emitted yet.
    // It is emitted only once no interval of `rhs` can erode it anymore.
    let mut pending = a.next().map(bounds);
    while let Some((cursor, end)) = pending.take() {
      let sub = match b.peek() {
        Some(sub) => *sub,
        None => {
          pending = Some((cursor, end));
          break;
        }
      };
      if sub.end() <= &cursor {
        b.next();
        pending = Some((cursor, end));
      }
      else if &end <= sub.begin() {
        res.push(Interval::new(cursor, end));
        pending = a.next().map(bounds);
      }
      else {
        if &cursor < sub.begin() {
          res.push(Interval::new(cursor, sub.begin().clone()));
        }
        if sub.end() < &end {
          pending = Some((sub.end().clone(), end));
          b.next();
        }
        else {
          pending = a.next().map(bounds);
        }
      }
    }
    if let Some((cursor, end)) = pending {
      res.push(Interval::new(cursor, end));
    }
    res.extend(a.map(|span| Interval::Span(span.clone())));
    IntervalSet::new(res)
  }
}

impl<T: Ord + Clone> SymmetricDifference for IntervalSet<T> {
  type Output = IntervalSet<T>;

  fn symmetric_difference(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    self.union(rhs).difference(&self.intersection(rhs))
  }
}

/// `self ⊆ other` as sets, that is `other ∩ self == self`.
impl<T: Ord + Clone> Subset for IntervalSet<T> {
  fn is_subset(&self, other: &IntervalSet<T>) -> bool {
    &other.intersection(self) == self
  }
}

impl<T: Ord + Clone> ProperSubset for IntervalSet<T> {
  fn is_proper_subset(&self, other: &IntervalSet<T>) -> bool {
    self.is_subset(other) && self != other
  }
}

/// No member of `self` overlaps a member of `other`, touching members are allowed.
impl<T: Ord + Clone> Disjoint for IntervalSet<T> {
  fn is_disjoint(&self, other: &IntervalSet<T>) -> bool {
    self.intersection(other).is_empty()
  }
}

impl<T> Length for IntervalSet<T> where
 T: Clone + Sub,
 <T as Sub>::Output: Zero
{
  type Output = <T as Sub>::Output;

  fn length(&self) -> Self::Output {
    self.intervals.iter()
      .fold(Zero::zero(), |acc: Self::Output, i| acc + i.length())
  }
}

macro_rules! set_op_impl
{
  ( $( $imp:ident, $method:ident, $op:ident );* ) =>
  {$(
    impl<'a, 'b, T: Ord + Clone> $imp<&'b IntervalSet<T>> for &'a IntervalSet<T> {
      type Output = IntervalSet<T>;

      fn $method(self, other: &'b IntervalSet<T>) -> IntervalSet<T> {
        self.$op(other)
      }
    }

    forward_all_binop!(impl<T: +Ord +Clone> $imp for IntervalSet<T>, $method);
  )*}
}

set_op_impl! {
  BitAnd, bitand, intersection;
  BitOr, bitor, union;
  Sub, sub, difference;
  BitXor, bitxor, symmetric_difference
}
