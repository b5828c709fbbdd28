// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides closed intervals over any totally ordered type and sets of such intervals kept in a canonical form: sorted, pairwise disjoint and non-touching. Ranges of timestamps, numbers or versions can be combined, intersected, subtracted or tested for containment without enumerating their values.
//!
//! Operations are exposed through the traits of [gcollections](https://docs.rs/gcollections) (`Intersection`, `Union`, `Difference`, `SymmetricDifference`, `Contains`, `Subset`, ...) and through the operators `&`, `|`, `-` and `^`.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalSet};
//!
//! let s1 = IntervalSet::new(vec![Interval::new(1, 5), Interval::new(10, 15)]);
//! let s2 = IntervalSet::new(vec![Interval::new(3, 12)]);
//!
//! assert_eq!(&s1 ^ &s2, IntervalSet::new(vec![
//!   Interval::new(1, 3), Interval::new(5, 10), Interval::new(12, 15)]));
//! ```
//!
//! For more examples see the [interval module](interval/index.html) and the [interval_set module](interval_set/index.html).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

#[macro_use]
mod macros;
pub mod error;
pub mod interval;
pub mod interval_set;
pub mod ops;

pub use crate::error::IntervalError;
pub use crate::interval::{Interval, Span};
pub use crate::interval_set::IntervalSet;
pub use crate::ops::{Length, ToInterval};
