// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Capability shared by every interval representation.
//!
//! An interval is described by a start and an end bound over a totally ordered domain, each of them independently inclusive or exclusive. The algebra of [ops](../ops/index.html) and [interval_set](../interval_set/index.html) only relies on this trait, so any type exposing its bounds and able to rebuild itself with other bounds can be intersected, merged or subtracted.
//!
//! # Examples
//!
//! ```rust
//! use intervals::interval::{Interval, Notation};
//! use intervals::NumericInterval;
//!
//! let i = NumericInterval::closed_open(0, 3);
//! assert_eq!(*i.start(), 0);
//! assert!(!i.end_inclusive());
//! assert_eq!(format!("{}", Notation(&i)), "[0,3)");
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

/// An immutable range of ordered values with independent inclusive/exclusive bounds.
///
/// No invariant is required between `start` and `end`: an interval where `start > end`, or where `start == end` with one exclusive bound, is simply empty.
pub trait Interval : Clone
{
  type Bound: Ord + Clone;

  fn start(&self) -> &Self::Bound;
  fn start_inclusive(&self) -> bool;
  fn end(&self) -> &Self::Bound;
  fn end_inclusive(&self) -> bool;

  /// Builds an interval of the same representation as `self` with the given bounds.
  fn with_bounds(&self, start: Self::Bound, start_inclusive: bool,
    end: Self::Bound, end_inclusive: bool) -> Self;
}

/// Structural equality of two intervals, regardless of their concrete representation.
///
/// Both bound values and both inclusivity flags must match. Two empty intervals with different bounds are not equal.
pub fn bounds_eq<A, B>(a: &A, b: &B) -> bool where
 A: Interval,
 B: Interval<Bound=A::Bound>
{
  a.start_inclusive() == b.start_inclusive()
  && a.end_inclusive() == b.end_inclusive()
  && a.start() == b.start()
  && a.end() == b.end()
}

/// Displays an interval in the usual mathematical notation, for example `[0,3)` or `(1,2]`.
pub struct Notation<'a, I>(pub &'a I);

impl<'a, I> Display for Notation<'a, I> where
 I: Interval,
 I::Bound: Display
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    let i = self.0;
    write!(f, "{}{},{}{}",
      if i.start_inclusive() { '[' } else { '(' },
      i.start(),
      i.end(),
      if i.end_inclusive() { ']' } else { ')' })
  }
}
