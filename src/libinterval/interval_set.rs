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

//! Operations on sets of intervals.
//!
//! A set is a plain vector of intervals, possibly borrowed from the caller, representing the union of its members. Sets do not need to be sorted or simplified: [`simplify`](fn.simplify.html) turns any set into the minimal sorted list of disjoint intervals covering the same values, merging overlapping intervals and intervals touching on an included point. For example `{[2,3), [0,1), (1,2]}` becomes `{[0,1), (1,3)}`.
//!
//! Intervals that survive an operation unchanged are carried through by reference.
//!
//! # Examples
//!
//! ```rust
//! use intervals::interval_set::*;
//! use intervals::NumericInterval;
//!
//! let set = vec![NumericInterval::closed_open(0, 1), NumericInterval::closed_open(2, 3)];
//! let hole = NumericInterval::closed_open(1, 2);
//! let res = union_interval(set.to_interval_set(), &hole).unwrap();
//! assert_eq!(res.len(), 1);
//! assert_eq!(*res[0], NumericInterval::closed_open(0, 3));
//! ```
//!
//! # See also
//! [ops](../ops/index.html)

use crate::interval::Interval;
use crate::ops;
use crate::ops::{Joined, Remainder};
use log::trace;
use std::borrow::Cow;
use std::iter::once;

/// Intervals representing the union of their values.
pub type IntervalSet<'a, I> = Vec<Cow<'a, I>>;

pub trait ToIntervalSet<'a, I: Interval + 'a>
{
  fn to_interval_set(self) -> IntervalSet<'a, I>;
}

impl<'a, I: Interval + 'a> ToIntervalSet<'a, I> for &'a [I]
{
  fn to_interval_set(self) -> IntervalSet<'a, I> {
    self.iter().map(Cow::Borrowed).collect()
  }
}

impl<'a, I: Interval + 'a> ToIntervalSet<'a, I> for &'a Vec<I>
{
  fn to_interval_set(self) -> IntervalSet<'a, I> {
    self.as_slice().to_interval_set()
  }
}

/// `true` if every interval of the set is empty, in particular if the set has no interval.
///
/// Sets are slices of `Cow`; a plain slice of intervals is borrowed into one with [`ToIntervalSet`](trait.ToIntervalSet.html):
///
/// ```rust
/// use intervals::interval_set::{self, ToIntervalSet};
/// use intervals::NumericInterval;
///
/// let set = vec![NumericInterval::open(0, 0), NumericInterval::closed(2, 4)];
/// assert!(!interval_set::is_empty(&set.to_interval_set()));
/// assert!(interval_set::contains(&set.to_interval_set(), &4));
/// ```
pub fn is_empty<I: Interval>(set: &[Cow<I>]) -> bool {
  set.iter().all(|i| ops::is_empty(&**i))
}

pub fn contains<I: Interval>(set: &[Cow<I>], value: &I::Bound) -> bool {
  set.iter().any(|i| ops::contains(&**i, value))
}

/// Minimal list of disjoint intervals covering the values of `set`, sorted by start.
///
/// Empty intervals are dropped. Returns `None` if nothing remains. Among intervals with the same start, the ones including it are merged first, so an interval excluding its start never closes a gap that a later one would fill.
pub fn simplify<'a, I, S>(set: S) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a,
 S: IntoIterator<Item=Cow<'a, I>>
{
  let mut sorted: Vec<Cow<'a, I>> = set.into_iter()
    .filter(|i| !ops::is_empty(&**i))
    .collect();
  sorted.sort_by(|a, b| a.start().cmp(b.start())
    .then(b.start_inclusive().cmp(&a.start_inclusive())));
  let count = sorted.len();

  let mut pending = sorted.into_iter();
  let mut candidate = match pending.next() {
    Some(first) => first,
    None => {
      trace!("simplify: no interval left after removing empty ones");
      return None;
    }
  };
  let mut res = Vec::with_capacity(count);
  for next in pending {
    match ops::union_of(&*candidate, &*next) {
      Some(Joined::One(joint)) => {
        candidate = joint.resolve_owned(candidate, next);
      }
      Some(Joined::Disjoint) => {
        // Nothing after `next` can start before it, so `candidate` is final.
        res.push(candidate);
        candidate = next;
      }
      // Both operands are non-empty.
      None => {}
    }
  }
  res.push(candidate);
  trace!("simplify: {} intervals merged into {}", count, res.len());
  Some(res)
}

pub fn union<'a, I, A, B>(a: A, b: B) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a,
 A: IntoIterator<Item=Cow<'a, I>>,
 B: IntoIterator<Item=Cow<'a, I>>
{
  simplify(a.into_iter().chain(b))
}

pub fn union_interval<'a, I, S>(set: S, interval: &'a I) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a,
 S: IntoIterator<Item=Cow<'a, I>>
{
  simplify(set.into_iter().chain(once(Cow::Borrowed(interval))))
}

pub fn interval_union<'a, I, S>(interval: &'a I, set: S) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a,
 S: IntoIterator<Item=Cow<'a, I>>
{
  simplify(once(Cow::Borrowed(interval)).chain(set))
}

fn remainder<'a, I: Interval>(interval: Cow<'a, I>, excluded: &I) -> IntervalSet<'a, I> {
  match ops::difference_of(&*interval, excluded) {
    None => vec![],
    Some(Remainder::Whole) => vec![interval],
    Some(Remainder::Pieces(pieces)) => pieces.into_iter().map(Cow::Owned).collect()
  }
}

/// Values of `set` that are not in `excluded`.
///
/// Returns `None` if `set` is empty or if nothing remains. If `excluded` is empty, `set` is returned as given, empty members included. The result is not simplified.
pub fn difference<'a, 'b, I, A, B>(set: A, excluded: B) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a + 'b,
 A: IntoIterator<Item=Cow<'a, I>>,
 B: IntoIterator<Item=Cow<'b, I>>
{
  let mut res: IntervalSet<'a, I> = set.into_iter().collect();
  if is_empty(&res) {
    return None;
  }
  let excluded: Vec<Cow<'b, I>> = excluded.into_iter().collect();
  if is_empty(&excluded) {
    return Some(res);
  }
  for (step, x) in excluded.iter().enumerate() {
    res = res.into_iter()
      .flat_map(|i| remainder(i, &**x))
      .collect();
    if res.is_empty() {
      trace!("difference: nothing left after {} of {} excluded intervals", step + 1, excluded.len());
      return None;
    }
  }
  trace!("difference: {} intervals left after {} excluded intervals", res.len(), excluded.len());
  Some(res)
}

pub fn difference_interval<'a, I, S>(set: S, interval: &I) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a,
 S: IntoIterator<Item=Cow<'a, I>>
{
  difference(set, once(Cow::Borrowed(interval)))
}

/// Values of `interval` that are not in `set`.
pub fn interval_difference<'a, 'b, I, S>(interval: &'a I, set: S) -> Option<IntervalSet<'a, I>> where
 I: Interval + 'a + 'b,
 S: IntoIterator<Item=Cow<'b, I>>
{
  difference(once(Cow::Borrowed(interval)), set)
}
