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

//! Interval over primitive integers, each bound being inclusive or exclusive.
//!
//! Besides the [Interval](../interval/trait.Interval.html) capability, this type implements the generic collection traits of `gcollections`, so it can be used in algorithms written against these traits.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use intervals::NumericInterval;
//!
//! let a = NumericInterval::closed(0, 3);
//! let b = NumericInterval::from(1..5);
//! assert_eq!(a.intersection(&b), Some(NumericInterval::closed(1, 3)));
//! assert!(a.contains(&3));
//! assert!(!b.contains(&5));
//! assert_eq!(format!("{}", b), "[1,5)");
//! ```

use crate::interval::{Interval, Notation};
use crate::ops;
use gcollections::kind::*;
use gcollections::ops::*;
use num_traits::PrimInt;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Range, RangeInclusive};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NumericInterval<Bound> {
  start: Bound,
  start_inclusive: bool,
  end: Bound,
  end_inclusive: bool
}

impl<Bound: PrimInt> NumericInterval<Bound>
{
  pub fn new(start: Bound, start_inclusive: bool, end: Bound, end_inclusive: bool) -> Self {
    NumericInterval {
      start: start,
      start_inclusive: start_inclusive,
      end: end,
      end_inclusive: end_inclusive
    }
  }

  /// `[start,end]`
  pub fn closed(start: Bound, end: Bound) -> Self {
    Self::new(start, true, end, true)
  }

  /// `(start,end)`
  pub fn open(start: Bound, end: Bound) -> Self {
    Self::new(start, false, end, false)
  }

  /// `[start,end)`
  pub fn closed_open(start: Bound, end: Bound) -> Self {
    Self::new(start, true, end, false)
  }

  /// `(start,end]`
  pub fn open_closed(start: Bound, end: Bound) -> Self {
    Self::new(start, false, end, true)
  }

  pub fn singleton(value: Bound) -> Self {
    Self::closed(value, value)
  }
}

impl<Bound: PrimInt> Interval for NumericInterval<Bound>
{
  type Bound = Bound;

  fn start(&self) -> &Bound { &self.start }
  fn start_inclusive(&self) -> bool { self.start_inclusive }
  fn end(&self) -> &Bound { &self.end }
  fn end_inclusive(&self) -> bool { self.end_inclusive }

  fn with_bounds(&self, start: Bound, start_inclusive: bool, end: Bound, end_inclusive: bool) -> Self {
    Self::new(start, start_inclusive, end, end_inclusive)
  }
}

impl<Bound: PrimInt> From<Range<Bound>> for NumericInterval<Bound>
{
  fn from(range: Range<Bound>) -> Self {
    Self::closed_open(range.start, range.end)
  }
}

impl<Bound: PrimInt> From<RangeInclusive<Bound>> for NumericInterval<Bound>
{
  fn from(range: RangeInclusive<Bound>) -> Self {
    let (start, end) = range.into_inner();
    Self::closed(start, end)
  }
}

impl<Bound> Display for NumericInterval<Bound> where
 Bound: PrimInt + Display
{
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    Notation(self).fmt(f)
  }
}

impl<Bound> Serialize for NumericInterval<Bound> where
 Bound: PrimInt + Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (&self.start, self.start_inclusive, &self.end, self.end_inclusive).serialize(serializer)
  }
}

impl<'de, Bound> Deserialize<'de> for NumericInterval<Bound> where
 Bound: PrimInt + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let (start, start_inclusive, end, end_inclusive) = Deserialize::deserialize(deserializer)?;
    Ok(NumericInterval::new(start, start_inclusive, end, end_inclusive))
  }
}

impl<Bound> Collection for NumericInterval<Bound>
{
  type Item = Bound;
}

impl<Bound: PrimInt> Contains for NumericInterval<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    ops::contains(self, value)
  }
}

impl<Bound: PrimInt> IsEmpty for NumericInterval<Bound>
{
  fn is_empty(&self) -> bool {
    ops::is_empty(self)
  }
}

impl<Bound: PrimInt> Empty for NumericInterval<Bound>
{
  fn empty() -> Self {
    Self::closed(Bound::one(), Bound::zero())
  }
}

impl<Bound: PrimInt> Subset for NumericInterval<Bound>
{
  fn is_subset(&self, other: &Self) -> bool {
    ops::contains_interval(other, self)
  }
}

impl<Bound: PrimInt> Overlap for NumericInterval<Bound>
{
  fn overlap(&self, other: &Self) -> bool {
    ops::overlaps(self, other)
  }
}

impl<Bound: PrimInt> Disjoint for NumericInterval<Bound>
{
  fn is_disjoint(&self, other: &Self) -> bool {
    ops::is_disjoint(self, other)
  }
}

impl<Bound: PrimInt> Intersection for NumericInterval<Bound>
{
  type Output = Option<NumericInterval<Bound>>;

  fn intersection(&self, other: &Self) -> Self::Output {
    ops::intersect(self, other).map(|i| i.into_owned())
  }
}

impl<Bound: PrimInt> Union for NumericInterval<Bound>
{
  type Output = Vec<NumericInterval<Bound>>;

  fn union(&self, other: &Self) -> Self::Output {
    ops::union(self, other)
      .unwrap_or_default()
      .into_iter()
      .map(|i| i.into_owned())
      .collect()
  }
}

impl<Bound: PrimInt> Difference for NumericInterval<Bound>
{
  type Output = Vec<NumericInterval<Bound>>;

  fn difference(&self, other: &Self) -> Self::Output {
    ops::difference(self, other)
      .unwrap_or_default()
      .into_iter()
      .map(|i| i.into_owned())
      .collect()
  }
}
