// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations between two intervals.
//!
//! Every binary operation tracks from which operand each resolved bound comes. When the result is exactly one of the operands, this operand is returned by reference (`Cow::Borrowed`) instead of being rebuilt, so `intersect(&a, &a)` gives back `a` itself. New intervals are built with [`Interval::with_bounds`](../interval/trait.Interval.html#tymethod.with_bounds) on the first operand.
//!
//! Empty intervals are valid operands everywhere; operations producing no interval at all return `None`. Such an absent interval stands for the empty set: lift the predicates over it with `Option::as_deref` and `map_or`, as below.
//!
//! # Examples
//!
//! ```rust
//! use std::borrow::Cow;
//! use intervals::ops::*;
//! use intervals::NumericInterval;
//!
//! let a = NumericInterval::closed(0, 3);
//! let b = NumericInterval::open(0, 3);
//! assert!(matches!(intersect(&a, &b), Some(Cow::Borrowed(x)) if std::ptr::eq(x, &b)));
//!
//! let rest = difference(&a, &b).unwrap();
//! assert_eq!(*rest[0], NumericInterval::closed(0, 0));
//! assert_eq!(*rest[1], NumericInterval::closed(3, 3));
//!
//! let (c, d) = (NumericInterval::closed(0, 1), NumericInterval::closed(2, 3));
//! let none = intersect(&c, &d);
//! assert!(none.as_deref().map_or(true, is_empty));
//! assert!(none.as_deref().map_or(true, |e| contains_interval(&a, e)));
//! ```

use crate::interval::Interval;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Result of a binary operation, expressed relatively to its operands.
pub(crate) enum Derived<I> {
  Lhs,
  Rhs,
  Fresh(I)
}

impl<I: Clone> Derived<I>
{
  pub(crate) fn resolve<'a>(self, lhs: &'a I, rhs: &'a I) -> Cow<'a, I> {
    match self {
      Derived::Lhs => Cow::Borrowed(lhs),
      Derived::Rhs => Cow::Borrowed(rhs),
      Derived::Fresh(i) => Cow::Owned(i)
    }
  }

  pub(crate) fn resolve_owned<'a>(self, lhs: Cow<'a, I>, rhs: Cow<'a, I>) -> Cow<'a, I> {
    match self {
      Derived::Lhs => lhs,
      Derived::Rhs => rhs,
      Derived::Fresh(i) => Cow::Owned(i)
    }
  }
}

/// Outcome of the union of two intervals, when at least one is not empty.
pub(crate) enum Joined<I> {
  One(Derived<I>),
  /// Both operands, unchanged and in order.
  Disjoint
}

/// What remains of the left operand of a difference, when something remains.
pub(crate) enum Remainder<I> {
  /// The left operand, unchanged.
  Whole,
  Pieces(Vec<I>)
}

struct Resolved<'a, B> {
  value: &'a B,
  inclusive: bool,
  from_lhs: bool,
  from_rhs: bool
}

fn and(a: bool, b: bool) -> bool { a && b }
fn or(a: bool, b: bool) -> bool { a || b }

// Picks `lhs` if it compares to `rhs` as `keep`, `rhs` otherwise. On ties, inclusivity is merged with `tie`.
fn resolve<'a, B: Ord>(lhs: (&'a B, bool), rhs: (&'a B, bool),
  keep: Ordering, tie: fn(bool, bool) -> bool) -> Resolved<'a, B>
{
  let order = lhs.0.cmp(rhs.0);
  if order == Ordering::Equal {
    let inclusive = tie(lhs.1, rhs.1);
    Resolved {
      value: lhs.0,
      inclusive: inclusive,
      from_lhs: inclusive == lhs.1,
      from_rhs: inclusive == rhs.1
    }
  }
  else if order == keep {
    Resolved { value: lhs.0, inclusive: lhs.1, from_lhs: true, from_rhs: false }
  }
  else {
    Resolved { value: rhs.0, inclusive: rhs.1, from_lhs: false, from_rhs: true }
  }
}

fn starts<'a, I: Interval>(a: &'a I, b: &'a I, keep: Ordering, tie: fn(bool, bool) -> bool) -> Resolved<'a, I::Bound> {
  resolve((a.start(), a.start_inclusive()), (b.start(), b.start_inclusive()), keep, tie)
}

fn ends<'a, I: Interval>(a: &'a I, b: &'a I, keep: Ordering, tie: fn(bool, bool) -> bool) -> Resolved<'a, I::Bound> {
  resolve((a.end(), a.end_inclusive()), (b.end(), b.end_inclusive()), keep, tie)
}

fn derive<I: Interval>(lhs: &I, start: Resolved<I::Bound>, end: Resolved<I::Bound>) -> Derived<I> {
  if start.from_lhs && end.from_lhs {
    Derived::Lhs
  }
  else if start.from_rhs && end.from_rhs {
    Derived::Rhs
  }
  else {
    Derived::Fresh(lhs.with_bounds(
      start.value.clone(), start.inclusive,
      end.value.clone(), end.inclusive))
  }
}

fn is_void<B: Ord>(start: &B, start_inclusive: bool, end: &B, end_inclusive: bool) -> bool {
  match start.cmp(end) {
    Ordering::Greater => true,
    Ordering::Equal => !start_inclusive || !end_inclusive,
    Ordering::Less => false
  }
}

/// `true` if no value lies in the interval: either `start > end`, or `start == end` and one of the bounds is exclusive.
pub fn is_empty<I: Interval>(interval: &I) -> bool {
  is_void(interval.start(), interval.start_inclusive(),
    interval.end(), interval.end_inclusive())
}

pub fn contains<I: Interval>(interval: &I, value: &I::Bound) -> bool {
  if is_empty(interval) {
    return false;
  }
  let start = interval.start().cmp(value);
  let end = interval.end().cmp(value);
  if (interval.start_inclusive() && start == Ordering::Equal)
   || (interval.end_inclusive() && end == Ordering::Equal)
  {
    true
  }
  else {
    start == Ordering::Less && end == Ordering::Greater
  }
}

/// `true` if `other` lies entirely inside `interval`.
///
/// Every interval, even an empty one, contains the empty intervals.
pub fn contains_interval<I: Interval>(interval: &I, other: &I) -> bool {
  is_empty(other) ||
    matches!(intersection_of(other, interval), Some(Derived::Lhs))
}

pub(crate) fn intersection_of<I: Interval>(a: &I, b: &I) -> Option<Derived<I>> {
  if is_empty(a) || is_empty(b) {
    return None;
  }
  let start = starts(a, b, Ordering::Greater, and);
  let end = ends(a, b, Ordering::Less, and);
  if is_void(start.value, start.inclusive, end.value, end.inclusive) {
    None
  }
  else {
    Some(derive(a, start, end))
  }
}

/// Values common to `a` and `b`, or `None` if there is none.
///
/// If the intersection is exactly `a` (resp. `b`), `a` (resp. `b`) is returned by reference.
pub fn intersect<'a, I: Interval>(a: &'a I, b: &'a I) -> Option<Cow<'a, I>> {
  intersection_of(a, b).map(|d| d.resolve(a, b))
}

/// `true` if `a` and `b` have at least one value in common.
pub fn overlaps<I: Interval>(a: &I, b: &I) -> bool {
  intersection_of(a, b).is_some()
}

pub fn is_disjoint<I: Interval>(a: &I, b: &I) -> bool {
  !overlaps(a, b)
}

pub(crate) fn union_of<I: Interval>(a: &I, b: &I) -> Option<Joined<I>> {
  match (is_empty(a), is_empty(b)) {
    (true, true) => None,
    (true, false) => Some(Joined::One(Derived::Rhs)),
    (false, true) => Some(Joined::One(Derived::Lhs)),
    (false, false) => {
      // The gap between the two intervals, if any.
      let inner_start = starts(a, b, Ordering::Greater, and);
      let inner_end = ends(a, b, Ordering::Less, and);
      let disjoint = match inner_start.value.cmp(inner_end.value) {
        Ordering::Greater => true,
        Ordering::Equal => !inner_start.inclusive && !inner_end.inclusive,
        Ordering::Less => false
      };
      if disjoint {
        Some(Joined::Disjoint)
      }
      else {
        let start = starts(a, b, Ordering::Less, or);
        let end = ends(a, b, Ordering::Greater, or);
        Some(Joined::One(derive(a, start, end)))
      }
    }
  }
}

/// Values of `a` or `b`: a single interval when they overlap or touch on an included point, both operands otherwise.
///
/// Returns `None` if both intervals are empty. If only one is empty, the other one is returned.
pub fn union<'a, I: Interval>(a: &'a I, b: &'a I) -> Option<Vec<Cow<'a, I>>> {
  union_of(a, b).map(|joined|
    match joined {
      Joined::One(d) => vec![d.resolve(a, b)],
      Joined::Disjoint => vec![Cow::Borrowed(a), Cow::Borrowed(b)]
    })
}

pub(crate) fn difference_of<I: Interval>(a: &I, b: &I) -> Option<Remainder<I>> {
  if is_empty(a) {
    return None;
  }
  let common = match intersection_of(a, b) {
    None => return Some(Remainder::Whole),
    Some(Derived::Lhs) => return None,
    Some(derived) => derived.resolve(a, b)
  };

  let mut pieces = Vec::with_capacity(2);
  if a.start() != common.start() || (a.start_inclusive() && !common.start_inclusive()) {
    pieces.push(a.with_bounds(
      a.start().clone(), a.start_inclusive(),
      common.start().clone(), !common.start_inclusive()));
  }
  if a.end() != common.end() || (a.end_inclusive() && !common.end_inclusive()) {
    pieces.push(a.with_bounds(
      common.end().clone(), !common.end_inclusive(),
      a.end().clone(), a.end_inclusive()));
  }
  Some(Remainder::Pieces(pieces))
}

/// Values of `a` that are not in `b`, as at most two intervals ordered by start.
///
/// Returns `None` if `a` is empty or entirely covered by `b`. When `b` does not touch `a`, `a` is returned by reference.
pub fn difference<'a, I: Interval>(a: &'a I, b: &'a I) -> Option<Vec<Cow<'a, I>>> {
  difference_of(a, b).map(|rest|
    match rest {
      Remainder::Whole => vec![Cow::Borrowed(a)],
      Remainder::Pieces(pieces) => pieces.into_iter().map(Cow::Owned).collect()
    })
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::numeric::NumericInterval;
  use proptest::prelude::*;

  type Iv = NumericInterval<i32>;

  fn iv(start: i32, start_inclusive: bool, end: i32, end_inclusive: bool) -> Iv {
    NumericInterval::new(start, start_inclusive, end, end_inclusive)
  }

  fn is_ref<I>(result: &Cow<I>, expected: &I) -> bool where I: Clone {
    match result {
      Cow::Borrowed(r) => std::ptr::eq(*r, expected),
      Cow::Owned(_) => false
    }
  }

  const booleans: [bool; 2] = [false, true];

  fn empty_intervals() -> Vec<Iv> {
    vec![iv(3, true, -3, true), iv(0, true, 0, false), iv(2, false, 2, true), iv(1, false, 1, false)]
  }

  fn non_empty_intervals() -> Vec<Iv> {
    let integers = -3..=3;
    let mut res: Vec<Iv> = integers.clone().map(NumericInterval::singleton).collect();
    for i in integers.clone() {
      for j in integers.clone() {
        if i < j {
          for &si in &booleans {
            for &ei in &booleans {
              res.push(iv(i, si, j, ei));
            }
          }
        }
      }
    }
    res
  }

  #[test]
  fn is_empty_test() {
    for i in empty_intervals() {
      assert!(is_empty(&i), "{} should be empty.", i);
    }
    for i in non_empty_intervals() {
      assert!(!is_empty(&i), "{} should not be empty.", i);
    }
  }

  #[test]
  fn contains_test() {
    let cases = vec![
      (1, iv(0, true, 3, true), vec![0,1,2,3], vec![-1,4]),
      (2, iv(0, false, 3, true), vec![1,2,3], vec![-1,0,4]),
      (3, iv(0, true, 3, false), vec![0,1,2], vec![-1,3,4]),
      (4, iv(0, false, 3, false), vec![1,2], vec![-1,0,3,4]),
      (5, iv(2, true, 2, true), vec![2], vec![1,3]),
      (6, iv(2, true, 2, false), vec![], vec![1,2,3]),
      (7, iv(2, false, 2, true), vec![], vec![1,2,3]),
      (8, iv(3, true, -3, true), vec![], vec![-3,0,3]),
    ];
    for (id, i, inside, outside) in cases {
      for v in &inside {
        assert!(contains(&i, v), "test #{}: {} is not contained inside {}, but it should.", id, v, i);
      }
      for v in &outside {
        assert!(!contains(&i, v), "test #{}: {} is contained inside {}, but it should not.", id, v, i);
      }
    }
  }

  #[test]
  fn contains_empty_interval_test() {
    for a in empty_intervals().into_iter().chain(non_empty_intervals()) {
      for e in empty_intervals() {
        assert!(contains_interval(&a, &e), "{} should contain {}.", a, e);
      }
    }
    for e in empty_intervals() {
      for b in non_empty_intervals() {
        assert!(!contains_interval(&e, &b), "{} should not contain {}.", e, b);
      }
    }
  }

  #[test]
  fn contains_interval_test() {
    for &x in &booleans {
      for &y in &booleans {
        // Fully contained.
        assert!(contains_interval(&iv(0, x, 3, y), &iv(1, x, 2, y)));
        assert!(contains_interval(&iv(0, x, 3, y), &iv(1, y, 2, x)));
        // Non intersecting.
        assert!(!contains_interval(&iv(0, x, 1, y), &iv(2, x, 3, y)));
        // Adjacent at the end.
        assert!(contains_interval(&iv(0, x, 3, true), &iv(1, y, 3, x)));
        assert!(!contains_interval(&iv(0, x, 3, false), &iv(1, y, 3, true)));
        // Adjacent at the start.
        assert!(contains_interval(&iv(0, true, 3, x), &iv(0, y, 2, x)));
        assert!(!contains_interval(&iv(0, false, 3, x), &iv(0, true, 2, y)));
        // Zero-width interval at the end.
        assert!(contains_interval(&iv(0, x, 3, true), &iv(3, true, 3, true)));
        assert!(!contains_interval(&iv(0, x, 3, false), &iv(3, true, 3, true)));
        // Zero-width interval at the start.
        assert!(contains_interval(&iv(0, true, 3, x), &iv(0, true, 0, true)));
        assert!(!contains_interval(&iv(0, false, 3, x), &iv(0, true, 0, true)));
      }
    }
  }

  #[test]
  fn absent_interval_test() {
    let lhs = iv(0, true, 1, true);
    let rhs = iv(2, true, 3, true);
    let absent = intersect(&lhs, &rhs);
    assert!(absent.is_none());
    assert!(absent.as_deref().map_or(true, is_empty));
    for a in empty_intervals().into_iter().chain(non_empty_intervals()) {
      assert!(absent.as_deref().map_or(true, |e| contains_interval(&a, e)), "{} should contain the absent interval.", a);
    }
  }

  #[test]
  fn intersect_with_empty_test() {
    for a in empty_intervals().into_iter().chain(non_empty_intervals()) {
      for e in empty_intervals() {
        assert!(intersect(&a, &e).is_none());
        assert!(intersect(&e, &a).is_none());
      }
    }
  }

  #[test]
  fn intersect_identity_test() {
    for a in non_empty_intervals() {
      let res = intersect(&a, &a).unwrap();
      assert!(is_ref(&res, &a), "intersect({0}, {0}) should return the same instance.", a);
    }
  }

  #[test]
  fn intersect_contained_test() {
    for &(si, ei) in &[(false, false), (false, true), (true, false), (true, true)] {
      let a = iv(0, si, 3, ei);
      let b = iv(1, ei, 2, si);
      assert!(is_ref(&intersect(&a, &b).unwrap(), &b));
      assert!(is_ref(&intersect(&b, &a).unwrap(), &b));
    }
  }

  #[test]
  fn intersect_same_size_test() {
    for &asi in &booleans {
      for &aei in &booleans {
        for &bsi in &booleans {
          for &bei in &booleans {
            let a = iv(0, asi, 3, aei);
            let b = iv(0, bsi, 3, bei);
            let res = intersect(&a, &b).unwrap();
            assert_eq!(*res, iv(0, asi && bsi, 3, aei && bei));
            if asi == (asi && bsi) && aei == (aei && bei) {
              assert!(is_ref(&res, &a));
            }
            else if bsi == (asi && bsi) && bei == (aei && bei) {
              assert!(is_ref(&res, &b));
            }
            else {
              assert!(matches!(res, Cow::Owned(_)));
            }
          }
        }
      }
    }
  }

  #[test]
  fn intersect_test() {
    let cases = vec![
      // disjoint
      (1, iv(0, true, 1, true), iv(2, true, 3, true), None),
      // touching on an excluded point
      (2, iv(0, true, 2, false), iv(2, true, 3, true), None),
      (3, iv(0, true, 2, true), iv(2, false, 3, true), None),
      (4, iv(0, true, 2, false), iv(2, false, 3, true), None),
      // touching on an included point
      (5, iv(0, false, 2, true), iv(2, true, 3, false), Some(iv(2, true, 2, true))),
      // overlapping
      (6, iv(0, true, 2, false), iv(1, false, 3, true), Some(iv(1, false, 2, false))),
      (7, iv(1, false, 3, true), iv(0, true, 2, false), Some(iv(1, false, 2, false))),
      (8, iv(-3, true, 3, true), iv(0, false, 0, false), None),
    ];
    for (id, a, b, expected) in cases {
      let res = intersect(&a, &b).map(Cow::into_owned);
      assert_eq!(res, expected, "test #{} of intersection", id);
    }
  }

  #[test]
  fn union_with_empty_test() {
    for e in empty_intervals() {
      for f in empty_intervals() {
        assert!(union(&e, &f).is_none());
      }
      for a in non_empty_intervals() {
        let res = union(&a, &e).unwrap();
        assert_eq!(res.len(), 1);
        assert!(is_ref(&res[0], &a));
        let res = union(&e, &a).unwrap();
        assert_eq!(res.len(), 1);
        assert!(is_ref(&res[0], &a));
      }
    }
  }

  #[test]
  fn union_touching_test() {
    for &x in &booleans {
      for &y in &booleans {
        let a = iv(0, false, 2, x);
        let b = iv(2, y, 3, false);
        let res = union(&a, &b).unwrap();
        if x || y {
          assert_eq!(res.len(), 1);
          assert!(contains_interval(&*res[0], &a));
          assert!(contains_interval(&*res[0], &b));
          assert_eq!(*res[0], iv(0, false, 3, false));
        }
        else {
          assert_eq!(res.len(), 2);
          assert!(is_ref(&res[0], &a));
          assert!(is_ref(&res[1], &b));
        }
      }
    }
  }

  #[test]
  fn union_test() {
    let a = iv(0, false, 1, false);
    let b = iv(2, false, 3, false);
    let res = union(&a, &b).unwrap();
    assert!(res.len() == 2 && is_ref(&res[0], &a) && is_ref(&res[1], &b));

    let a = iv(1, false, 2, false);
    let b = iv(0, false, 3, false);
    let res = union(&a, &b).unwrap();
    assert!(res.len() == 1 && is_ref(&res[0], &b));
    let res = union(&b, &a).unwrap();
    assert!(res.len() == 1 && is_ref(&res[0], &b));

    let a = iv(0, false, 2, false);
    let b = iv(1, false, 3, true);
    let res = union(&a, &b).unwrap();
    assert_eq!(res, vec![Cow::Owned(iv(0, false, 3, true))]);

    let a = iv(0, false, 3, false);
    let b = iv(0, true, 3, false);
    let res = union(&a, &b).unwrap();
    assert!(res.len() == 1 && is_ref(&res[0], &b));
  }

  #[test]
  fn difference_test() {
    let cases = vec![
      // b inside a
      (1, iv(0, true, 3, true), iv(1, true, 2, true), Some(vec![iv(0, true, 1, false), iv(2, false, 3, true)])),
      // b overlaps the end of a
      (2, iv(0, true, 2, true), iv(1, true, 3, true), Some(vec![iv(0, true, 1, false)])),
      // b overlaps the start of a
      (3, iv(1, true, 3, true), iv(0, true, 2, true), Some(vec![iv(2, false, 3, true)])),
      // a inside b
      (4, iv(1, false, 2, false), iv(0, false, 3, false), None),
      // a equals b
      (5, iv(1, false, 2, false), iv(1, false, 2, false), None),
      // all but the bounds
      (6, iv(0, true, 3, true), iv(0, false, 3, false), Some(vec![iv(0, true, 0, true), iv(3, true, 3, true)])),
      // a single bound
      (7, iv(0, true, 3, true), iv(3, true, 3, true), Some(vec![iv(0, true, 3, false)])),
      (8, iv(0, true, 3, true), iv(0, true, 0, true), Some(vec![iv(0, false, 3, true)])),
    ];
    for (id, a, b, expected) in cases {
      let res = difference(&a, &b).map(|r| r.into_iter().map(Cow::into_owned).collect::<Vec<_>>());
      assert_eq!(res, expected, "test #{} of difference", id);
    }
  }

  #[test]
  fn difference_untouched_test() {
    let a = iv(0, false, 3, false);
    for b in empty_intervals().into_iter().chain(vec![iv(3, true, 4, true), iv(-2, true, 0, true)]) {
      let res = difference(&a, &b).unwrap();
      assert!(res.len() == 1 && is_ref(&res[0], &a));
    }
    for e in empty_intervals() {
      for b in non_empty_intervals() {
        assert!(difference(&e, &b).is_none());
      }
    }
  }

  fn arb_interval() -> impl Strategy<Value = Iv> {
    (-6i32..6, any::<bool>(), -6i32..6, any::<bool>())
      .prop_map(|(s, si, e, ei)| NumericInterval::new(s, si, e, ei))
  }

  fn any_contains(set: &Option<Vec<Cow<Iv>>>, v: &i32) -> bool {
    set.iter().flatten().any(|i| contains(&**i, v))
  }

  proptest! {
    #[test]
    fn intersect_semantics(a in arb_interval(), b in arb_interval()) {
      let res = intersect(&a, &b);
      for v in -7..7 {
        let expected = contains(&a, &v) && contains(&b, &v);
        prop_assert_eq!(res.as_ref().map_or(false, |i| contains(&**i, &v)), expected);
      }
      if let Some(i) = res {
        prop_assert!(!is_empty(&*i));
      }
    }

    #[test]
    fn intersect_is_reflexive(a in arb_interval()) {
      match intersect(&a, &a) {
        Some(res) => prop_assert!(is_ref(&res, &a)),
        None => prop_assert!(is_empty(&a))
      }
    }

    #[test]
    fn union_semantics(a in arb_interval(), b in arb_interval()) {
      let res = union(&a, &b);
      for v in -7..7 {
        prop_assert_eq!(any_contains(&res, &v), contains(&a, &v) || contains(&b, &v));
      }
    }

    #[test]
    fn difference_semantics(a in arb_interval(), b in arb_interval()) {
      let res = difference(&a, &b);
      for v in -7..7 {
        prop_assert_eq!(any_contains(&res, &v), contains(&a, &v) && !contains(&b, &v));
      }
      for piece in res.iter().flatten() {
        prop_assert!(intersect(&**piece, &b).is_none());
      }
    }

    #[test]
    fn difference_and_intersection(a in arb_interval(), b in arb_interval()) {
      prop_assume!(!is_empty(&a) && !is_empty(&b));
      match intersect(&a, &b) {
        None => {
          let res = difference(&a, &b).unwrap();
          prop_assert!(res.len() == 1 && is_ref(&res[0], &a));
        }
        Some(ref common) if is_ref(common, &a) => prop_assert!(difference(&a, &b).is_none()),
        Some(_) => prop_assert!(difference(&a, &b).is_some())
      }
    }
  }
}
