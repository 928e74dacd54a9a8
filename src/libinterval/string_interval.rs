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

//! Substring of a shared source string, seen as the interval `[start,end)` of character indices.
//!
//! The start bound is always inclusive and the end bound always exclusive. Indices count characters, not bytes, so multi-byte text is handled transparently.
//!
//! # Examples
//!
//! ```rust
//! use intervals::{ops, StringInterval};
//!
//! let greeting = StringInterval::new("hello world");
//! let o_w = StringInterval::with_range("hello world", 4, 3).unwrap();
//! let pieces = ops::difference(&greeting, &o_w).unwrap();
//! assert_eq!(pieces[0].value(), "hell");
//! assert_eq!(pieces[1].value(), "orld");
//! ```

use crate::error::IntervalError;
use crate::interval::Interval;
use log::warn;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::ops::Range;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringInterval {
  source: Arc<str>,
  start: usize,
  end: usize,
  bytes: Range<usize>
}

fn char_count(s: &str) -> usize {
  s.chars().count()
}

fn byte_offset(s: &str, chars: usize) -> usize {
  s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

impl StringInterval
{
  /// The interval covering the whole `source`.
  pub fn new<S: Into<Arc<str>>>(source: S) -> Self {
    let source = source.into();
    let end = char_count(&source);
    Self::from_parts(source, 0, end)
  }

  /// The `length` characters of `source` starting at character index `start`.
  pub fn with_range<S: Into<Arc<str>>>(source: S, start: usize, length: usize) -> Result<Self, IntervalError> {
    let source = source.into();
    let len = char_count(&source);
    if start > len {
      return Err(IntervalError::StartOutOfRange { start, len });
    }
    match start.checked_add(length) {
      Some(end) if end <= len => Ok(Self::from_parts(source, start, end)),
      _ => Err(IntervalError::LengthOutOfRange { start, length, len })
    }
  }

  fn from_parts(source: Arc<str>, start: usize, end: usize) -> Self {
    let first = byte_offset(&source, start);
    let last = first + byte_offset(&source[first..], end - start);
    StringInterval { source, start, end, bytes: first..last }
  }

  pub fn source(&self) -> &str {
    &self.source
  }

  /// Number of characters covered.
  pub fn len(&self) -> usize {
    self.end - self.start
  }

  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }

  /// The covered substring.
  pub fn value(&self) -> &str {
    &self.source[self.bytes.clone()]
  }
}

impl Interval for StringInterval
{
  type Bound = usize;

  fn start(&self) -> &usize { &self.start }
  fn start_inclusive(&self) -> bool { true }
  fn end(&self) -> &usize { &self.end }
  fn end_inclusive(&self) -> bool { false }

  /// Inclusivity flags are ignored. Bounds falling outside of the source are clamped to it.
  fn with_bounds(&self, start: usize, _start_inclusive: bool, end: usize, _end_inclusive: bool) -> Self {
    let len = char_count(&self.source);
    let clamped_start = start.min(len);
    let clamped_end = end.max(clamped_start).min(len);
    if clamped_start != start || clamped_end != end {
      warn!("string interval [{},{}) clamped to [{},{}) in a source of {} characters.",
        start, end, clamped_start, clamped_end, len);
    }
    Self::from_parts(self.source.clone(), clamped_start, clamped_end)
  }
}

impl Serialize for StringInterval
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (self.source(), self.start, self.len()).serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for StringInterval
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let (source, start, length): (String, usize, usize) = Deserialize::deserialize(deserializer)?;
    StringInterval::with_range(source, start, length).map_err(de::Error::custom)
  }
}
