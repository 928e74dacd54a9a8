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

//! This library proposes a generic algebra over intervals whose bounds are each inclusive or exclusive. Any type implementing the [Interval](interval/trait.Interval.html) trait can be tested for emptiness and containment, intersected, merged and subtracted, alone or as sets of intervals.
//!
//! Results reuse their operands whenever they are unchanged: operations return `Cow::Borrowed` references to the input intervals, and only build new intervals when the bounds actually differ.
//!
//! Two representations are provided: [NumericInterval](numeric/struct.NumericInterval.html) over primitive integers, and [StringInterval](string_interval/struct.StringInterval.html) over the characters of a shared source string.
//!
//! # Examples
//!
//! ```rust
//! use intervals::{interval_set, NumericInterval, ToIntervalSet};
//!
//! let set = vec![NumericInterval::closed(5, 9), NumericInterval::closed(0, 3), NumericInterval::closed_open(3, 4)];
//! let simplified = interval_set::simplify(set.to_interval_set()).unwrap();
//! assert_eq!(simplified.len(), 2);
//! assert_eq!(*simplified[0], NumericInterval::closed_open(0, 4));
//! assert_eq!(*simplified[1], set[0]);
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod error;
pub mod interval;
pub mod interval_set;
pub mod numeric;
pub mod ops;
pub mod string_interval;

pub use crate::error::IntervalError;
pub use crate::interval::Interval;
pub use crate::interval_set::{IntervalSet, ToIntervalSet};
pub use crate::numeric::NumericInterval;
pub use crate::string_interval::StringInterval;
