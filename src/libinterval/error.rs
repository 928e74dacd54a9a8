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

use thiserror::Error;

/// Failure to build an interval from invalid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
  #[error("start index {start} is outside of a string of {len} characters")]
  StartOutOfRange { start: usize, len: usize },
  #[error("{length} characters from index {start} exceed a string of {len} characters")]
  LengthOutOfRange { start: usize, length: usize, len: usize }
}
