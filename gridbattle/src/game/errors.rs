// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io;

use thiserror::Error;

use crate::game::MatchState;

/// Error that stops a [`Match`][crate::game::Match] from making progress. Placement
/// errors never end up here; they are reported and the request is repeated.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The input ran out before the match finished.
    #[error("input ended while the match was in state {state:?}")]
    InputExhausted {
        /// State the match was left in.
        state: MatchState,
    },

    /// Reading input or writing output failed.
    #[error("i/o error while running the match")]
    Io(#[from] io::Error),
}
