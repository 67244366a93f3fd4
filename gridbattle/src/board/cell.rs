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
//! Per-cell display state shared by ships and boards.

use std::fmt;

/// What is known about a single cell of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing known, or nothing there.
    Unknown,
    /// An undamaged part of a ship.
    ShipPresent,
    /// A part of a ship that was shot.
    Hit,
    /// A shot that landed in open water.
    Miss,
}

impl CellState {
    /// Project this state for display. Without `reveal`, undamaged ship cells are hidden
    /// in the fog; hits and misses always show.
    pub fn project(self, reveal: bool) -> Self {
        match self {
            CellState::ShipPresent if !reveal => CellState::Unknown,
            other => other,
        }
    }

    /// Glyph used when rendering the grid as text.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unknown => '~',
            CellState::ShipPresent => '#',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}
