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
//! Grid addresses and the text encoding used to enter them.
use std::{cmp, collections::HashSet, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::{CannotPlaceReason, PlacementError};

/// Number of rows and of columns on the board.
pub const GRID_SIZE: usize = 10;

/// Row labels, top to bottom.
const ROW_LETTERS: &[u8; GRID_SIZE] = b"ABCDEFGHIJ";

/// The coordinates of a cell on the board: a row letter `A`-`J` and a column `1`-`10`.
///
/// A [`Coordinate`] is always in bounds. Ordering is row-major.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Zero-based row index.
    row: u8,
    /// Zero-based column index.
    col: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from a row letter and a one-based column. Returns `None`
    /// if either is out of range. Lowercase row letters are accepted.
    pub fn new(row: char, column: usize) -> Option<Self> {
        let row = ROW_LETTERS
            .iter()
            .position(|&letter| letter as char == row.to_ascii_uppercase())?;
        Self::from_index(row, column.checked_sub(1)?)
    }

    /// Construct a [`Coordinate`] from zero-based row and column indexes. Returns `None`
    /// if either is out of range.
    pub fn from_index(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The row letter of this coordinate.
    pub fn row(&self) -> char {
        ROW_LETTERS[self.row as usize] as char
    }

    /// The one-based column of this coordinate.
    pub fn column(&self) -> usize {
        self.col as usize + 1
    }

    /// Zero-based `(row, column)` indexes.
    pub fn index(&self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Get every coordinate in the rectangle spanned by `a` and `b` (inclusive), with
    /// each edge pushed outward by `expand` cells. Cells that would fall off the grid are
    /// left out.
    pub fn between(a: Coordinate, b: Coordinate, expand: usize) -> HashSet<Coordinate> {
        let (rows, cols) = (
            expand_span(a.row, b.row, expand),
            expand_span(a.col, b.col, expand),
        );
        rows.flat_map(|row| {
            cols.clone().map(move |col| Coordinate {
                row: row as u8,
                col: col as u8,
            })
        })
        .collect()
    }

    /// Returns true if `a` and `b` share neither a row nor a column.
    pub fn is_diagonal(a: Coordinate, b: Coordinate) -> bool {
        a.row != b.row && a.col != b.col
    }

    /// Get an iterator over rows of the grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_rows() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        (0..GRID_SIZE as u8)
            .map(|row| (0..GRID_SIZE as u8).map(move |col| Coordinate { row, col }))
    }

    /// Get an iterator over every coordinate of the grid in row-major order.
    pub fn iter_all() -> impl Iterator<Item = Coordinate> {
        Self::iter_rows().flatten()
    }
}

/// Inclusive index range covering `a` and `b` grown by `expand`, clamped to the grid.
fn expand_span(a: u8, b: u8, expand: usize) -> std::ops::RangeInclusive<usize> {
    let (lo, hi) = (cmp::min(a, b) as usize, cmp::max(a, b) as usize);
    lo.saturating_sub(expand)..=cmp::min(hi.saturating_add(expand), GRID_SIZE - 1)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.row(), self.column()))
    }
}

impl FromStr for Coordinate {
    type Err = PlacementError;

    /// Decode a coordinate such as `A1` or `J10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if !(2..=3).contains(&text.len()) {
            return Err(PlacementError::new(
                CannotPlaceReason::BadLength,
                format!(
                    "\"{}\" is not a coordinate. Use a row letter and a column, like B7.",
                    text
                ),
                format!("coordinate text {:?} has length {}, expected 2..=3", text, text.len()),
            ));
        }
        // Length is at least 2, so there is a first char; a multi-byte first char gets
        // rejected as a row below.
        let mut chars = text.chars();
        let letter = chars.next().unwrap_or_default();
        let column_text = chars.as_str();
        let row = ROW_LETTERS
            .iter()
            .position(|&l| l as char == letter.to_ascii_uppercase())
            .ok_or_else(|| {
                PlacementError::new(
                    CannotPlaceReason::BadRow,
                    format!("Row must be a letter from A to J, got '{}'.", letter),
                    format!("row char {:?} outside A..=J in {:?}", letter, text),
                )
            })?;
        let column: usize = column_text.parse().map_err(|err| {
            PlacementError::new(
                CannotPlaceReason::BadColumn,
                format!("Column must be a number, got \"{}\".", column_text),
                format!("column text {:?} in {:?} is not an integer: {}", column_text, text, err),
            )
        })?;
        if !(1..=GRID_SIZE).contains(&column) {
            return Err(PlacementError::new(
                CannotPlaceReason::ColumnOutOfRange,
                format!("Column must be between 1 and {}, got {}.", GRID_SIZE, column),
                format!("column {} in {:?} outside 1..={}", column, text, GRID_SIZE),
            ));
        }
        Ok(Coordinate {
            row: row as u8,
            col: (column - 1) as u8,
        })
    }
}

/// Parse a ship placement request: two coordinates separated by a single space, such as
/// `A1 A5`. The endpoints may be given in either order.
pub fn parse_placement(text: &str) -> Result<(Coordinate, Coordinate), PlacementError> {
    static PLACEMENT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<front>\S+) (?P<back>\S+)$").unwrap());

    let text = text.trim();
    let captures = PLACEMENT.captures(text).ok_or_else(|| {
        PlacementError::new(
            CannotPlaceReason::MalformedRequest,
            format!(
                "\"{}\" is not a placement. Give both ends separated by a space, like A1 A5.",
                text
            ),
            format!("placement request {:?} does not match `<coord> <coord>`", text),
        )
    })?;
    let front: Coordinate = captures["front"].parse()?;
    let back: Coordinate = captures["back"].parse()?;
    Ok((front, back))
}
