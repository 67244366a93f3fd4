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
//! Ships and the standard fleet roster.
use std::collections::{HashMap, HashSet};

use crate::board::{CannotPlaceReason, CellState, Coordinate, Outcome, PlacementError};

pub use self::roster::ShipClass;

mod roster;

/// A ship placed on a board. Its position is fixed at construction; only the hit state
/// of its cells changes afterward.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Display name of the ship.
    name: String,

    /// Declared length.
    length: usize,

    /// One endpoint of the ship.
    front: Coordinate,

    /// The other endpoint of the ship.
    back: Coordinate,

    /// Cells covered by the ship.
    area: HashSet<Coordinate>,

    /// The covered cells grown by one in every direction. Another ship may not occupy
    /// any of these.
    footprint: HashSet<Coordinate>,

    /// State of each covered cell: either `ShipPresent` or `Hit`.
    cells: HashMap<Coordinate, CellState>,

    /// Whether every covered cell has been hit.
    sunk: bool,
}

impl Ship {
    /// Construct a ship spanning `front` to `back` inclusive. Fails if the endpoints are
    /// diagonal to each other or span a different number of cells than `length`.
    pub fn new(
        front: Coordinate,
        back: Coordinate,
        length: usize,
        name: impl Into<String>,
    ) -> Result<Self, PlacementError> {
        let name = name.into();
        if Coordinate::is_diagonal(front, back) {
            return Err(PlacementError::new(
                CannotPlaceReason::Diagonal,
                format!(
                    "The {} must lie in a single row or column; {} and {} are diagonal.",
                    name, front, back
                ),
                format!("{} endpoints {} and {} differ in row and column", name, front, back),
            ));
        }
        let area = Coordinate::between(front, back, 0);
        if area.len() != length {
            return Err(PlacementError::new(
                CannotPlaceReason::WrongLength,
                format!(
                    "The {} is {} cells long, but {} to {} covers {}.",
                    name,
                    length,
                    front,
                    back,
                    area.len()
                ),
                format!(
                    "{} endpoints {}..{} cover {} cells, declared length {}",
                    name,
                    front,
                    back,
                    area.len(),
                    length
                ),
            ));
        }
        let footprint = Coordinate::between(front, back, 1);
        let cells = area
            .iter()
            .map(|&coord| (coord, CellState::ShipPresent))
            .collect();
        Ok(Self {
            name,
            length,
            front,
            back,
            area,
            footprint,
            cells,
            sunk: false,
        })
    }

    /// Construct a ship of the given roster class.
    pub fn of_class(
        class: ShipClass,
        front: Coordinate,
        back: Coordinate,
    ) -> Result<Self, PlacementError> {
        Self::new(front, back, class.len(), class.name())
    }

    /// Display name of the ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared length of the ship.
    pub fn len(&self) -> usize {
        self.length
    }

    /// The two endpoints the ship was placed with.
    pub fn endpoints(&self) -> (Coordinate, Coordinate) {
        (self.front, self.back)
    }

    /// Cells covered by the ship.
    pub fn area(&self) -> &HashSet<Coordinate> {
        &self.area
    }

    /// Returns true if the ship covers `coord`.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.area.contains(coord)
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Get an iterator over the covered cells and their states.
    pub fn cells(&self) -> impl '_ + Iterator<Item = (&Coordinate, CellState)> {
        self.cells.iter().map(|(coord, &state)| (coord, state))
    }

    /// Returns true if this ship and `other` overlap or are adjacent, including
    /// diagonally.
    pub fn overlaps_or_touches(&self, other: &Ship) -> bool {
        !self.footprint.is_disjoint(&other.area)
    }

    /// Record a shot at `at`, returning [`Outcome::Sunk`] if every cell is now hit and
    /// [`Outcome::Hit`] otherwise. Shooting a cell that was already hit is harmless.
    ///
    /// Panics if `at` is not covered by this ship; check with [`Ship::occupies`] first.
    pub fn receive_shot(&mut self, at: Coordinate) -> Outcome {
        match self.cells.get_mut(&at) {
            Some(state) => *state = CellState::Hit,
            None => panic!("{} was shot at {} which it does not cover", self.name, at),
        }
        self.sunk = self.cells.values().all(|&state| state == CellState::Hit);
        if self.sunk {
            Outcome::Sunk
        } else {
            Outcome::Hit
        }
    }
}
