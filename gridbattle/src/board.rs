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
//! Types that make up the game board.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use log::debug;

use crate::ships::Ship;
#[cfg(feature = "rng_gen")]
use crate::ships::ShipClass;

pub use self::{
    cell::CellState,
    coordinate::{parse_placement, Coordinate, GRID_SIZE},
    errors::{CannotPlaceReason, PlacementError},
};

mod cell;
mod coordinate;
mod errors;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// The shot sank a ship, but the player has more ships left.
    Sunk,
    /// The shot sank the player's last ship.
    Won,
}

impl Outcome {
    /// Short announcement of this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Miss => "Miss.",
            Outcome::Hit => "Hit!",
            Outcome::Sunk => "Hit and sunk!",
            Outcome::Won => "Hit and sunk! That was the last ship.",
        }
    }

    /// Returns true if the shot struck a ship.
    pub fn is_hit(self) -> bool {
        self != Outcome::Miss
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.message())
    }
}

/// Represents a single player's board: their ships and the shots that missed them.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Cells that were shot without hitting a ship.
    misses: HashSet<Coordinate>,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a ship on the board. Fails if it overlaps or touches any ship already
    /// placed. No limit is put on the number or names of ships.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if let Some(existing) = self.ships.iter().find(|other| ship.overlaps_or_touches(other)) {
            let (front, back) = ship.endpoints();
            return Err(PlacementError::new(
                CannotPlaceReason::Touching,
                format!(
                    "The {} would overlap or touch the {}. Leave a gap of at least one cell.",
                    ship.name(),
                    existing.name()
                ),
                format!(
                    "{} at {}..{} intersects footprint of {} at {:?}",
                    ship.name(),
                    front,
                    back,
                    existing.name(),
                    existing.endpoints()
                ),
            ));
        }
        debug!("placed {} at {:?}", ship.name(), ship.endpoints());
        self.ships.push(ship);
        Ok(())
    }

    /// Fire a shot at this board and report what it did.
    ///
    /// A shot at open water is recorded as a miss. A shot at a ship marks that cell hit;
    /// if that leaves every ship on the board sunk the outcome is [`Outcome::Won`].
    /// Repeating a shot gives the same answer again.
    pub fn resolve_shot(&mut self, at: Coordinate) -> Outcome {
        let outcome = match self.ships.iter_mut().find(|ship| ship.occupies(&at)) {
            None => {
                self.misses.insert(at);
                Outcome::Miss
            }
            Some(ship) => ship.receive_shot(at),
        };
        let outcome = if outcome.is_hit() && self.all_sunk() {
            Outcome::Won
        } else {
            outcome
        };
        debug!("shot at {} resolved as {:?}", at, outcome);
        outcome
    }

    /// Get the state of every cell that holds a ship or a miss. Cells that are not in
    /// the map are [`CellState::Unknown`]. Without `reveal`, undamaged ship cells are
    /// reported as unknown too.
    pub fn cell_states(&self, reveal: bool) -> HashMap<Coordinate, CellState> {
        self.ships
            .iter()
            .flat_map(|ship| ship.cells())
            .map(|(&coord, state)| (coord, state.project(reveal)))
            .chain(self.misses.iter().map(|&coord| (coord, CellState::Miss)))
            .collect()
    }

    /// Returns true if all of this board's ships have been sunk. An empty board counts as
    /// sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// Number of ships that are still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.sunk()).count()
    }

    /// Get the ships on this board in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship covering `coord`, if any.
    pub fn ship_at(&self, coord: &Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(coord))
    }

    /// Cells that were shot without hitting anything.
    pub fn misses(&self) -> &HashSet<Coordinate> {
        &self.misses
    }
}

/// Number of random positions tried for a single ship before giving up.
#[cfg(feature = "rng_gen")]
const MAX_SHIP_ATTEMPTS: usize = 100;

/// Number of times a whole random fleet is rebuilt before giving up.
#[cfg(feature = "rng_gen")]
const MAX_FLEET_ATTEMPTS: usize = 10;

#[cfg(feature = "rng_gen")]
impl Board {
    /// Place a ship of the given class at a random position that does not touch any
    /// other ship.
    pub fn place_random<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(), PlacementError> {
        let span = class.len() - 1;
        for _ in 0..MAX_SHIP_ATTEMPTS {
            let vertical: bool = rng.gen();
            let (rows, cols) = if vertical {
                (GRID_SIZE - span, GRID_SIZE)
            } else {
                (GRID_SIZE, GRID_SIZE - span)
            };
            let row = rng.gen_range(0, rows);
            let col = rng.gen_range(0, cols);
            let back = if vertical {
                Coordinate::from_index(row + span, col)
            } else {
                Coordinate::from_index(row, col + span)
            };
            let (front, back) = match (Coordinate::from_index(row, col), back) {
                (Some(front), Some(back)) => (front, back),
                _ => continue,
            };
            let ship = Ship::of_class(class, front, back)?;
            if !self.ships.iter().any(|other| ship.overlaps_or_touches(other)) {
                debug!("randomly placed {} at {}..{}", class, front, back);
                self.ships.push(ship);
                return Ok(());
            }
        }
        Err(PlacementError::new(
            CannotPlaceReason::NoRoom,
            format!("Could not find room for the {}.", class),
            format!(
                "no free position for {} after {} attempts with {} ships placed",
                class,
                MAX_SHIP_ATTEMPTS,
                self.ships.len()
            ),
        ))
    }

    /// Build a board holding the whole roster at random positions.
    pub fn random_fleet<R: rand::Rng + ?Sized>(rng: &mut R) -> Result<Self, PlacementError> {
        let mut last_err = None;
        for _ in 0..MAX_FLEET_ATTEMPTS {
            let mut board = Board::new();
            match ShipClass::ALL
                .iter()
                .try_for_each(|&class| board.place_random(rng, class))
            {
                Ok(()) => return Ok(board),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            PlacementError::new(
                CannotPlaceReason::NoRoom,
                "Could not find room for the fleet.",
                "random fleet placement made no attempts",
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn ship(front: &str, back: &str, len: usize) -> Ship {
        Ship::new(c(front), c(back), len, format!("{}-{}", front, back)).unwrap()
    }

    #[test]
    fn rejects_touching_placements() {
        let mut board = Board::new();
        board.place(ship("A1", "A2", 2)).unwrap();
        let err = board.place(ship("B1", "B2", 2)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Touching);
        let err = board.place(ship("B3", "B4", 2)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Touching);
        board.place(ship("C1", "C2", 2)).unwrap();
        assert_eq!(board.ships().len(), 2);
    }

    #[test]
    fn misses_are_recorded_and_repeatable() {
        let mut board = Board::new();
        board.place(ship("A1", "A2", 2)).unwrap();
        assert_eq!(board.resolve_shot(c("E5")), Outcome::Miss);
        assert_eq!(board.resolve_shot(c("E5")), Outcome::Miss);
        assert_eq!(board.misses().len(), 1);
        assert!(board.misses().contains(&c("E5")));
    }

    #[test]
    fn last_ship_sunk_wins() {
        let mut board = Board::new();
        board.place(ship("A1", "A2", 2)).unwrap();
        board.place(ship("J9", "J10", 2)).unwrap();
        assert_eq!(board.resolve_shot(c("A1")), Outcome::Hit);
        assert_eq!(board.resolve_shot(c("A2")), Outcome::Sunk);
        assert_eq!(board.remaining(), 1);
        assert_eq!(board.resolve_shot(c("J10")), Outcome::Hit);
        assert_eq!(board.resolve_shot(c("J9")), Outcome::Won);
        assert!(board.all_sunk());
        assert_eq!(board.resolve_shot(c("A1")), Outcome::Won);
        assert_eq!(board.resolve_shot(c("B1")), Outcome::Miss);
    }

    #[test]
    fn cell_states_hide_ships_in_fog() {
        let mut board = Board::new();
        board.place(ship("A1", "A3", 3)).unwrap();
        board.resolve_shot(c("A2"));
        board.resolve_shot(c("C3"));

        let hidden = board.cell_states(false);
        assert_eq!(hidden[&c("A1")], CellState::Unknown);
        assert_eq!(hidden[&c("A2")], CellState::Hit);
        assert_eq!(hidden[&c("C3")], CellState::Miss);
        assert!(!hidden.contains_key(&c("J10")));

        let shown = board.cell_states(true);
        assert_eq!(shown[&c("A1")], CellState::ShipPresent);
        assert_eq!(shown[&c("A3")], CellState::ShipPresent);
        assert_eq!(shown[&c("A2")], CellState::Hit);
        assert_eq!(shown.len(), 4);
    }

    #[test]
    fn finds_ship_by_cell() {
        let mut board = Board::new();
        board
            .place(Ship::of_class(crate::ships::ShipClass::Submarine, c("D4"), c("F4")).unwrap())
            .unwrap();
        assert_eq!(board.ship_at(&c("E4")).map(Ship::name), Some("Submarine"));
        assert!(board.ship_at(&c("G4")).is_none());
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_fleet_is_valid() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let board = Board::random_fleet(&mut rng).unwrap();
            let ships = board.ships();
            assert_eq!(ships.len(), ShipClass::ALL.len());
            for (i, a) in ships.iter().enumerate() {
                for b in &ships[i + 1..] {
                    assert!(!a.overlaps_or_touches(b));
                }
            }
        }
    }
}
