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
//! The seams between a [`Match`][crate::game::Match] and whatever feeds it commands and
//! shows its progress.
use std::{
    collections::{HashMap, VecDeque},
    fmt,
    io::{self, BufRead},
};

use crate::{
    board::{CellState, Coordinate, Outcome, PlacementError},
    game::Player,
    ships::ShipClass,
};

/// Source of command lines.
pub trait Input {
    /// Get the next line, without its line ending. Returns `None` once the input is
    /// exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for boards and announcements.
pub trait Output {
    /// Show a board.
    fn show_board(&mut self, view: &BoardView) -> io::Result<()>;

    /// Announce something to the players.
    fn report(&mut self, report: &Report) -> io::Result<()>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

impl<T: Output + ?Sized> Output for &mut T {
    fn show_board(&mut self, view: &BoardView) -> io::Result<()> {
        (**self).show_board(view)
    }

    fn report(&mut self, report: &Report) -> io::Result<()> {
        (**self).report(report)
    }
}

/// [`Input`] reading lines from any [`BufRead`].
pub struct LineReader<B> {
    read: B,
    buf: String,
}

impl<B> LineReader<B> {
    /// Construct a [`LineReader`] over `read`.
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> Input for LineReader<B> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }
}

/// [`Input`] that replays a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    /// Construct a [`Scripted`] input that yields `lines` in order.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for Scripted {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// A board as it should be shown to the players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Player who owns the board.
    pub owner: Player,
    /// Whether undamaged ships are shown.
    pub reveal: bool,
    /// States of the cells that are not [`CellState::Unknown`].
    pub cells: HashMap<Coordinate, CellState>,
}

impl BoardView {
    /// Get the state of a single cell.
    pub fn cell(&self, coord: &Coordinate) -> CellState {
        self.cells.get(coord).copied().unwrap_or_default()
    }

    /// Get an iterator over the rows of the board. Each row is its letter and an
    /// iterator over the states of its cells.
    pub fn rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = (char, impl 'a + Iterator<Item = CellState>)> {
        Coordinate::iter_rows().map(move |row| {
            let mut row = row.peekable();
            let letter = row.peek().map_or('?', Coordinate::row);
            (letter, row.map(move |coord| self.cell(&coord)))
        })
    }
}

/// What a player is being asked for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Request {
    /// The endpoints of a ship.
    Placement { player: Player, class: ShipClass },
    /// A cell to shoot at.
    Shot { player: Player },
}

/// Announcements made while a match runs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Report {
    /// A player is asked for input.
    Prompt(Request),
    /// A ship was placed.
    Placed { player: Player, class: ShipClass },
    /// A placement request or shot could not be used and will be asked for again.
    Rejected(PlacementError),
    /// A shot was fired. `ship` names the ship that was struck, if any.
    Shot {
        player: Player,
        at: Coordinate,
        outcome: Outcome,
        ship: Option<String>,
    },
    /// The device should be passed to the given player, who acknowledges with a line of
    /// input.
    HandOff(Player),
    /// The given player acknowledged a hand-off and is about to be shown their board.
    Ready(Player),
    /// The match is over.
    Winner(Player),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Report::Prompt(Request::Placement { player, class }) => write!(
                f,
                "{}, place your {} ({} cells), e.g. A1 A{}:",
                player,
                class,
                class.len(),
                class.len()
            ),
            Report::Prompt(Request::Shot { player }) => {
                write!(f, "{}, choose a target:", player)
            }
            Report::Placed { player, class } => write!(f, "{} placed their {}.", player, class),
            Report::Rejected(err) => write!(f, "{} Try again.", err),
            Report::Shot {
                player,
                at,
                outcome,
                ship,
            } => {
                write!(f, "{} fires at {}. {}", player, at, outcome)?;
                if let (Outcome::Sunk, Some(ship)) | (Outcome::Won, Some(ship)) = (outcome, ship)
                {
                    write!(f, " The {} went down.", ship)?;
                }
                Ok(())
            }
            Report::HandOff(player) => {
                write!(f, "Pass the device to {}, then press Enter.", player)
            }
            Report::Ready(player) => write!(f, "{} has the device.", player),
            Report::Winner(player) => write!(f, "{} wins!", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_reader_strips_line_endings() {
        let mut input = LineReader::new(&b"A1 A5\r\nB2\n\nlast"[..]);
        assert_eq!(input.next_line().unwrap().as_deref(), Some("A1 A5"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("B2"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn scripted_input_runs_dry() {
        let mut input = Scripted::new(vec!["A1"]);
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.next_line().unwrap().as_deref(), Some("A1"));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn board_view_defaults_to_fog() {
        let a1: Coordinate = "A1".parse().unwrap();
        let mut cells = HashMap::new();
        cells.insert(a1, CellState::Hit);
        let view = BoardView {
            owner: Player::P1,
            reveal: false,
            cells,
        };
        let rows: Vec<(char, Vec<CellState>)> =
            view.rows().map(|(letter, row)| (letter, row.collect())).collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].0, 'A');
        assert_eq!(rows[9].0, 'J');
        assert_eq!(rows[0].1[0], CellState::Hit);
        assert_eq!(rows[0].1[1], CellState::Unknown);
    }

    #[test]
    fn shot_reports_name_sunk_ships() {
        let report = Report::Shot {
            player: Player::P2,
            at: "C3".parse().unwrap(),
            outcome: Outcome::Sunk,
            ship: Some("Cruiser".to_owned()),
        };
        assert_eq!(
            report.to_string(),
            "Player 2 fires at C3. Hit and sunk! The Cruiser went down."
        );
        let report = Report::Shot {
            player: Player::P1,
            at: "C3".parse().unwrap(),
            outcome: Outcome::Hit,
            ship: Some("Cruiser".to_owned()),
        };
        assert_eq!(report.to_string(), "Player 1 fires at C3. Hit!");
        let report = Report::Shot {
            player: Player::P1,
            at: "D4".parse().unwrap(),
            outcome: Outcome::Miss,
            ship: None,
        };
        assert_eq!(report.to_string(), "Player 1 fires at D4. Miss.");
    }
}
