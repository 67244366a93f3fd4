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
//! Sequencing of a whole match: both setup phases, then alternating shots until one
//! fleet is gone.
//!
//! A [`Match`] owns both boards and talks to the outside world only through an
//! [`Input`] and an [`Output`]. Each call to [`Match::step`] consumes one input line.
//!
//! With [`MatchConfig::hand_off`] set, whenever the device moves to the other player the
//! match announces a [`Report::HandOff`] and the next step only waits for a line of
//! acknowledgement. Nothing belonging to the incoming player is shown before then.
use std::fmt;

use log::{info, trace};

use crate::{
    board::{parse_placement, Board, Coordinate, Outcome},
    ships::{Ship, ShipClass},
};

pub use self::{
    errors::MatchError,
    io::{BoardView, Input, LineReader, Output, Report, Request, Scripted},
};

mod errors;
pub mod io;

/// The two players of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    /// The player who places ships and shoots first.
    P1,
    /// The player who goes second.
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Player::P1 => "Player 1",
            Player::P2 => "Player 2",
        })
    }
}

/// Where a match currently stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchState {
    /// `player` is placing the ship at position `slot` of [`ShipClass::ALL`].
    Setup { player: Player, slot: usize },
    /// `active` is shooting at the other player's board.
    Play { active: Player },
    /// The match is over.
    Finished { winner: Player },
}

/// Options controlling what a [`Match`] shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct MatchConfig {
    /// Show the shooting player's own board, ships revealed, before each shot.
    pub show_own_board: bool,
    /// Show both boards with ships revealed once the match is over.
    pub reveal_on_finish: bool,
    /// Wait for the device to be passed whenever the other player is up next.
    pub hand_off: bool,
}

/// A match between two players.
pub struct Match<I, O> {
    /// Boards, player 1 first.
    boards: [Board; 2],

    /// Whether each player's fleet is complete.
    ready: [bool; 2],

    state: MatchState,

    /// Player the device was handed to, until they acknowledge it.
    hand_off_to: Option<Player>,

    input: I,

    output: O,

    config: MatchConfig,
}

impl<I: Input, O: Output> Match<I, O> {
    /// Construct a match with two empty boards, waiting for player 1 to place ships.
    pub fn new(input: I, output: O, config: MatchConfig) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            ready: [false; 2],
            state: MatchState::Setup {
                player: Player::P1,
                slot: 0,
            },
            hand_off_to: None,
            input,
            output,
            config,
        }
    }

    /// Give `player` an already populated board, skipping their setup phase. Meant to be
    /// used before the first [`step`](Match::step); once a player has started placing
    /// ships, this only replaces their board.
    pub fn with_fleet(mut self, player: Player, board: Board) -> Self {
        self.boards[player.index()] = board;
        self.ready[player.index()] = true;
        if let MatchState::Setup { slot: 0, .. } = self.state {
            self.state = self.setup_after(None);
        }
        self
    }

    /// Current state of the match.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Get the board belonging to `player`.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// The winner, once the match is over.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Unwrap the input and output.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Play until one player wins, returning the winner.
    pub fn run(&mut self) -> Result<Player, MatchError> {
        loop {
            if let MatchState::Finished { winner } = self.step()? {
                return Ok(winner);
            }
        }
    }

    /// Handle a single input line and return the resulting state. Does nothing once the
    /// match is finished.
    pub fn step(&mut self) -> Result<MatchState, MatchError> {
        if let Some(player) = self.hand_off_to {
            self.read_line()?;
            self.hand_off_to = None;
            trace!("{} has the device", player);
            self.output.report(&Report::Ready(player))?;
            return Ok(self.state);
        }
        match self.state {
            MatchState::Setup { player, slot } => self.setup_step(player, slot)?,
            MatchState::Play { active } => self.play_step(active)?,
            MatchState::Finished { .. } => {}
        }
        Ok(self.state)
    }

    /// Ask `player` to place the ship at `slot` of the roster.
    fn setup_step(&mut self, player: Player, slot: usize) -> Result<(), MatchError> {
        let class = ShipClass::ALL[slot];
        self.show(player, true)?;
        self.output
            .report(&Report::Prompt(Request::Placement { player, class }))?;
        let line = self.read_line()?;
        let board = &mut self.boards[player.index()];
        let placed = parse_placement(&line)
            .and_then(|(front, back)| Ship::of_class(class, front, back))
            .and_then(|ship| board.place(ship));
        match placed {
            Ok(()) => {
                self.output.report(&Report::Placed { player, class })?;
                let next = if slot + 1 < ShipClass::ALL.len() {
                    MatchState::Setup {
                        player,
                        slot: slot + 1,
                    }
                } else {
                    self.ready[player.index()] = true;
                    self.setup_after(Some(player))
                };
                trace!("{} placed {}, now {:?}", player, class, next);
                self.advance(player, next)?;
            }
            Err(err) => {
                trace!("{} placement of {} rejected: {:?}", player, class, err);
                self.output.report(&Report::Rejected(err))?;
            }
        }
        Ok(())
    }

    /// Ask `active` for a shot at the opponent's board.
    fn play_step(&mut self, active: Player) -> Result<(), MatchError> {
        let target = active.opponent();
        if self.config.show_own_board {
            self.show(active, true)?;
        }
        self.show(target, false)?;
        self.output
            .report(&Report::Prompt(Request::Shot { player: active }))?;
        let line = self.read_line()?;
        let at = match line.parse::<Coordinate>() {
            Ok(at) => at,
            Err(err) => {
                trace!("{} shot rejected: {:?}", active, err);
                self.output.report(&Report::Rejected(err))?;
                return Ok(());
            }
        };
        let board = &mut self.boards[target.index()];
        let outcome = board.resolve_shot(at);
        let ship = board.ship_at(&at).map(|ship| ship.name().to_owned());
        self.output.report(&Report::Shot {
            player: active,
            at,
            outcome,
            ship,
        })?;
        if outcome == Outcome::Won {
            self.state = MatchState::Finished { winner: active };
            info!("{} won the match", active);
            self.output.report(&Report::Winner(active))?;
            if self.config.reveal_on_finish {
                self.show(Player::P1, true)?;
                self.show(Player::P2, true)?;
            }
        } else {
            trace!("turn passes to {}", target);
            self.advance(active, MatchState::Play { active: target })?;
        }
        Ok(())
    }

    /// Move to `next` once `from` is done acting. Starts a hand-off if the player who
    /// acts in `next` is not `from`.
    fn advance(&mut self, from: Player, next: MatchState) -> Result<(), MatchError> {
        self.state = next;
        let to = match next {
            MatchState::Setup { player, .. } => player,
            MatchState::Play { active } => active,
            MatchState::Finished { .. } => return Ok(()),
        };
        if self.config.hand_off && to != from {
            self.output.report(&Report::HandOff(to))?;
            self.hand_off_to = Some(to);
        }
        Ok(())
    }

    /// State that follows the setup of `done`, skipping players whose fleets are already
    /// complete. `None` means no setup has finished yet.
    fn setup_after(&self, done: Option<Player>) -> MatchState {
        let pending: &[Player] = match done {
            None => &[Player::P1, Player::P2],
            Some(Player::P1) => &[Player::P2],
            Some(Player::P2) => &[],
        };
        pending
            .iter()
            .copied()
            .find(|player| !self.ready[player.index()])
            .map_or(MatchState::Play { active: Player::P1 }, |player| {
                MatchState::Setup { player, slot: 0 }
            })
    }

    fn show(&mut self, owner: Player, reveal: bool) -> Result<(), MatchError> {
        let view = BoardView {
            owner,
            reveal,
            cells: self.boards[owner.index()].cell_states(reveal),
        };
        self.output.show_board(&view)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, MatchError> {
        let state = self.state;
        self.input
            .next_line()?
            .ok_or(MatchError::InputExhausted { state })
    }
}
