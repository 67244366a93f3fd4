use gridbattle::{
    board::{Board, CannotPlaceReason, Coordinate, Outcome},
    game::{
        BoardView, Match, MatchConfig, MatchError, MatchState, Output, Player, Report, Scripted,
    },
    ships::Ship,
};
use std::io;

fn c(text: &str) -> Coordinate {
    text.parse().unwrap()
}

#[test]
fn two_cruisers_sink_then_win() {
    let mut board = Board::new();
    board
        .place(Ship::new(c("A1"), c("A3"), 3, "Cruiser").unwrap())
        .unwrap();
    board
        .place(Ship::new(c("C1"), c("C3"), 3, "Submarine").unwrap())
        .unwrap();

    let shots: Vec<Outcome> = ["A1", "A2", "A3", "D1", "C1", "C2", "C3"]
        .iter()
        .map(|at| board.resolve_shot(c(at)))
        .collect();
    assert_eq!(
        shots,
        vec![
            Outcome::Hit,
            Outcome::Hit,
            Outcome::Sunk,
            Outcome::Miss,
            Outcome::Hit,
            Outcome::Hit,
            Outcome::Won,
        ]
    );
}

#[test]
fn diagonal_ship_is_rejected_for_any_length() {
    for len in 0..=6 {
        let err = Ship::new(c("A1"), c("B2"), len, "Diagonal").unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Diagonal);
    }
}

#[test]
fn adjacent_ship_is_rejected_but_gap_is_fine() {
    let mut board = Board::new();
    board
        .place(Ship::new(c("A1"), c("A2"), 2, "Destroyer").unwrap())
        .unwrap();
    let err = board
        .place(Ship::new(c("B1"), c("B2"), 2, "Patrol").unwrap())
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Touching);
    board
        .place(Ship::new(c("C1"), c("C2"), 2, "Patrol").unwrap())
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

/// Output that just counts what it sees.
#[derive(Default)]
struct Tally {
    boards: usize,
    rejected: usize,
    shots: Vec<(Player, Outcome)>,
}

impl Output for Tally {
    fn show_board(&mut self, _view: &BoardView) -> io::Result<()> {
        self.boards += 1;
        Ok(())
    }

    fn report(&mut self, report: &Report) -> io::Result<()> {
        match report {
            Report::Rejected(_) => self.rejected += 1,
            Report::Shot {
                player, outcome, ..
            } => self.shots.push((*player, *outcome)),
            _ => {}
        }
        Ok(())
    }
}

const FLEET: &[&str] = &["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];

/// Every cell of `FLEET`, in an order that sinks ships one after another.
fn fleet_cells() -> Vec<String> {
    FLEET
        .iter()
        .flat_map(|line| {
            let mut ends = line.split(' ').map(c);
            let (front, back) = (ends.next().unwrap(), ends.next().unwrap());
            let mut cells: Vec<_> = Coordinate::between(front, back, 0).into_iter().collect();
            cells.sort();
            cells
        })
        .map(|coord| coord.to_string())
        .collect()
}

#[test]
fn scripted_match_from_setup_to_victory() {
    let mut lines: Vec<String> = Vec::new();
    // Player 1 fumbles once, then places the fleet.
    lines.push("A1 A6".to_owned());
    lines.extend(FLEET.iter().map(|s| s.to_string()));
    // Player 2 places the same layout.
    lines.extend(FLEET.iter().map(|s| s.to_string()));
    // Player 1 hits every cell, player 2 always misses in the J row.
    let misses = (1..=10).map(|col| format!("J{}", col)).cycle();
    for (hit, miss) in fleet_cells().into_iter().zip(misses) {
        lines.push(hit);
        lines.push(miss);
    }

    let mut game = Match::new(Scripted::new(lines), Tally::default(), MatchConfig::default());
    assert_eq!(game.run().unwrap(), Player::P1);

    let (input, output) = game.into_inner();
    // The last reply from player 2 is never read.
    assert_eq!(input.remaining(), 1);
    assert_eq!(output.rejected, 1);
    let p1: Vec<Outcome> = output
        .shots
        .iter()
        .filter(|(player, _)| *player == Player::P1)
        .map(|&(_, outcome)| outcome)
        .collect();
    assert_eq!(p1.len(), 17);
    assert_eq!(p1.iter().filter(|&&o| o == Outcome::Sunk).count(), 4);
    assert_eq!(p1.last(), Some(&Outcome::Won));
    assert!(output
        .shots
        .iter()
        .filter(|(player, _)| *player == Player::P2)
        .all(|&(_, outcome)| outcome == Outcome::Miss));
}

#[test]
fn running_out_of_input_mid_match() {
    let lines: Vec<&str> = FLEET.iter().chain(FLEET.iter()).copied().collect();
    let mut game = Match::new(Scripted::new(lines), Tally::default(), MatchConfig::default());
    match game.run() {
        Err(MatchError::InputExhausted { state }) => {
            assert_eq!(state, MatchState::Play { active: Player::P1 });
        }
        other => panic!("unexpected result {:?}", other),
    }
}
