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
use std::{
    fs::File,
    io::{self, BufReader, Write},
};

use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use gridbattle::{
    board::{Board, GRID_SIZE},
    game::{
        BoardView, Input, LineReader, Match, MatchConfig, MatchError, Output, Player, Report,
    },
};

mod logging;

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line battleship on a lettered 10x10 grid.")
        .arg(
            Arg::with_name("script")
                .short("s")
                .long("script")
                .value_name("FILE")
                .help("read commands from a file instead of the terminal")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .value_name("PLAYER")
                .help("place the given player's fleet randomly")
                .takes_value(true)
                .possible_values(&["p1", "p2", "both"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show both fleets when the match ends"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more detail to stderr, may be repeated"),
        )
        .get_matches();

    logging::init_logging(matches.occurrences_of("verbose"));

    let script = matches.value_of("script");
    let config = MatchConfig {
        show_own_board: true,
        reveal_on_finish: matches.is_present("reveal"),
        hand_off: script.is_none(),
    };
    let stdout = io::stdout();
    let output = Terminal::new(stdout.lock());
    match script {
        Some(path) => {
            info!("reading commands from {}", path);
            let input = Console::new(LineReader::new(BufReader::new(File::open(path)?)), true);
            play(input, output, config, &matches)
        }
        None => {
            let stdin = io::stdin();
            let input = Console::new(LineReader::new(stdin.lock()), false);
            println!("Type help or ? for commands.");
            play(input, output, config, &matches)
        }
    }
}

/// Players whose fleets should be placed randomly, based on the cli args.
fn random_players(matches: &ArgMatches) -> Vec<Player> {
    match matches
        .value_of("random")
        .map(|v| v.to_ascii_lowercase())
        .as_deref()
    {
        Some("p1") => vec![Player::P1],
        Some("p2") => vec![Player::P2],
        Some("both") => vec![Player::P1, Player::P2],
        _ => Vec::new(),
    }
}

/// Run the match to completion.
fn play(
    input: impl Input,
    output: impl Output,
    config: MatchConfig,
    matches: &ArgMatches,
) -> io::Result<()> {
    let mut game = Match::new(input, output, config);
    let mut rng = rand::thread_rng();
    for player in random_players(matches) {
        let board = Board::random_fleet(&mut rng)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        info!("{} fleet placed randomly", player);
        game = game.with_fleet(player, board);
    }
    match game.run() {
        Ok(winner) => {
            info!("match finished, {} won", winner);
            Ok(())
        }
        Err(MatchError::InputExhausted { state }) => {
            warn!("input ended in state {:?}", state);
            println!();
            println!("Input ended, the match is abandoned.");
            Ok(())
        }
        Err(MatchError::Io(err)) => Err(err),
    }
}

/// Input wrapper that handles commands meant for the program rather than the match.
struct Console<I> {
    inner: I,
    /// Print every line read, so scripted games read like interactive ones.
    echo: bool,
}

impl<I> Console<I> {
    fn new(inner: I, echo: bool) -> Self {
        Self { inner, echo }
    }
}

impl<I: Input> Input for Console<I> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        static COMMAND: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?i)\s*(?P<cmd>help|\?|quit|exit)\s*$").unwrap());

        loop {
            let line = match self.inner.next_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            if self.echo {
                println!("{}", line);
            }
            match COMMAND
                .captures(&line)
                .map(|captures| captures["cmd"].to_ascii_lowercase())
                .as_deref()
            {
                Some("quit") | Some("exit") => return Ok(None),
                Some(_) => print_help(),
                None => return Ok(Some(line)),
            }
        }
    }
}

fn print_help() {
    println!(
        "Coordinates are a row letter A-J followed by a column 1-10, like B7.
    placing ships   give both ends separated by a space, like A1 A5.
                    Ships may not touch each other, not even at the corners.
    shooting        give a single coordinate, like J10.
    help, ?         show this message.
    quit, exit      abandon the match.

Board legend:
    ~   open water or unknown
    #   your ship
    X   hit
    o   miss"
    );
}

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// [`Output`] that draws boards and reports on a terminal.
struct Terminal<W> {
    out: W,
}

impl<W> Terminal<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Output for Terminal<W> {
    fn show_board(&mut self, view: &BoardView) -> io::Result<()> {
        writeln!(self.out)?;
        if view.reveal {
            writeln!(self.out, "{}'s fleet:", view.owner)?;
        } else {
            writeln!(self.out, "{}'s waters:", view.owner)?;
        }
        write!(self.out, "   ")?;
        for col in 1..=GRID_SIZE {
            write!(self.out, "{:^3}", col)?;
        }
        writeln!(self.out)?;
        for (letter, row) in view.rows() {
            write!(self.out, "{:>2} ", letter)?;
            for cell in row {
                write!(self.out, "{:^3}", cell)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn report(&mut self, report: &Report) -> io::Result<()> {
        match report {
            Report::Prompt(_) => write!(self.out, "{} ", report)?,
            Report::HandOff(_) => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", "=".repeat(3 * GRID_SIZE + 3))?;
                writeln!(self.out, "{}", report)?;
                writeln!(self.out, "{}", "=".repeat(3 * GRID_SIZE + 3))?;
            }
            // Wipe the previous player's boards before the next one is drawn.
            Report::Ready(_) => {
                write!(self.out, "{}", CLEAR_SCREEN)?;
                writeln!(self.out, "{}", report)?;
            }
            _ => writeln!(self.out, "{}", report)?,
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbattle::game::Scripted;

    #[test]
    fn console_swallows_help_and_stops_on_quit() {
        let mut console = Console::new(
            Scripted::new(vec!["help", "A1 A5", " ? ", "QUIT", "B1"]),
            false,
        );
        assert_eq!(console.next_line().unwrap().as_deref(), Some("A1 A5"));
        assert_eq!(console.next_line().unwrap(), None);
    }

    #[test]
    fn terminal_draws_a_labelled_grid() {
        let mut term = Terminal::new(Vec::new());
        let mut cells = std::collections::HashMap::new();
        cells.insert("B3".parse().unwrap(), gridbattle::board::CellState::Miss);
        term.show_board(&BoardView {
            owner: Player::P2,
            reveal: false,
            cells,
        })
        .unwrap();
        let text = String::from_utf8(term.out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Player 2's waters:");
        assert!(lines[2].trim_end().ends_with("10"));
        assert_eq!(lines.len(), 3 + GRID_SIZE);
        assert!(lines[4].starts_with(" B  ~  ~  o "));
    }

    #[test]
    fn terminal_clears_once_the_device_is_taken() {
        let mut term = Terminal::new(Vec::new());
        term.report(&Report::HandOff(Player::P2)).unwrap();
        let banner = String::from_utf8(term.out.clone()).unwrap();
        assert!(banner.contains("Pass the device to Player 2, then press Enter."));
        assert!(!banner.contains(CLEAR_SCREEN));

        term.out.clear();
        term.report(&Report::Ready(Player::P2)).unwrap();
        let text = String::from_utf8(term.out).unwrap();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.ends_with("Player 2 has the device.\n"));
    }
}
