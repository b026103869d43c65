use std::{
    error::Error,
    io::{self, Stdin, Write},
};

use clap::{App, Arg};
use once_cell::sync::Lazy;
use regex::Regex;

use flotilla::{
    board::{AttackOutcome, Coordinate, Grid},
    game::{Match, Player, Side},
    ships::{Orientation, FLEET},
    strategy::{PlacementStrategy, RandomPlacement, RandomTargeter, TargetStrategy},
};

fn main() -> Result<(), Box<dyn Error>> {
    flotilla::init_logging();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Simple command line battleship game.")
        .arg(
            Arg::with_name("players")
                .short("p")
                .long("players")
                .value_name("PLAYERS")
                .help("number of human players")
                .takes_value(true)
                .possible_values(&["1", "2"]),
        )
        .get_matches();

    let mut input = InputReader::new();

    let players = match matches.value_of("players") {
        Some("1") => 1,
        Some("2") => 2,
        Some(_) => unreachable!(),
        None => input.read_input("How many players? (1/2)", |line| match line {
            "1" => Some(1),
            "2" => Some(2),
            _ => {
                println!("Enter 1 or 2.");
                None
            }
        })?,
    };

    let mut game = if players == 1 {
        Match::new(
            human_side("Player 1"),
            Side::new(
                "The Computer",
                Box::new(RandomPlacement::new(rand::thread_rng())),
                Box::new(RandomTargeter::new(rand::thread_rng())),
            ),
        )
    } else {
        Match::new(human_side("Player 1"), human_side("Player 2"))
    };

    game.run_setup_phase()?;
    input.read_input(
        "The fleets are ready... it's time to play. Press enter to begin!",
        |_| Some(()),
    )?;

    loop {
        println!("Current Game Stats:");
        for &player in &[Player::P1, Player::P2] {
            println!("{}", stats_line(game.side(player)));
        }
        println!();

        let report = game.run_next_turn()?;
        let name = game.side(report.attacker).name();
        let Coordinate { x, y } = report.target;
        match report.outcome {
            AttackOutcome::Hit => println!("{} hit a ship at ({}, {})!", name, x, y),
            AttackOutcome::Miss => println!("{} missed at ({}, {}).", name, x, y),
            AttackOutcome::AlreadyResolved => {
                println!("{} attacked ({}, {}) again; nothing there changed.", name, x, y)
            }
        }

        if let Some(winner) = report.winner {
            println!("Game over! {} wins!", game.side(winner).name());
            break;
        }
    }
    Ok(())
}

/// Build a side whose placement and targeting are both driven by prompts.
fn human_side(name: &str) -> Side {
    Side::new(
        name,
        Box::new(HumanPlacement::new(name)),
        Box::new(HumanTargeter::new(name)),
    )
}

/// Render one side's line of the pre-turn stats block.
fn stats_line(side: &Side) -> String {
    format!("{} Stats - {}", side.name(), side.stats())
}

/// Read an `x,y` coordinate, re-prompting until both values parse and are in
/// range. The single-digit pattern guarantees the core only ever sees
/// coordinates in [0, 9].
fn read_coordinate(input: &mut InputReader, prompt: &str) -> io::Result<Coordinate> {
    static COORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9])\s*,\s*([0-9])$").unwrap());
    input.read_input(prompt, |line| match COORD.captures(line) {
        Some(caps) => Some(Coordinate::new(
            caps[1].parse().unwrap(),
            caps[2].parse().unwrap(),
        )),
        None => {
            println!("Enter a position in the form x,y where x and y are in the range 0-9.");
            None
        }
    })
}

/// Interactive fleet placement driven by prompts on stdin.
struct HumanPlacement {
    name: String,
    input: InputReader,
}

impl HumanPlacement {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input: InputReader::new(),
        }
    }
}

impl PlacementStrategy for HumanPlacement {
    fn place_fleet(&mut self, grid: &mut Grid) -> io::Result<()> {
        self.input.read_input(
            &format!(
                "{}: are you ready to position your fleet? Press enter to begin!",
                self.name
            ),
            |_| Some(()),
        )?;
        for &ship in FLEET.iter() {
            println!("{}", grid.full_view());
            println!(
                "You need to position a {} of length {} on the board above.",
                ship,
                ship.length()
            );
            let mut ship = ship;
            loop {
                let orientation = self.input.read_input_lower(
                    "Would you like a vertical or horizontal orientation? (v/h)",
                    |line| match line {
                        "v" | "vertical" => Some(Orientation::Vertical),
                        "h" | "horizontal" => Some(Orientation::Horizontal),
                        _ => {
                            println!("You must enter a 'v' or an 'h'. Please try again.");
                            None
                        }
                    },
                )?;
                let origin = read_coordinate(
                    &mut self.input,
                    "Enter the top-left position of the ship as x,y (e.g. 1,3):",
                )?;
                match grid.add_ship(ship, origin, orientation) {
                    Ok(()) => break,
                    Err(err) => {
                        println!(
                            "You must choose a position that is on the board and doesn't \
                             intersect any other ship."
                        );
                        ship = err.into_ship();
                    }
                }
            }
        }
        println!("Your fleet is ready to play. Your board is positioned as follows:");
        println!("{}", grid.full_view());
        Ok(())
    }
}

/// Interactive target selection. Attacking an already-resolved cell is legal
/// input; it simply wastes the turn.
struct HumanTargeter {
    name: String,
    input: InputReader,
}

impl HumanTargeter {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input: InputReader::new(),
        }
    }
}

impl TargetStrategy for HumanTargeter {
    fn select_target(&mut self, own: &Grid, opponent: &Grid) -> io::Result<Coordinate> {
        println!("{}'s board:", self.name);
        println!("{}", own.full_view());
        println!();
        println!("Your view of the opponent's board:");
        println!("{}", opponent.public_view());
        read_coordinate(
            &mut self.input,
            &format!(
                "{}, enter the position you would like to attack (x,y):",
                self.name
            ),
        )
    }
}

/// Helper to read input from the player.
///
/// The stdin lock is taken per line rather than held, so the main prompt loop
/// and the interactive strategies can each own a reader on the same thread.
struct InputReader {
    read: Stdin,
    buf: String,
}

impl InputReader {
    fn new() -> Self {
        Self {
            read: io::stdin(),
            buf: String::new(),
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    /// Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
