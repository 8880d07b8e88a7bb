use std::{
    collections::HashSet,
    env,
    error::Error,
    fmt, fs,
    io::{self, Read},
    process,
};

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{debug, LevelFilter};
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};

use fleetsim::{
    board::CellRef,
    game::{ActionOutcome, ReplayEvent},
    parse::{OperationSpec, Scenario, ShipSpec},
    Action, Board, GameModel, Heading, Ship,
};

fn main() {
    let matches = App::new("Fleet")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Replays naval movement and combat scenarios on a square grid.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log every action when RUST_LOG is not set"),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("replay a scenario and print the resulting fleet")
                .arg(
                    Arg::with_name("INPUT")
                        .help("scenario file to read; reads stdin if omitted or -")
                        .index(1),
                )
                .arg(
                    Arg::with_name("board")
                        .short("b")
                        .long("board")
                        .help("also print the final board"),
                )
                .arg(
                    Arg::with_name("trace")
                        .short("t")
                        .long("trace")
                        .help("print every action as it is applied"),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("print a random scenario")
                .arg(
                    Arg::with_name("size")
                        .short("s")
                        .long("size")
                        .value_name("SIZE")
                        .default_value("10")
                        .help("side length of the board"),
                )
                .arg(
                    Arg::with_name("ships")
                        .short("n")
                        .long("ships")
                        .value_name("SHIPS")
                        .default_value("3")
                        .help("number of ships to place"),
                )
                .arg(
                    Arg::with_name("operations")
                        .short("o")
                        .long("operations")
                        .value_name("OPERATIONS")
                        .default_value("5")
                        .help("number of operations to write"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("SEED")
                        .takes_value(true)
                        .help("seed for reproducible output"),
                ),
        )
        .get_matches();

    init_logging(matches.is_present("verbose"));

    let result = match matches.subcommand() {
        ("run", Some(sub)) => run(sub),
        ("generate", Some(sub)) => generate(sub),
        _ => unreachable!(),
    };
    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` wins over the verbose flag.
fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) if verbose => {
            builder.filter_module("fleetsim", LevelFilter::Debug);
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Error);
        }
    }
    builder.init();
}

/// Read the scenario from the given path, or stdin for `None` and `-`.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path),
    }
}

/// Replay a scenario and print the fleet.
fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = read_input(matches.value_of("INPUT"))?;
    let scenario: Scenario = input.parse()?;
    let model = GameModel::from_scenario(&scenario)?;
    debug!("replaying {} operations", model.operations().len());

    let mut replay = model.replay();
    let trace = matches.is_present("trace");
    let mut shown = 0;
    let result = loop {
        let step = replay.step();
        if trace {
            for event in &replay.history()[shown..] {
                println!("{}", EventLine(event));
            }
            shown = replay.history().len();
        }
        match step {
            Ok(fleetsim::ReplayState::Completed) => break Ok(()),
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    result?;

    let board = replay.into_board();
    for ship in board.iter_ships() {
        println!("{}", ShipLine(ship));
    }
    if matches.is_present("board") {
        println!();
        show_board(&board);
    }
    Ok(())
}

/// Print a random scenario.
fn generate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let ships = value_t!(matches, "ships", usize).unwrap_or_else(|e| e.exit());
    let operations = value_t!(matches, "operations", usize).unwrap_or_else(|e| e.exit());
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };
    let scenario = random_scenario(&mut rng, size, ships, operations)?;
    print!("{}", scenario);
    Ok(())
}

/// Build a scenario with distinct ship starts and operations that mostly target them.
fn random_scenario(
    rng: &mut impl Rng,
    size: usize,
    ships: usize,
    operations: usize,
) -> Result<Scenario, Box<dyn Error>> {
    if size == 0 {
        return Err("board size must be > 0".into());
    }
    if ships > size.saturating_mul(size) {
        return Err(format!("{} ships do not fit on a {}x{} board", ships, size, size).into());
    }
    let coords = Uniform::new(0, size);
    let mut used = HashSet::with_capacity(ships);
    let mut placed = Vec::with_capacity(ships);
    while placed.len() < ships {
        let (x, y) = (rng.sample(coords), rng.sample(coords));
        if used.insert((x, y)) {
            let heading: Heading = rng.gen();
            placed.push(ShipSpec { x, y, heading });
        }
    }

    const TOKENS: [Action; 3] = [Action::Move, Action::TurnLeft, Action::TurnRight];
    let ops = (0..operations)
        .map(|_| {
            let (x, y) = match placed.len() {
                0 => (rng.sample(coords), rng.sample(coords)),
                n if rng.gen_bool(0.75) => {
                    let ship = placed[rng.gen_range(0, n)];
                    (ship.x, ship.y)
                }
                _ => (rng.sample(coords), rng.sample(coords)),
            };
            let actions = match rng.gen_range(0, 5) {
                0 => vec![Action::Shoot],
                len => (0..len).map(|_| TOKENS[rng.gen_range(0, TOKENS.len())]).collect(),
            };
            OperationSpec { x, y, actions }
        })
        .collect();

    Ok(Scenario {
        board_size: size as i64,
        ships: placed,
        operations: ops,
    })
}

/// Show the board by printing the grid.
fn show_board(board: &Board) {
    enum BoardCell {
        Empty,
        Afloat(Heading),
        Sunk,
        Stacked(usize),
    }
    impl fmt::Display for BoardCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                BoardCell::Empty => f.pad("~~"),
                BoardCell::Afloat(heading) => fmt::Display::fmt(heading, f),
                BoardCell::Sunk => f.pad("X"),
                BoardCell::Stacked(count) => f.pad(&count.to_string()),
            }
        }
    }
    let classify = |cell: CellRef| match cell.ids().len() {
        0 => BoardCell::Empty,
        1 => match cell.first() {
            Some(ship) if ship.sunk() => BoardCell::Sunk,
            Some(ship) => BoardCell::Afloat(ship.heading()),
            None => BoardCell::Empty,
        },
        n => BoardCell::Stacked(n),
    };

    print!("   ");
    for i in 0..board.size() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in board.iter_board().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", classify(cell));
        }
        println!();
    }
}

/// Display helper that prints a ship the way it is written in a scenario, marking it if
/// it was sunk.
struct ShipLine<'a>(&'a Ship);

impl fmt::Display for ShipLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let coord = self.0.coord();
        write!(f, "({}, {}, {})", coord.x, coord.y, self.0.heading())?;
        if self.0.sunk() {
            f.write_str(" SUNK")?;
        }
        Ok(())
    }
}

/// Display helper for a single replay event.
struct EventLine<'a>(&'a ReplayEvent);

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let event = self.0;
        write!(f, "[{}.{}] ship {} ", event.operation, event.action, event.ship())?;
        match event.outcome {
            ActionOutcome::Moved { from, to, .. } => write!(f, "moved {} -> {}", from, to),
            ActionOutcome::Turned { from, to, .. } => write!(f, "turned {} -> {}", from, to),
            ActionOutcome::Sunk { .. } => f.write_str("sunk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scenarios_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        let scenario = random_scenario(&mut rng, 4, 16, 20).unwrap();
        let starts: HashSet<_> = scenario.ships.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(starts.len(), 16);
        assert_eq!(scenario.operations.len(), 20);
        assert!(scenario
            .operations
            .iter()
            .all(|op| op.x < 4 && op.y < 4 && !op.actions.is_empty()));

        let reparsed: Scenario = scenario.to_string().parse().unwrap();
        assert_eq!(reparsed, scenario);
        GameModel::from_scenario(&reparsed).unwrap();
    }

    #[test]
    fn too_many_ships_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_scenario(&mut rng, 2, 5, 0).is_err());
        assert!(random_scenario(&mut rng, 0, 0, 0).is_err());
    }

    #[test]
    fn ship_lines() {
        let board = GameModel::from_scenario(&"3\n(0, 0, N) (1, 1, E)\n(1, 1)".parse().unwrap())
            .unwrap()
            .run()
            .unwrap();
        let lines: Vec<_> = board.iter_ships().map(|s| ShipLine(s).to_string()).collect();
        assert_eq!(lines, vec!["(0, 0, N)", "(1, 1, E) SUNK"]);
    }
}
