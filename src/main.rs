//! Rubik's Cube Cross Solver
//!
//! Scrambles a cube, applies notation to it, solves the white cross with the
//! beginner's method and steps through the solution in an interactive 3D
//! viewer.

mod visualization;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::info;

use rubiks::grid::format_net;
use rubiks::moves::{format_moves, parse_moves};
use rubiks::scramble::{inverse, Scrambler};
use rubiks::solver::DEFAULT_STEP_LIMIT;
use rubiks::{CubeError, FaceletState, Move, Solution, Solver};

/// Scrambles, manipulates and solves a Rubik's Cube.
#[derive(Parser)]
#[command(name = "rubiks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Clone)]
struct ScrambleArgs {
    /// Number of moves in a generated scramble.
    #[arg(short, long, default_value_t = 50)]
    length: usize,
    /// Seed for a reproducible scramble.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Default for ScrambleArgs {
    fn default() -> Self {
        Self {
            length: 50,
            seed: None,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print a random scramble and its inverse.
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Tokens the scramble must never use, e.g. "x x' y y'".
        #[arg(long, default_value = "")]
        avoid: String,
    },
    /// Apply moves to a cube and print the resulting state.
    Apply {
        /// Space-separated moves, e.g. "R U R' U'".
        moves: String,
        /// Starting 54-facelet cube string (defaults to solved).
        #[arg(long)]
        state: Option<String>,
    },
    /// Solve the white cross and print the phase log.
    Solve {
        /// 54-facelet cube string to solve.
        #[arg(long, conflicts_with = "moves")]
        state: Option<String>,
        /// Moves to apply to a solved cube before solving.
        #[arg(long)]
        moves: Option<String>,
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Maximum number of solver loop iterations.
        #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
        step_limit: usize,
    },
    /// Step through the solution of a scramble in the 3D viewer.
    Display {
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Scramble { scramble, avoid }) => run_scramble(&scramble, &avoid),
        Some(Command::Apply { moves, state }) => run_apply(&moves, state.as_deref()),
        Some(Command::Solve {
            state,
            moves,
            scramble,
            step_limit,
        }) => run_solve(state.as_deref(), moves.as_deref(), &scramble, step_limit),
        Some(Command::Display { scramble }) => run_display(&scramble),
        // default: scramble, solve and display
        None => run_display(&ScrambleArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn scrambler(args: &ScrambleArgs) -> Scrambler {
    match args.seed {
        Some(seed) => Scrambler::with_seed(seed),
        None => Scrambler::new(),
    }
}

/// Generates a scramble and the state it produces from solved.
fn scrambled_cube(args: &ScrambleArgs) -> Result<(Vec<Move>, FaceletState), CubeError> {
    let scramble = scrambler(args).generate(args.length, &[])?;
    let mut state = FaceletState::solved();
    state.apply_all(&scramble);
    Ok((scramble, state))
}

/// Picks the cube to solve: an explicit state, moves from solved, or a
/// generated scramble, in that order of preference.
fn starting_state(
    state: Option<&str>,
    moves: Option<&str>,
    scramble: &ScrambleArgs,
) -> Result<FaceletState, CubeError> {
    if let Some(state) = state {
        return state.parse();
    }
    if let Some(moves) = moves {
        let mut start = FaceletState::solved();
        start.apply_all(&parse_moves(moves)?);
        return Ok(start);
    }
    let (scramble, start) = scrambled_cube(scramble)?;
    println!("Scramble: {}", format_moves(&scramble));
    Ok(start)
}

fn run_scramble(args: &ScrambleArgs, avoid: &str) -> Result<(), CubeError> {
    let avoid = parse_moves(avoid)?;
    let scramble = scrambler(args).generate(args.length, &avoid)?;
    println!("Scramble: {}", format_moves(&scramble));
    println!("Inverse:  {}", format_moves(&inverse(&scramble)));
    Ok(())
}

fn run_apply(moves: &str, state: Option<&str>) -> Result<(), CubeError> {
    let mut cube: FaceletState = match state {
        Some(state) => state.parse()?,
        None => FaceletState::solved(),
    };
    cube.apply_all(&parse_moves(moves)?);

    println!("{}", cube);
    print!("{}", format_net(&cube));
    Ok(())
}

fn run_solve(
    state: Option<&str>,
    moves: Option<&str>,
    scramble: &ScrambleArgs,
    step_limit: usize,
) -> Result<(), CubeError> {
    let start = starting_state(state, moves, scramble)?;
    print!("{}", format_net(&start));

    let solution = Solver::new(&start).with_step_limit(step_limit).solve()?;
    print_solution(&solution);
    Ok(())
}

fn print_solution(solution: &Solution) {
    println!();
    print!("{}", solution);
    println!();
    println!(
        "Cross solved in {} moves ({} phases)",
        solution.move_count(),
        solution.phases.len()
    );
    print!("{}", format_net(&solution.state));
}

/// Scrambles, solves and opens the viewer on the scrambled cube.
fn run_display(args: &ScrambleArgs) -> Result<(), CubeError> {
    let (scramble, start) = scrambled_cube(args)?;
    println!("Scramble: {}", format_moves(&scramble));

    let solution = Solver::new(&start).solve()?;
    print_solution(&solution);
    info!("opening viewer with {} moves", solution.move_count());

    println!("Controls: Left/Right step, Up/Down jump phase, R reset");
    visualization::display(start, &solution);
    Ok(())
}
