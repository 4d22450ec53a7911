//! CLI for checking and walking triangle mazes

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tri_maze::{solve, Ending, Hand, Maze, Point};

/// Check a maze file, or find the way out by following its walls
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log what the solver does on stderr, repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the maze file is well formed
    #[command(long_flag = "test")]
    Test {
        /// File, where to read the maze. Use `-` for stdin.
        file: PathBuf,
    },
    /// Walk through the maze holding the wall with the right hand
    #[command(long_flag = "rpath")]
    Rpath(WalkArgs),
    /// Walk through the maze holding the wall with the left hand
    #[command(long_flag = "lpath")]
    Lpath(WalkArgs),
}

#[derive(clap::Args, Debug)]
struct WalkArgs {
    /// Row of the entrance, counting from 1
    #[arg(allow_hyphen_values = true)]
    row: String,
    /// Column of the entrance, counting from 1
    #[arg(allow_hyphen_values = true)]
    col: String,
    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Test { file } => match Maze::load(&file) {
            Ok(_) => {
                println!("Valid");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                debug!("{:#}", err);
                println!("Invalid");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Rpath(walk) => print_walk(walk, Hand::Right),
        Command::Lpath(walk) => print_walk(walk, Hand::Left),
    }
}

/// Print every visited cell as `row,col`, one per line
fn print_walk(args: WalkArgs, hand: Hand) -> anyhow::Result<ExitCode> {
    let maze = match Maze::load(&args.file) {
        Ok(maze) => maze,
        Err(err) => {
            debug!("{:#}", err);
            eprintln!("Invalid");
            return Ok(ExitCode::FAILURE);
        }
    };

    let entry = coordinate(&args.row)
        .zip(coordinate(&args.col))
        .and_then(|(row, col)| Point::from_one_based(row, col));
    let Some(mut walk) = entry.and_then(|p| solve(&maze, p, hand).ok()) else {
        println!("Invalid Entrance");
        return Ok(ExitCode::SUCCESS);
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for point in walk.by_ref() {
        writeln!(out, "{}", point)?;
    }
    out.flush()?;

    if walk.ending() == Some(Ending::Looped) {
        eprintln!("The walk goes in circles and never leaves the maze");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Entrance coordinate as typed by the user.
///
/// Anything that is not a non-negative integer cannot name a cell, so it
/// ends up as an invalid entrance rather than a usage error.
fn coordinate(arg: &str) -> Option<usize> {
    arg.trim().parse().ok()
}

/// Send log events to stderr, filtered by `RUST_LOG` unless `-v` is given
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
