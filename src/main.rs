use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes::{
    errors as maze_errors,
    maze::Maze,
    traversal,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --text-out=<path>      Also write the textual rendering of the solved maze to this file.

Solves the built in maze by depth first traversal and prints it before and after.
Set RUST_LOG=mazes=trace to follow the search.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // Result is a typedef of std `Result` with the error type our own `Error`
    // Defines the From conversions that let try! and ? work for our `Error`.
    // ResultExt adds the `chain_err` trait method.
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut maze = Maze::classic()?;

    println!("The original maze:");
    println!("{}", maze);

    match traversal::traverse(&mut maze) {
        Ok(solution) => {
            info!("solved with a path of {} cells after visiting {} cells",
                  solution.path().len(), solution.visit_order().len());
            println!("The solved maze:");
            println!("{}", maze);
        }
        Err(e) => {
            // Show how far the search got before giving up.
            if let maze_errors::ErrorKind::Unsolvable(..) = *e.kind() {
                println!("The unsolvable maze:");
                println!("{}", maze);
            }
            return Err(e.into());
        }
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&maze.render(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
