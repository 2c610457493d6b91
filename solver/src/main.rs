use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use pipemaze::Maze;

/// Find the loop through the start of a pipe maze, and print how far away its farthest point is
/// and how many cells it encloses.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// File holding the maze, one row per line; `-` reads standard input.
    input_path: PathBuf,
    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("Failed to install logger.")
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).context("Failed to read maze from standard input.")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read maze from given file({}).", path.display()))
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose)?;

    let input = read_input(&args.input_path)?;
    let maze: Maze = input.parse().context("Failed to read maze.")?;
    info!("maze is {}x{}", maze.dims().0, maze.dims().1);

    let solution = maze.solve().context("Failed to trace the loop.")?;
    println!("{}", solution.farthest);
    println!("{}", solution.enclosed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::read_input;

    #[test]
    fn missing_file_is_reported() {
        let err = read_input(Path::new("no/such/maze.txt")).unwrap_err();
        assert!(err.to_string().contains("no/such/maze.txt"));
    }

    #[test]
    fn reads_a_maze_file() {
        let path = std::env::temp_dir().join("pipemaze-solver-square.txt");
        std::fs::write(&path, ".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();

        let maze: pipemaze::Maze = read_input(&path).unwrap().parse().unwrap();
        let solution = maze.solve().unwrap();
        assert_eq!((solution.farthest, solution.enclosed), (4, 1));

        std::fs::remove_file(path).unwrap();
    }
}
