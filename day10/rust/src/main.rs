use std::{fmt::Display, fs, path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use day10::{bonus, samples, solve, PipeError};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

#[derive(Parser)]
#[command()]
struct Cli {
    #[arg(short, long)]
    /// Print out how long each part took
    timings: bool,

    /// Puzzle input, defaults to this day's input.txt
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    for (example, expected) in samples::FIRST_PART {
        assert_eq!(unwrap_or_exit(solve(example)), expected);
    }
    for (example, expected) in samples::BONUS {
        assert_eq!(unwrap_or_exit(bonus(example)), expected);
    }

    let file = cli.file.unwrap_or_else(|| PathBuf::from(INPUT));
    let Ok(input) = fs::read_to_string(&file) else {
        eprintln!("Could not read file: {}", file.display());
        exit(1);
    };

    time(cli.timings, || {
        // ±1ms
        println!("First part: {}", unwrap_or_exit(solve(&input)));
    });

    time(cli.timings, || {
        // ±5ms
        println!("Bonus: {}", unwrap_or_exit(bonus(&input)));
    });
}

fn unwrap_or_exit<T: Display>(result: Result<T, PipeError>) -> T {
    match result {
        Ok(answer) => answer,
        Err(err) => {
            eprintln!("Puzzle error: {err}");
            exit(2);
        }
    }
}

fn time<F>(timings: bool, f: F)
where
    F: FnOnce(),
{
    let t0 = Instant::now();
    f();
    if timings {
        eprintln!("  took {:?}", t0.elapsed());
    }
}
