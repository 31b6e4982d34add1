use std::{fs, process::exit, time::Instant};

use itertools::Itertools;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45";

fn main() {
    assert_eq!(solve(EXAMPLE), 114);
    assert_eq!(bonus(EXAMPLE), 2);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±300µs
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±300µs
        println!("Bonus: {}", bonus(&input));
    });
}

fn sequences(input: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
    input.trim().lines().map(|line| {
        line.split_whitespace()
            .map(|s| s.parse::<i64>().unwrap())
            .collect()
    })
}

fn extrapolate(seq: &[i64]) -> i64 {
    if seq.iter().all(|&n| n == 0) {
        return 0;
    }

    let diffs = seq
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect::<Vec<_>>();

    seq[seq.len() - 1] + extrapolate(&diffs)
}

fn solve(input: &str) -> i64 {
    sequences(input).map(|seq| extrapolate(&seq)).sum()
}

/// Extrapolating backwards is extrapolating the reversed sequence forwards
fn bonus(input: &str) -> i64 {
    sequences(input)
        .map(|mut seq| {
            seq.reverse();
            extrapolate(&seq)
        })
        .sum()
}

fn time<F>(f: F)
where
    F: FnOnce(),
{
    let t0 = Instant::now();
    f();
    println!("  took {:?}", t0.elapsed());
}

#[test]
fn test() {
    assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), 18);
    assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
    assert_eq!(extrapolate(&[5]), 5);

    assert_eq!(solve(EXAMPLE), 114);
    assert_eq!(bonus(EXAMPLE), 2);
}
