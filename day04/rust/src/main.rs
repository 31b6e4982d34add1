use std::{fs, process::exit, time::Instant};

use fxhash::FxHashSet;
use regex::Regex;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

fn main() {
    assert_eq!(solve(EXAMPLE), 13);
    assert_eq!(bonus(EXAMPLE), 30);

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

/// Number of winning numbers on each card
fn matches(input: &str) -> Vec<usize> {
    let re = Regex::new(r"\d+").unwrap();
    let numbers = |s: &str| {
        re.find_iter(s)
            .map(|m| m.as_str().parse::<u32>().unwrap())
            .collect::<FxHashSet<_>>()
    };

    input
        .trim()
        .lines()
        .map(|line| {
            let (_, card) = line.split_once(':').expect("card header");
            let (winning, mine) = card.split_once('|').expect("card separator");
            numbers(winning).intersection(&numbers(mine)).count()
        })
        .collect()
}

fn solve(input: &str) -> u64 {
    matches(input)
        .into_iter()
        .filter(|&m| m > 0)
        .map(|m| 1 << (m - 1))
        .sum()
}

fn bonus(input: &str) -> u64 {
    let matches = matches(input);
    let mut copies = vec![1; matches.len()];
    let len = copies.len();

    for (i, &m) in matches.iter().enumerate() {
        for j in (i + 1..=i + m).take_while(|&j| j < len) {
            copies[j] += copies[i];
        }
    }

    copies.into_iter().sum()
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
    assert_eq!(matches(EXAMPLE), vec![4, 2, 2, 1, 0, 0]);
    assert_eq!(solve(EXAMPLE), 13);
    assert_eq!(bonus(EXAMPLE), 30);

    // copies never run past the end of the table
    assert_eq!(bonus("Card 1: 1 2 | 1 2"), 1);
}
