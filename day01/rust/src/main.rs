use std::{fs, process::exit, time::Instant};

use regex::Regex;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet";

const EXAMPLE_BONUS: &str = "
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn main() {
    assert_eq!(solve(EXAMPLE), 142);
    assert_eq!(bonus(EXAMPLE_BONUS), 281);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±200µs
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±2ms
        println!("Bonus: {}", bonus(&input));
    });
}

fn digit_value(s: &str) -> u32 {
    match s.parse::<u32>() {
        Ok(d) => d,
        Err(_) => SPELLED.iter().position(|&w| w == s).expect("spelled digit") as u32 + 1,
    }
}

/// Matches may overlap, so search again from one past each match start
fn calibration_value(re: &Regex, line: &str) -> u32 {
    let mut digits = vec![];
    let mut at = 0;
    while let Some(m) = re.find_at(line, at) {
        digits.push(digit_value(m.as_str()));
        at = m.start() + 1;
    }

    match (digits.first(), digits.last()) {
        (Some(first), Some(last)) => first * 10 + last,
        _ => panic!("no digits on line {line:?}"),
    }
}

fn sum_calibration_values(input: &str, re: &Regex) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| calibration_value(re, line.trim()))
        .sum()
}

fn solve(input: &str) -> u32 {
    let re = Regex::new(r"[1-9]").unwrap();
    sum_calibration_values(input, &re)
}

fn bonus(input: &str) -> u32 {
    let re = Regex::new(&format!(r"[1-9]|{}", SPELLED.join("|"))).unwrap();
    sum_calibration_values(input, &re)
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
    assert_eq!(solve(EXAMPLE), 142);
    assert_eq!(bonus(EXAMPLE_BONUS), 281);

    // overlapping spelled digits
    assert_eq!(bonus("twone"), 21);
    assert_eq!(bonus("eighthree"), 83);
    assert_eq!(bonus("7"), 77);
}
