use std::{fs, process::exit, time::Instant};

use tuple::Map;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
Time:      7  15   30
Distance:  9  40  200";

fn main() {
    assert_eq!(solve(EXAMPLE), 288);
    assert_eq!(bonus(EXAMPLE), 71503);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // <10µs
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // <10µs
        println!("Bonus: {}", bonus(&input));
    });
}

fn distance(hold: u64, time: u64) -> u64 {
    hold * (time - hold)
}

/// Number of ways to hold the button so that the boat beats `record`.
///
/// The distance is a downward parabola in the hold time, so the winning holds
/// are the integers strictly between its two crossings of `record`.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let t = time as f64;
    let discriminant = t * t - 4.0 * record as f64;
    if discriminant <= 0.0 {
        return 0;
    }

    // the float roots are only a guess for large inputs, nudge them into place
    let mut lo = ((t - discriminant.sqrt()) / 2.0).floor().max(0.0) as u64;
    while lo <= time && distance(lo, time) <= record {
        lo += 1;
    }
    while lo > 0 && distance(lo - 1, time) > record {
        lo -= 1;
    }

    let mut hi = (((t + discriminant.sqrt()) / 2.0).ceil() as u64).min(time);
    while hi > 0 && distance(hi, time) <= record {
        hi -= 1;
    }
    while hi < time && distance(hi + 1, time) > record {
        hi += 1;
    }

    if hi < lo {
        0
    } else {
        hi - lo + 1
    }
}

fn lines(input: &str) -> (&str, &str) {
    input
        .trim()
        .split_once('\n')
        .expect("a time line and a distance line")
        .map(|line| line.split_once(':').expect("line label").1)
}

fn solve(input: &str) -> u64 {
    let (times, records) = lines(input).map(|line| {
        line.split_whitespace()
            .map(|s| s.parse::<u64>().unwrap())
            .collect::<Vec<_>>()
    });

    times
        .into_iter()
        .zip(records)
        .map(|(time, record)| ways_to_win(time, record))
        .product()
}

fn bonus(input: &str) -> u64 {
    let (time, record) = lines(input).map(|line| line.replace(' ', "").trim().parse::<u64>().unwrap());

    ways_to_win(time, record)
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
    assert_eq!(ways_to_win(7, 9), 4);
    assert_eq!(ways_to_win(15, 40), 8);
    assert_eq!(ways_to_win(30, 200), 9);

    // exact ties with the record don't count
    assert_eq!(ways_to_win(4, 4), 0);
    assert_eq!(ways_to_win(4, 3), 1);

    assert_eq!(solve(EXAMPLE), 288);
    assert_eq!(bonus(EXAMPLE), 71503);
}
