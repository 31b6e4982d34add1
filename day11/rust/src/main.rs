use std::{fs, process::exit, time::Instant};

use itertools::Itertools;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

fn main() {
    assert_eq!(solve(EXAMPLE), 374);
    assert_eq!(distances(EXAMPLE, 10), 1030);
    assert_eq!(distances(EXAMPLE, 100), 8410);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±2ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±2ms
        println!("Bonus: {}", bonus(&input));
    });
}

/// `expanded[i]` is where row (or column) `i` ends up once every empty one
/// before it has grown to `factor` rows
fn expanded(used: &[bool], factor: usize) -> Vec<usize> {
    used.iter()
        .scan(0, |at, &used| {
            let here = *at;
            *at += if used { 1 } else { factor };
            Some(here)
        })
        .collect()
}

/// Sum of the distances between every pair of galaxies
fn distances(input: &str, factor: usize) -> usize {
    let grid = input
        .trim()
        .lines()
        .map(|line| line.trim().chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let galaxies = grid
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == '#')
                .map(move |(x, _)| (x, y))
        })
        .collect::<Vec<_>>();

    let mut used_cols = vec![false; grid[0].len()];
    let mut used_rows = vec![false; grid.len()];
    for &(x, y) in &galaxies {
        used_cols[x] = true;
        used_rows[y] = true;
    }

    let xs = expanded(&used_cols, factor);
    let ys = expanded(&used_rows, factor);

    galaxies
        .iter()
        .map(|&(x, y)| (xs[x], ys[y]))
        .tuple_combinations()
        .map(|((ax, ay), (bx, by))| ax.abs_diff(bx) + ay.abs_diff(by))
        .sum()
}

fn solve(input: &str) -> usize {
    distances(input, 2)
}

fn bonus(input: &str) -> usize {
    distances(input, 1_000_000)
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
    assert_eq!(expanded(&[true, false, true, false], 3), vec![0, 1, 4, 5]);

    assert_eq!(solve(EXAMPLE), 374);
    assert_eq!(distances(EXAMPLE, 10), 1030);
    assert_eq!(distances(EXAMPLE, 100), 8410);
}
