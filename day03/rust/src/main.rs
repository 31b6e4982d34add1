use std::{fs, process::exit, time::Instant};

use fxhash::FxHashMap;
use regex::Regex;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

fn main() {
    assert_eq!(solve(EXAMPLE), 4361);
    assert_eq!(bonus(EXAMPLE), 467835);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±1ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±1ms
        println!("Bonus: {}", bonus(&input));
    });
}

type Grid = Vec<Vec<char>>;

#[derive(Debug)]
struct Number {
    value: u64,
    y: usize,
    x0: usize,
    x1: usize,
}

impl Number {
    /// Cells bordering the number, diagonals included
    fn border<'a>(&self, grid: &'a Grid) -> impl Iterator<Item = ((usize, usize), char)> + 'a {
        let h = grid.len();
        let w = grid[0].len();
        let ys = self.y.saturating_sub(1)..(self.y + 2).min(h);
        let xs = self.x0.saturating_sub(1)..(self.x1 + 1).min(w);
        let (y, x0, x1) = (self.y, self.x0, self.x1);

        ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
            .filter(move |&(nx, ny)| !(ny == y && nx >= x0 && nx < x1))
            .map(move |(nx, ny)| ((nx, ny), grid[ny][nx]))
    }
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

fn parse(input: &str) -> (Grid, Vec<Number>) {
    let re = Regex::new(r"\d+").unwrap();

    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    let grid = lines
        .iter()
        .map(|line| line.chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let numbers = lines
        .iter()
        .enumerate()
        .flat_map(|(y, line)| {
            re.find_iter(line).map(move |m| Number {
                value: m.as_str().parse().unwrap(),
                y,
                x0: m.start(),
                x1: m.end(),
            })
        })
        .collect::<Vec<_>>();

    (grid, numbers)
}

fn solve(input: &str) -> u64 {
    let (grid, numbers) = parse(input);

    numbers
        .iter()
        .filter(|n| n.border(&grid).any(|(_, c)| is_symbol(c)))
        .map(|n| n.value)
        .sum()
}

fn bonus(input: &str) -> u64 {
    let (grid, numbers) = parse(input);

    let mut gears: FxHashMap<(usize, usize), Vec<u64>> = FxHashMap::default();
    for n in &numbers {
        for (pos, c) in n.border(&grid) {
            if c == '*' {
                gears.entry(pos).or_default().push(n.value);
            }
        }
    }

    gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] * parts[1])
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
    assert_eq!(solve(EXAMPLE), 4361);
    assert_eq!(bonus(EXAMPLE), 467835);

    // numbers touching the edges of the schematic
    assert_eq!(solve("12..\n...#"), 0);
    assert_eq!(solve("12.\n..#"), 12);
    assert_eq!(solve("12#\n..."), 12);
    assert_eq!(bonus("2*3\n..."), 6);
    assert_eq!(bonus("2*3\n.4."), 0);
}
