use std::{fs, ops::Range, process::exit, time::Instant};

use itertools::Itertools;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

fn main() {
    assert_eq!(solve(EXAMPLE), 35);
    assert_eq!(bonus(EXAMPLE), 46);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±100µs
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±100µs
        println!("Bonus: {}", bonus(&input));
    });
}

#[derive(Debug, Clone)]
struct Rule {
    source: Range<u64>,
    dest: u64,
}

impl Rule {
    fn shift(&self, n: u64) -> u64 {
        self.dest + (n - self.source.start)
    }
}

/// One `x-to-y map` block, rules sorted by source start
#[derive(Debug)]
struct Mapper {
    rules: Vec<Rule>,
}

impl Mapper {
    fn parse(block: &str) -> Self {
        let rules = block
            .lines()
            .skip(1)
            .map(|line| {
                let (dest, source, num) = line
                    .split_whitespace()
                    .map(|s| s.parse::<u64>().unwrap())
                    .collect_tuple()
                    .expect("three numbers per rule");

                Rule {
                    source: source..source + num,
                    dest,
                }
            })
            .sorted_by_key(|rule| rule.source.start)
            .collect();

        Self { rules }
    }

    fn map(&self, n: u64) -> u64 {
        self.rules
            .iter()
            .find(|rule| rule.source.contains(&n))
            .map_or(n, |rule| rule.shift(n))
    }

    /// Cuts `range` at the rule boundaries and maps every piece
    fn map_range(&self, range: Range<u64>, out: &mut Vec<Range<u64>>) {
        let mut at = range.start;

        for rule in &self.rules {
            if rule.source.end <= at {
                continue;
            }
            if rule.source.start >= range.end {
                break;
            }

            if at < rule.source.start {
                out.push(at..rule.source.start);
                at = rule.source.start;
            }

            let end = range.end.min(rule.source.end);
            out.push(rule.shift(at)..rule.shift(end - 1) + 1);
            at = end;

            if at >= range.end {
                return;
            }
        }

        if at < range.end {
            out.push(at..range.end);
        }
    }
}

fn parse(input: &str) -> (Vec<u64>, Vec<Mapper>) {
    let input = input.trim().replace("\r\n", "\n");
    let mut blocks = input.split("\n\n");

    let seeds = blocks
        .next()
        .and_then(|line| line.strip_prefix("seeds:"))
        .expect("seeds line")
        .split_whitespace()
        .map(|s| s.parse::<u64>().unwrap())
        .collect();

    (seeds, blocks.map(Mapper::parse).collect())
}

fn solve(input: &str) -> u64 {
    let (seeds, mappers) = parse(input);

    seeds
        .into_iter()
        .map(|seed| mappers.iter().fold(seed, |n, mapper| mapper.map(n)))
        .min()
        .expect("at least one seed")
}

fn bonus(input: &str) -> u64 {
    let (seeds, mappers) = parse(input);

    let ranges = seeds
        .into_iter()
        .tuples()
        .map(|(start, num)| start..start + num)
        .filter(|range| !range.is_empty())
        .collect::<Vec<_>>();

    mappers
        .iter()
        .fold(ranges, |ranges, mapper| {
            let mut out = vec![];
            for range in ranges {
                mapper.map_range(range, &mut out);
            }
            out
        })
        .into_iter()
        .map(|range| range.start)
        .min()
        .expect("at least one seed range")
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
    assert_eq!(solve(EXAMPLE), 35);
    assert_eq!(bonus(EXAMPLE), 46);

    let mapper = Mapper::parse("a-to-b map:\n50 98 2\n52 50 48");
    assert_eq!(mapper.map(79), 81);
    assert_eq!(mapper.map(99), 51);
    assert_eq!(mapper.map(10), 10);

    let mut out = vec![];
    mapper.map_range(40..100, &mut out);
    assert_eq!(out, vec![40..50, 52..100, 50..52]);

    let mut out = vec![];
    mapper.map_range(100..110, &mut out);
    assert_eq!(out, vec![100..110]);
}
