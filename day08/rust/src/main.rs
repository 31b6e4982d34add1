use std::{fs, process::exit, time::Instant};

use fxhash::FxHashMap;
use regex::Regex;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE_1: &str = "
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)";

const EXAMPLE_2: &str = "
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)";

const EXAMPLE_BONUS: &str = "
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)";

fn main() {
    assert_eq!(solve(EXAMPLE_1), 2);
    assert_eq!(solve(EXAMPLE_2), 6);
    assert_eq!(bonus(EXAMPLE_BONUS), 6);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±1ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±5ms
        println!("Bonus: {}", bonus(&input));
    });
}

struct Network<'a> {
    instructions: &'a str,
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Self {
        let re = Regex::new(r"(\w+) = \((\w+), (\w+)\)").unwrap();

        let (instructions, nodes) = input.trim().split_once("\n\n").expect("instructions and nodes");

        let nodes = re
            .captures_iter(nodes)
            .map(|c| {
                let (_, [node, left, right]) = c.extract();
                (node, (left, right))
            })
            .collect();

        Self {
            instructions: instructions.trim(),
            nodes,
        }
    }

    /// Steps until we land on a node for which `is_end` holds
    fn steps(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> usize {
        let mut at = start;

        for (i, dir) in self.instructions.chars().cycle().enumerate() {
            let (left, right) = self.nodes[at];
            at = match dir {
                'L' => left,
                'R' => right,
                _ => panic!("unexpected instruction {dir:?}"),
            };

            if is_end(at) {
                return i + 1;
            }
        }

        unreachable!()
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

fn solve(input: &str) -> usize {
    Network::parse(input).steps("AAA", |node| node == "ZZZ")
}

fn bonus(input: &str) -> usize {
    let network = Network::parse(input);

    network
        .nodes
        .keys()
        .copied()
        .filter(|node| node.ends_with('A'))
        .map(|node| network.steps(node, |node| node.ends_with('Z')))
        .fold(1, lcm)
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
    assert_eq!(solve(EXAMPLE_1), 2);
    assert_eq!(solve(EXAMPLE_2), 6);
    assert_eq!(bonus(EXAMPLE_BONUS), 6);

    assert_eq!(lcm(4, 6), 12);
    assert_eq!(gcd(17, 5), 1);
}
