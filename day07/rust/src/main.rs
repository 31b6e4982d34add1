use std::{fs, process::exit, time::Instant};

use itertools::Itertools;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483";

const CARDS: &str = "23456789TJQKA";
const CARDS_WITH_JOKERS: &str = "J23456789TQKA";

fn main() {
    assert_eq!(solve(EXAMPLE), 6440);
    assert_eq!(bonus(EXAMPLE), 5905);

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read file: {INPUT}");
        exit(1);
    };

    time(|| {
        // ±500µs
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±500µs
        println!("Bonus: {}", bonus(&input));
    });
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

use Kind::*;

fn kind(cards: &str, jokers: bool) -> Kind {
    let num_jokers = if jokers {
        cards.chars().filter(|&c| c == 'J').count()
    } else {
        0
    };

    let mut counts = cards
        .chars()
        .filter(|&c| !jokers || c != 'J')
        .counts()
        .into_values()
        .sorted()
        .rev()
        .collect::<Vec<_>>();

    // jokers always do best by joining the largest group
    match counts.first_mut() {
        Some(largest) => *largest += num_jokers,
        None => counts.push(num_jokers),
    }

    match counts[..] {
        [5] => FiveOfAKind,
        [4, ..] => FourOfAKind,
        [3, 2] => FullHouse,
        [3, ..] => ThreeOfAKind,
        [2, 2, ..] => TwoPair,
        [2, ..] => OnePair,
        _ => HighCard,
    }
}

fn winnings(input: &str, jokers: bool) -> usize {
    let order = if jokers { CARDS_WITH_JOKERS } else { CARDS };

    input
        .trim()
        .lines()
        .map(|line| {
            let (cards, bid) = line.trim().split_once(' ').expect("hand and bid");
            assert_eq!(cards.len(), 5, "hands have five cards");

            let values = cards
                .chars()
                .map(|c| order.find(c).expect("known card"))
                .collect::<Vec<_>>();

            ((kind(cards, jokers), values), bid.parse::<usize>().unwrap())
        })
        .sorted()
        .enumerate()
        .map(|(i, (_, bid))| (i + 1) * bid)
        .sum()
}

fn solve(input: &str) -> usize {
    winnings(input, false)
}

fn bonus(input: &str) -> usize {
    winnings(input, true)
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
    assert_eq!(kind("32T3K", false), OnePair);
    assert_eq!(kind("KTJJT", false), TwoPair);
    assert_eq!(kind("KTJJT", true), FourOfAKind);
    assert_eq!(kind("JJJJJ", true), FiveOfAKind);
    assert_eq!(kind("2345J", true), OnePair);
    assert_eq!(kind("23J3J", true), FourOfAKind);

    assert_eq!(solve(EXAMPLE), 6440);
    assert_eq!(bonus(EXAMPLE), 5905);
}
