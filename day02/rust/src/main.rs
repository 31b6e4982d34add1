use std::{fs, process::exit, time::Instant};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::u32 as number,
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");

const EXAMPLE: &str = "
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

const BAG: Draw = Draw {
    red: 12,
    green: 13,
    blue: 14,
};

fn main() {
    assert_eq!(solve(EXAMPLE), 8);
    assert_eq!(bonus(EXAMPLE), 2286);

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

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
struct Draw {
    red: u32,
    green: u32,
    blue: u32,
}

impl Draw {
    fn fits_in(&self, bag: &Draw) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Draw) -> Draw {
        Draw {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

fn draw(input: &str) -> IResult<&str, Draw> {
    let cubes = separated_pair(
        number,
        tag(" "),
        alt((tag("red"), tag("green"), tag("blue"))),
    );

    let (input, cubes) = separated_list1(tag(", "), cubes)(input)?;

    let mut draw = Draw::default();
    for (count, color) in cubes {
        match color {
            "red" => draw.red = count,
            "green" => draw.green = count,
            _ => draw.blue = count,
        }
    }

    Ok((input, draw))
}

fn game(input: &str) -> IResult<&str, (u32, Vec<Draw>)> {
    let (input, id) = delimited(tag("Game "), number, tag(": "))(input)?;
    let (input, draws) = separated_list1(tag("; "), draw)(input)?;
    Ok((input, (id, draws)))
}

fn parse(input: &str) -> Vec<(u32, Vec<Draw>)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (_, game) = game(line.trim()).expect("valid game line");
            game
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .filter(|(_, draws)| draws.iter().all(|draw| draw.fits_in(&BAG)))
        .map(|(id, _)| id)
        .sum()
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .map(|(_, draws)| draws.into_iter().fold(Draw::default(), Draw::max).power())
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
    assert_eq!(solve(EXAMPLE), 8);
    assert_eq!(bonus(EXAMPLE), 2286);

    assert_eq!(
        game("Game 12: 3 blue, 4 red; 2 green").unwrap().1,
        (
            12,
            vec![
                Draw {
                    red: 4,
                    green: 0,
                    blue: 3
                },
                Draw {
                    red: 0,
                    green: 2,
                    blue: 0
                }
            ]
        )
    );
}
