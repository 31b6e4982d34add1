const CARGO_TOML: &str = r#"[package]
name = "day{DAY}"
version.workspace = true
edition.workspace = true

# See more keys and their definitions at https://doc.rust-lang.org/cargo/reference/manifest.html

[dependencies]
"#;

const MAIN_RS: &str = r#"use std::{fs, process::exit, time::Instant};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../input.txt");
const EXAMPLE: &str = include_str!("../../sample.txt");

fn main() {
    println!("Example: {} / {}", solve(EXAMPLE), bonus(EXAMPLE));

    let Ok(input) = fs::read_to_string(INPUT) else {
        eprintln!("Could not read input for day {DAY}: {INPUT}");
        exit(1);
    };

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });
}

fn solve(input: &str) -> usize {
    input.trim().lines().count()
}

fn bonus(input: &str) -> usize {
    input.trim().lines().count()
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
    assert_eq!(solve(EXAMPLE), EXAMPLE.trim().lines().count());
}
"#;

pub fn cargo_toml(day: u8) -> String {
    CARGO_TOML.replace("{DAY}", &format!("{day:02}"))
}

pub fn main_rs(day: u8) -> String {
    MAIN_RS.replace("{DAY}", &format!("{day:02}"))
}
