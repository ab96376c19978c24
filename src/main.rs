use std::path::PathBuf;

use advent2024::stones::{parse_stones, StoneCounter};
use advent2024::{parse_equations, OperatorSet};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Advent of Code 2024 solvers, days 7 to 11")]
struct Args {
    /// Puzzle day
    day: u8,

    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,

    /// Read the example `day{DAY}test{TEST}.in` instead of `day{DAY}.in`
    #[arg(short, long)]
    test: Option<u32>,

    /// Input file, overriding the default name
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print how each answer was reached (days 7 and 11)
    #[arg(short, long)]
    verbose: bool,
}

fn explain(day: u8, part: u8, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    match day {
        7 => {
            let operators = OperatorSet::for_part(part).ok_or(advent2024::Error::InvalidPart(part))?;
            for equation in parse_equations(input)? {
                if let Some(assignment) = equation.solve(operators) {
                    eprintln!("{}", equation.render(&assignment));
                }
            }
        }
        11 => {
            let mut counter = StoneCounter::default();
            let blinks = if part == 1 {25} else {75};
            for stone in parse_stones(input)? {
                counter.count(stone, blinks)?;
            }
            eprintln!("memo hit rate {:.3}", counter.hit_rate());
        }
        _ => (),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let solve = advent2024::solver(args.day)?;
    let fname = args.input.clone().unwrap_or_else(|| match args.test {
        Some(test) => format!("day{}test{}.in", args.day, test).into(),
        None => format!("day{}.in", args.day).into(),
    });

    let input = std::fs::read_to_string(dbg!(fname))?;
    let time = std::time::Instant::now();
    println!("{}", solve(args.part, &input)?);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    if args.verbose {
        explain(args.day, args.part, &input)?;
    }
    Ok(())
}
