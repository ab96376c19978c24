pub mod antenna;
pub mod disk;
pub mod equation;
mod error;
pub mod grid;
pub mod operator;
pub mod stones;
pub mod trail;

pub use equation::{is_satisfiable, parse_equations, total_calibration, Equation};
pub use error::Error;
pub use operator::{OperatorKind, OperatorSet};

use disk::DiskMap;
use grid::Grid;
use stones::{blink_count, parse_stones};
use trail::TrailMap;

/// Solves one part of one day's puzzle from the full input text.
pub type Solver = fn(u8, &str) -> Result<String, Error>;

pub const SOLVERS: [(u8, Solver); 5] = [(7, day7), (8, day8), (9, day9), (10, day10), (11, day11)];

pub fn solver(day: u8) -> Result<Solver, Error> {
    SOLVERS
        .iter()
        .find(|&&(solver_day, _)| solver_day == day)
        .map(|&(_, solve)| solve)
        .ok_or(Error::UnknownDay(day))
}

fn check_part(part: u8) -> Result<u8, Error> {
    match part {
        1 | 2 => Ok(part),
        _ => Err(Error::InvalidPart(part)),
    }
}

pub fn day7(part: u8, input: &str) -> Result<String, Error> {
    let operators = OperatorSet::for_part(part).ok_or(Error::InvalidPart(part))?;
    let equations = parse_equations(input)?;
    Ok(total_calibration(&equations, operators).to_string())
}

pub fn day8(part: u8, input: &str) -> Result<String, Error> {
    let resonant = check_part(part)? == 2;
    let grid = Grid::parse(input)?;
    Ok(antenna::count_antinodes(&grid, resonant)?.to_string())
}

pub fn day9(part: u8, input: &str) -> Result<String, Error> {
    let part = check_part(part)?;
    let mut disk = DiskMap::parse(input)?;
    if part == 1 {
        disk.compact_blocks();
    } else {
        disk.compact_files();
    }
    Ok(disk.checksum().to_string())
}

pub fn day10(part: u8, input: &str) -> Result<String, Error> {
    let part = check_part(part)?;
    let map = TrailMap::parse(input)?;
    let answer = if part == 1 {map.total_score() as u64} else {map.total_rating()};
    Ok(answer.to_string())
}

pub fn day11(part: u8, input: &str) -> Result<String, Error> {
    let blinks = if check_part(part)? == 1 {25} else {75};
    Ok(blink_count(&parse_stones(input)?, blinks)?.to_string())
}
