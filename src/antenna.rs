use assoc::AssocExt;
use itertools::Itertools;

use crate::error::Error;
use crate::grid::Grid;

type Position = (isize, isize);

/// Antenna positions grouped by frequency, in order of first appearance.
pub fn antennas(grid: &Grid) -> Result<Vec<(u8, Vec<Position>)>, Error> {
    let mut frequencies: Vec<(u8, Vec<Position>)> = vec![];
    for (ri, ci, cell) in grid.cells() {
        match cell {
            b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => {
                frequencies.entry(cell).or_insert(vec![]).push((ri as isize, ci as isize))
            }
            // `#` marks an antinode in annotated maps
            b'.' | b'#' => (),
            _ => return Err(Error::InvalidCell { row: ri, col: ci, cell: cell as char }),
        }
    }
    Ok(frequencies)
}

/// Counts distinct in-bounds antinodes. Without resonance each ordered pair
/// of same-frequency antennas projects one antinode past the first antenna;
/// with resonance the projection repeats to the edge of the map, starting at
/// the antenna itself.
pub fn count_antinodes(grid: &Grid, resonant: bool) -> Result<usize, Error> {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let (first, steps) = if resonant { (0, usize::MAX) } else { (1, 1) };

    Ok(antennas(grid)?
        .iter()
        .flat_map(|(_, group)| {
            group.iter().flat_map(move |&(ri, ci)| {
                group.iter().filter(move |&&rcj| rcj != (ri, ci)).flat_map(move |&(rj, cj)| {
                    (first..)
                        .map(move |n| (ri + n * (ri - rj), ci + n * (ci - cj)))
                        .take_while(move |(r, c)| (0..rows).contains(r) && (0..cols).contains(c))
                        .take(steps)
                })
            })
        })
        .unique()
        .count())
}
