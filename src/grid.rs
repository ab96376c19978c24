use crate::error::Error;

/// A rectangular character grid borrowed from the puzzle input.
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let rows = input.trim().lines().map(|line| line.trim_end().as_bytes()).collect::<Vec<_>>();
        let Some(first) = rows.first() else {
            return Err(Error::InvalidGrid { reason: "empty input" });
        };
        if first.is_empty() {
            return Err(Error::InvalidGrid { reason: "empty first row" });
        }
        if rows.iter().any(|row| row.len() != first.len()) {
            return Err(Error::InvalidGrid { reason: "rows differ in length" });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, ri: usize, ci: usize) -> Option<u8> {
        self.rows.get(ri).and_then(|row| row.get(ci)).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(ri, row)| {
            row.iter().enumerate().map(move |(ci, &cell)| (ri, ci, cell))
        })
    }
}
