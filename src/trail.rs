use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::Error;
use crate::grid::Grid;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// A topographic map. Cells marked `.` are impassable.
pub struct TrailMap {
    heights: Vec<Option<u8>>,
    cols: usize,
}

impl TrailMap {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let grid = Grid::parse(input)?;
        let heights = grid
            .cells()
            .map(|(ri, ci, cell)| match cell {
                b'0'..=b'9' => Ok(Some(cell - b'0')),
                b'.' => Ok(None),
                _ => Err(Error::InvalidCell { row: ri, col: ci, cell: cell as char }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { heights, cols: grid.cols() })
    }

    pub fn trailheads(&self) -> impl Iterator<Item = usize> + '_ {
        self.heights.iter().positions(|&height| height == Some(TRAILHEAD))
    }

    /// Orthogonal neighbours exactly one step higher.
    fn uphill(&self, at: usize) -> ArrayVec<usize, 4> {
        let mut next = ArrayVec::new();
        let Some(height) = self.heights[at] else { return next };
        let (ri, ci) = (at / self.cols, at % self.cols);
        let rows = self.heights.len() / self.cols;
        if ri > 0 {next.push(at - self.cols)}
        if ri + 1 < rows {next.push(at + self.cols)}
        if ci > 0 {next.push(at - 1)}
        if ci + 1 < self.cols {next.push(at + 1)}
        next.retain(|&mut to| self.heights[to] == Some(height + 1));
        next
    }

    /// Number of distinct summits reachable from `trailhead`.
    pub fn score(&self, trailhead: usize) -> usize {
        let mut seen = bitvec![0; self.heights.len()];
        let mut stack = vec![trailhead];
        seen.set(trailhead, true);
        let mut summits = 0;
        while let Some(at) = stack.pop() {
            if self.heights[at] == Some(SUMMIT) {
                summits += 1;
                continue;
            }
            for next in self.uphill(at) {
                if !seen[next] {
                    seen.set(next, true);
                    stack.push(next);
                }
            }
        }
        summits
    }

    /// Number of distinct trails from each cell to any summit.
    pub fn ratings(&self) -> Vec<u64> {
        let mut ratings = vec![0; self.heights.len()];
        for height in (TRAILHEAD..=SUMMIT).rev() {
            for at in self.heights.iter().positions(|&h| h == Some(height)) {
                ratings[at] = if height == SUMMIT {
                    1
                } else {
                    self.uphill(at).iter().map(|&next| ratings[next]).sum()
                };
            }
        }
        ratings
    }

    pub fn total_score(&self) -> usize {
        self.trailheads().map(|trailhead| self.score(trailhead)).sum()
    }

    pub fn total_rating(&self) -> u64 {
        let ratings = self.ratings();
        self.trailheads().map(|trailhead| ratings[trailhead]).sum()
    }
}
