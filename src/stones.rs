use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::error::{parse_int, Error};

pub fn parse_stones(input: &str) -> Result<Vec<u64>, Error> {
    input.split_whitespace().map(parse_int).collect()
}

/// The stones one stone turns into after a single blink.
pub fn blink(stone: u64) -> Result<ArrayVec<u64, 2>, Error> {
    let mut next = ArrayVec::new();
    if stone == 0 {
        next.push(1);
        return Ok(next);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        next.push(stone / half);
        next.push(stone % half);
    } else {
        next.push(stone.checked_mul(2024).ok_or(Error::StoneOverflow(stone))?);
    }
    Ok(next)
}

/// Counts stones after repeated blinks. Stones never influence each other and
/// order does not affect the count, so results are memoised per
/// `(stone, blinks)` and shared across every starting stone.
#[derive(Default)]
pub struct StoneCounter {
    memo: FxHashMap<(u64, u32), u64>,
    lookups: u64,
    hits: u64,
}

impl StoneCounter {
    pub fn count(&mut self, stone: u64, blinks: u32) -> Result<u64, Error> {
        if blinks == 0 {
            return Ok(1);
        }
        self.lookups += 1;
        if let Some(&count) = self.memo.get(&(stone, blinks)) {
            self.hits += 1;
            return Ok(count);
        }
        let mut count = 0;
        for next in blink(stone)? {
            count += self.count(next, blinks - 1)?;
        }
        self.memo.insert((stone, blinks), count);
        Ok(count)
    }

    /// Fraction of memo lookups that were answered from the memo.
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {0.0} else {self.hits as f64 / self.lookups as f64}
    }
}

pub fn blink_count(stones: &[u64], blinks: u32) -> Result<u64, Error> {
    let mut counter = StoneCounter::default();
    stones.iter().map(|&stone| counter.count(stone, blinks)).sum()
}
