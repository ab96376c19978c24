use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading a puzzle input.
///
/// An equation without a solution, a grid without antinodes and the like are
/// ordinary answers, not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid equation {line:?}: {reason}")]
    InvalidEquation { line: String, reason: &'static str },

    #[error("cannot parse {token:?} as an integer")]
    ParseInt {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected cell {cell:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, cell: char },

    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: &'static str },

    #[error("stone {0} overflows when multiplied by 2024")]
    StoneOverflow(u64),

    #[error("part must be 1 or 2, got {0}")]
    InvalidPart(u8),

    #[error("no solver for day {0}")]
    UnknownDay(u8),
}

pub(crate) fn parse_int<T>(token: &str) -> Result<T, Error>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| Error::ParseInt { token: token.to_owned(), source })
}
