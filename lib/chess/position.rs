use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A square on the chess board, addressed by zero-based row and column.
///
/// Row `0` is the eighth rank and row `7` the first, so that the board reads top to bottom
/// the way it is printed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Position {
    #[cfg_attr(test, strategy(0u8..8))]
    row: u8,
    #[cfg_attr(test, strategy(0u8..8))]
    col: u8,
}

/// The reason why a [`Position`] could not be addressed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "row {} and column {} are out of range", row, col)]
pub struct OutOfRange {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Number of rows and columns on the board.
    pub const SIZE: usize = 8;

    /// Constructs [`Position`] from a pair of row and column indices.
    #[inline(always)]
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRange> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OutOfRange { row, col })
        }
    }

    /// This position's row, `0` being the eighth rank.
    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row.into()
    }

    /// This position's column, `0` being the `a` file.
    #[inline(always)]
    pub fn col(&self) -> usize {
        self.col.into()
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::SIZE as u8)
            .flat_map(|row| (0..Self::SIZE as u8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(b'a' + self.col))?;
        f.write_char(char::from(b'8' - self.row))?;
        Ok(())
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse position, expected exactly two characters")]
    InvalidLength,
    #[display(fmt = "failed to parse position, expected file in the range `('a'..='h')`")]
    InvalidFile,
    #[display(fmt = "failed to parse position, expected rank in the range `('1'..='8')`")]
    InvalidRank,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParsePositionError::InvalidLength);
        };

        if !('a'..='h').contains(&file) {
            return Err(ParsePositionError::InvalidFile);
        }

        if !('1'..='8').contains(&rank) {
            return Err(ParsePositionError::InvalidRank);
        }

        Ok(Position {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}
