use crate::chess::{Color, Piece, Rank};
use derive_more::{Constructor, Display, Error};
use std::{cmp::Ordering, str::FromStr};
use tracing::instrument;

/// Trait for types that order [`Piece`]s.
pub trait PieceComparator {
    /// Compares two pieces.
    fn compare(&self, a: &Piece, b: &Piece) -> Ordering;
}

impl<F: Fn(&Piece, &Piece) -> Ordering> PieceComparator for F {
    #[inline(always)]
    fn compare(&self, a: &Piece, b: &Piece) -> Ordering {
        self(a, b)
    }
}

/// Orders [`Piece`]s by point value, ties broken by [`Role`][`crate::chess::Role`] ordinal.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum PointOrder {
    #[display(fmt = "ascending")]
    Ascending,
    #[default]
    #[display(fmt = "descending")]
    Descending,
}

impl PieceComparator for PointOrder {
    fn compare(&self, a: &Piece, b: &Piece) -> Ordering {
        let ascending = f64::total_cmp(&a.role().value(), &b.role().value())
            .then_with(|| a.role().cmp(&b.role()));

        match self {
            PointOrder::Ascending => ascending,
            PointOrder::Descending => ascending.reverse(),
        }
    }
}

/// The reason why parsing [`PointOrder`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse order, expected `ascending` or `descending`")]
pub struct ParsePointOrderError;

impl FromStr for PointOrder {
    type Err = ParsePointOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(PointOrder::Ascending),
            "descending" => Ok(PointOrder::Descending),
            _ => Err(ParsePointOrderError),
        }
    }
}

/// Scores the material of each side.
#[derive(Debug, Default, Copy, Clone, Constructor)]
pub struct Scorer {}

impl Scorer {
    /// Sums the point value of every piece of the given [`Color`].
    #[instrument(level = "trace", skip(self, ranks), ret)]
    pub fn calculate_point(&self, ranks: &[Rank], color: Color) -> f64 {
        ranks
            .iter()
            .fold(0.0, |points, r| points + r.calculate_rank_point(color))
    }

    /// Collects every piece of the given [`Color`] in row-major order and sorts them.
    ///
    /// The sort is stable, pieces the comparator deems equal keep their board order.
    #[instrument(level = "trace", skip(self, ranks, comparator))]
    pub fn find_all_pieces_sort_by_point<C: PieceComparator>(
        &self,
        ranks: &[Rank],
        color: Color,
        comparator: C,
    ) -> Vec<Piece> {
        let mut pieces: Vec<_> = ranks.iter().flat_map(|r| r.find_pieces(color)).collect();
        pieces.sort_by(|a, b| comparator.compare(a, b));
        pieces
    }
}
