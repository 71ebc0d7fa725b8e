use crate::chess::{Color, Piece, Position, Role};
use std::fmt::{self, Formatter};
use std::ops::Index;

/// A row of the chess board, indexed by column.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Rank([Piece; Position::SIZE]);

impl Rank {
    /// A rank of blank pieces.
    #[inline(always)]
    pub const fn blank() -> Self {
        Rank([Piece::BLANK; Position::SIZE])
    }

    /// A rank of eight pawns of the given [`Color`].
    #[inline(always)]
    pub const fn pawns(color: Color) -> Self {
        Rank([Piece::new(Role::Pawn, color); Position::SIZE])
    }

    /// The back rank of the given [`Color`], rooks on the edges and the king on the `e` file.
    #[inline(always)]
    pub const fn back(color: Color) -> Self {
        Rank([
            Piece::new(Role::Rook, color),
            Piece::new(Role::Knight, color),
            Piece::new(Role::Bishop, color),
            Piece::new(Role::Queen, color),
            Piece::new(Role::King, color),
            Piece::new(Role::Bishop, color),
            Piece::new(Role::Knight, color),
            Piece::new(Role::Rook, color),
        ])
    }

    /// The pieces on this rank in column order.
    #[inline(always)]
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    /// Replaces the piece on the given column.
    #[inline(always)]
    pub fn change_piece(&mut self, col: usize, piece: Piece) {
        self.0[col] = piece;
    }

    /// Counts pieces of the given [`Color`] and [`Role`].
    pub fn count(&self, color: Color, role: Role) -> usize {
        self.0
            .iter()
            .filter(|p| p.color() == color && p.role() == role)
            .count()
    }

    /// Sums the point value of the pieces of the given [`Color`].
    pub fn calculate_rank_point(&self, color: Color) -> f64 {
        self.find_pieces(color)
            .fold(0.0, |points, p| points + p.role().value())
    }

    /// An iterator over the pieces of the given [`Color`] in column order.
    pub fn find_pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.0.iter().copied().filter(move |p| p.color() == color)
    }
}

impl Index<usize> for Rank {
    type Output = Piece;

    #[inline(always)]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for p in &self.0 {
            fmt::Display::fmt(p, f)?;
        }

        Ok(())
    }
}
