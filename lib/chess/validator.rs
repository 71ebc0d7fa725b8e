use crate::chess::{Piece, Position, Rank};
use derive_more::{Display, Error};

/// The reason why a move was rejected by a [`MoveValidator`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "moving `{}` from {} to {} is not allowed", piece, from, to)]
pub struct IllegalMove {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
}

/// Trait for types that decide whether a piece may be moved.
///
/// The board consults its validator before relocating a piece, so rules can be swapped
/// without touching the board representation.
#[cfg_attr(test, mockall::automock)]
pub trait MoveValidator {
    /// Checks whether `piece` may move `from` one [`Position`] `to` another on `ranks`.
    fn validate(
        &self,
        ranks: &[Rank],
        piece: Piece,
        from: Position,
        to: Position,
    ) -> Result<(), IllegalMove>;
}

/// A [`MoveValidator`] that accepts every move.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Permissive;

impl MoveValidator for Permissive {
    #[inline(always)]
    fn validate(&self, _: &[Rank], _: Piece, _: Position, _: Position) -> Result<(), IllegalMove> {
        Ok(())
    }
}
