use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
///
/// Empty squares hold the [blank piece][`crate::chess::Piece::BLANK`], whose color is
/// [`Color::Blank`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "blank")]
    Blank,
}

impl Color {
    /// The colors that own pieces, in order.
    pub const SIDES: [Color; 2] = [Color::White, Color::Black];
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Blank => Color::Blank,
        }
    }
}
