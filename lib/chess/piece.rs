use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

#[cfg(test)]
use proptest::sample::select;

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Empty squares are occupied by [`Piece::BLANK`], so a [`Piece`] is never absent from the
/// board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    #[cfg_attr(test, strategy(select(Role::LIVING.to_vec())))]
    role: Role,
    #[cfg_attr(test, strategy(select(Color::SIDES.to_vec())))]
    color: Color,
}

impl Piece {
    pub const WHITE_PAWN: Self = Piece::new(Role::Pawn, Color::White);
    pub const WHITE_KNIGHT: Self = Piece::new(Role::Knight, Color::White);
    pub const WHITE_BISHOP: Self = Piece::new(Role::Bishop, Color::White);
    pub const WHITE_ROOK: Self = Piece::new(Role::Rook, Color::White);
    pub const WHITE_QUEEN: Self = Piece::new(Role::Queen, Color::White);
    pub const WHITE_KING: Self = Piece::new(Role::King, Color::White);
    pub const BLACK_PAWN: Self = Piece::new(Role::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Self = Piece::new(Role::Knight, Color::Black);
    pub const BLACK_BISHOP: Self = Piece::new(Role::Bishop, Color::Black);
    pub const BLACK_ROOK: Self = Piece::new(Role::Rook, Color::Black);
    pub const BLACK_QUEEN: Self = Piece::new(Role::Queen, Color::Black);
    pub const BLACK_KING: Self = Piece::new(Role::King, Color::Black);

    /// The sentinel that occupies empty squares.
    pub const BLANK: Self = Piece {
        role: Role::Blank,
        color: Color::Blank,
    };

    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    ///
    /// If either of them is blank, the result is [`Piece::BLANK`].
    #[inline(always)]
    pub const fn new(role: Role, color: Color) -> Self {
        match (role, color) {
            (Role::Blank, _) | (_, Color::Blank) => Piece::BLANK,
            (role, color) => Piece { role, color },
        }
    }

    /// The piece that occupies empty squares.
    #[inline(always)]
    pub const fn blank() -> Self {
        Piece::BLANK
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether this is a white piece.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self.color, Color::White)
    }

    /// Whether this is a black piece.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    /// Whether this is the blank piece.
    #[inline(always)]
    pub const fn is_blank(&self) -> bool {
        matches!(self.color, Color::Blank)
    }

    /// The glyph of this piece.
    ///
    /// Black pieces are uppercase, white pieces lowercase and the blank piece is `'.'`.
    #[inline(always)]
    pub const fn representation(&self) -> char {
        match self.color {
            Color::Black => self.role.glyph().to_ascii_uppercase(),
            Color::White | Color::Blank => self.role.glyph(),
        }
    }
}

impl Default for Piece {
    #[inline(always)]
    fn default() -> Self {
        Piece::BLANK
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.representation())
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `pnbrqkPNBRQK.`")]
pub struct ParsePieceError;

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let role = Role::try_from(c.to_ascii_lowercase()).map_err(|_| ParsePieceError)?;

        let color = match c {
            '.' => Color::Blank,
            c if c.is_ascii_uppercase() => Color::Black,
            _ => Color::White,
        };

        Ok(Piece::new(role, color))
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParsePieceError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color(
        #[strategy(select(Role::LIVING.to_vec()))] r: Role,
        #[strategy(select(Color::SIDES.to_vec()))] c: Color,
    ) {
        assert_eq!(Piece::new(r, c).color(), c);
    }

    #[proptest]
    fn piece_has_a_role(
        #[strategy(select(Role::LIVING.to_vec()))] r: Role,
        #[strategy(select(Color::SIDES.to_vec()))] c: Color,
    ) {
        assert_eq!(Piece::new(r, c).role(), r);
    }

    #[proptest]
    fn piece_with_blank_role_or_color_is_blank(r: Role, c: Color) {
        if r == Role::Blank || c == Color::Blank {
            assert_eq!(Piece::new(r, c), Piece::blank());
        } else {
            assert!(!Piece::new(r, c).is_blank());
        }
    }

    #[proptest]
    fn living_piece_is_either_white_or_black(p: Piece) {
        assert_ne!(p.is_white(), p.is_black());
        assert!(!p.is_blank());
    }

    #[test]
    fn blank_piece_is_neither_white_nor_black() {
        assert!(!Piece::BLANK.is_white());
        assert!(!Piece::BLANK.is_black());
        assert!(Piece::BLANK.is_blank());
        assert_eq!(Piece::BLANK.role(), Role::Blank);
        assert_eq!(Piece::BLANK.color(), Color::Blank);
    }

    #[test]
    fn black_pieces_are_represented_in_uppercase() {
        let glyphs: String = [
            Piece::BLACK_PAWN,
            Piece::BLACK_KNIGHT,
            Piece::BLACK_BISHOP,
            Piece::BLACK_ROOK,
            Piece::BLACK_QUEEN,
            Piece::BLACK_KING,
        ]
        .iter()
        .map(Piece::representation)
        .collect();

        assert_eq!(glyphs, "PNBRQK");
    }

    #[test]
    fn white_pieces_are_represented_in_lowercase() {
        let glyphs: String = [
            Piece::WHITE_PAWN,
            Piece::WHITE_KNIGHT,
            Piece::WHITE_BISHOP,
            Piece::WHITE_ROOK,
            Piece::WHITE_QUEEN,
            Piece::WHITE_KING,
        ]
        .iter()
        .map(Piece::representation)
        .collect();

        assert_eq!(glyphs, "pnbrqk");
    }

    #[test]
    fn blank_piece_is_represented_by_a_dot() {
        assert_eq!(Piece::blank().representation(), '.');
        assert_eq!(Piece::default(), Piece::blank());
    }

    #[proptest]
    fn piece_is_displayed_as_its_representation(p: Piece) {
        assert_eq!(p.to_string(), p.representation().to_string());
    }

    #[proptest]
    fn parsing_printed_piece_is_an_identity(p: Piece) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_piece_fails_if_not_a_glyph(
        #[filter(!"pnbrqkPNBRQK.".contains(#c))] c: char,
    ) {
        assert_eq!(Piece::try_from(c), Err(ParsePieceError));
    }

    #[proptest]
    fn parsing_piece_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<Piece>(), Err(ParsePieceError));
    }
}
