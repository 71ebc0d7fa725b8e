use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// The type of a chess [`Piece`][`crate::chess::Piece`].
///
/// Variants are declared in ascending order of their ordinal, which is also how they compare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Blank,
}

impl Role {
    /// The roles of living pieces, in order.
    pub const LIVING: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// The default point value of this role.
    #[inline(always)]
    pub const fn value(&self) -> f64 {
        match self {
            Role::Pawn => 1.0,
            Role::Knight => 3.0,
            Role::Bishop => 3.0,
            Role::Rook => 5.0,
            Role::Queen => 9.0,
            Role::King => 0.0,
            Role::Blank => 0.0,
        }
    }

    /// The lowercase glyph of this role, `'.'` for [`Role::Blank`].
    #[inline(always)]
    pub const fn glyph(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Blank => '.',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.glyph())
    }
}

/// The reason why converting a glyph into a [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role, expected one of `pnbrqk.`")]
pub struct ParseRoleError;

impl TryFrom<char> for Role {
    type Error = ParseRoleError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' => Ok(Role::Pawn),
            'n' => Ok(Role::Knight),
            'b' => Ok(Role::Bishop),
            'r' => Ok(Role::Rook),
            'q' => Ok(Role::Queen),
            'k' => Ok(Role::King),
            '.' => Ok(Role::Blank),
            _ => Err(ParseRoleError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn roles_carry_their_default_point_values() {
        assert_eq!(Role::Pawn.value(), 1.0);
        assert_eq!(Role::Knight.value(), 3.0);
        assert_eq!(Role::Bishop.value(), 3.0);
        assert_eq!(Role::Rook.value(), 5.0);
        assert_eq!(Role::Queen.value(), 9.0);
        assert_eq!(Role::King.value(), 0.0);
        assert_eq!(Role::Blank.value(), 0.0);
    }

    #[test]
    fn roles_are_ordered_by_declaration() {
        assert!(Role::LIVING.windows(2).all(|w| w[0] < w[1]));
        assert!(Role::King < Role::Blank);
    }

    #[proptest]
    fn role_can_be_converted_from_its_glyph(r: Role) {
        assert_eq!(Role::try_from(r.glyph()), Ok(r));
    }

    #[proptest]
    fn converting_role_fails_if_not_one_of_lowercase_pnbrqk_or_dot(
        #[filter(!['p', 'n', 'b', 'r', 'q', 'k', '.'].contains(&#c))] c: char,
    ) {
        assert_eq!(Role::try_from(c), Err(ParseRoleError));
    }
}
