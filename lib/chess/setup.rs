use crate::chess::{Color, Rank};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// The initial placement of pieces on a [`Board`][`crate::chess::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Setup {
    /// The standard starting position, black on the first row.
    Standard {},
    /// No pieces at all.
    Empty {},
}

impl Default for Setup {
    fn default() -> Self {
        Setup::Standard {}
    }
}

impl Setup {
    /// The ranks of this setup, row `0` first.
    pub const fn ranks(&self) -> [Rank; 8] {
        match self {
            Setup::Standard {} => [
                Rank::back(Color::Black),
                Rank::pawns(Color::Black),
                Rank::blank(),
                Rank::blank(),
                Rank::blank(),
                Rank::blank(),
                Rank::pawns(Color::White),
                Rank::back(Color::White),
            ],

            Setup::Empty {} => [Rank::blank(); 8],
        }
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse board setup")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
