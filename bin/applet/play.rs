use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{Board, ParsePieceError, ParsePositionError, Piece, Position, Setup};
use std::{io::stdout, str::FromStr};
use tracing::{info, instrument};

/// A single change to the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// Relocates a piece, e.g. `e2e4`.
    #[display(fmt = "{}{}", _0, _1)]
    Move(Position, Position),
    /// Overwrites a square, e.g. `b5=R`.
    #[display(fmt = "{}={}", _0, _1)]
    Place(Position, Piece),
}

/// The reason why parsing [`Step`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseStepError {
    #[display(fmt = "failed to parse step, expected `<from><to>` or `<position>=<piece>`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse step")]
    InvalidPosition(ParsePositionError),
    #[display(fmt = "failed to parse step")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((pos, piece)) = s.split_once('=') {
            return Ok(Step::Place(pos.parse()?, piece.parse()?));
        }

        match s.char_indices().nth(2) {
            Some((i, _)) => Ok(Step::Move(s[..i].parse()?, s[i..].parse()?)),
            None => Err(ParseStepError::InvalidSyntax),
        }
    }
}

/// Applies a sequence of steps to the board, then prints it.
///
/// Moves are not checked against the rules of chess.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The initial placement of pieces.
    #[clap(short, long, default_value_t)]
    setup: Setup,

    /// Steps to apply in order, e.g. `e2e4` or `b5=R`.
    steps: Vec<Step>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = Board::new();
        board.setup(self.setup);

        for step in self.steps {
            let applied = match step {
                Step::Move(from, to) => board.move_piece(&from.to_string(), &to.to_string()),
                Step::Place(pos, piece) => board.place(&pos.to_string(), piece),
            };

            applied.with_context(|| format!("failed to apply `{step}`"))?;

            info!(%step);
        }

        board.print(&mut stdout().lock())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn step_can_be_a_move() {
        assert_eq!(
            "e2e4".parse(),
            Ok(Step::Move("e2".parse().unwrap(), "e4".parse().unwrap()))
        );
    }

    #[test]
    fn step_can_be_a_placement() {
        assert_eq!(
            "b5=R".parse(),
            Ok(Step::Place("b5".parse().unwrap(), Piece::BLACK_ROOK))
        );
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(
        #[strategy("[a-h][1-8][a-h][1-8]")] s: String,
    ) {
        assert_eq!(s.parse::<Step>().map(|step| step.to_string()), Ok(s));
    }

    #[proptest]
    fn parsing_printed_placement_is_an_identity(
        #[strategy("[a-h][1-8]=[pnbrqkPNBRQK.]")] s: String,
    ) {
        assert_eq!(s.parse::<Step>().map(|step| step.to_string()), Ok(s));
    }

    #[proptest]
    fn parsing_step_fails_if_too_short(#[strategy("[a-h1-8]{0,2}")] s: String) {
        assert_eq!(s.parse::<Step>(), Err(ParseStepError::InvalidSyntax));
    }

    #[test]
    fn parsing_step_fails_for_invalid_position() {
        assert_eq!(
            "i2e4".parse::<Step>(),
            Err(ParseStepError::InvalidPosition(ParsePositionError::InvalidFile))
        );
    }

    #[test]
    fn parsing_step_fails_for_invalid_piece() {
        assert_eq!(
            "e4=x".parse::<Step>(),
            Err(ParseStepError::InvalidPiece(ParsePieceError))
        );
    }

    #[test]
    fn steps_are_applied_in_order() {
        let mut board = Board::new();
        board.initialize();

        for step in ["e2e4", "e7e5", "d1h5", "h5=."] {
            let applied = match step.parse() {
                Ok(Step::Move(from, to)) => board.move_piece(&from.to_string(), &to.to_string()),
                Ok(Step::Place(pos, piece)) => board.place(&pos.to_string(), piece),
                Err(e) => panic!("{e}"),
            };

            assert_eq!(applied, Ok(()));
        }

        assert_eq!(board.piece_count(), 31);
        assert_eq!(board.find_piece("e4"), Ok(Piece::WHITE_PAWN));
        assert_eq!(board.find_piece("e5"), Ok(Piece::BLACK_PAWN));
        assert_eq!(board.find_piece("h5"), Ok(Piece::blank()));
    }
}
