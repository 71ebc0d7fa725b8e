use crate::chess::*;
use crate::score::{PieceComparator, Scorer};
use derive_more::{Display, Error, From};
use std::fmt::{self, Formatter};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// The reason why a [`Board`] operation failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum BoardError {
    #[display(fmt = "{}", _0)]
    InvalidPosition(ParsePositionError),
    #[display(fmt = "{}", _0)]
    OutOfRange(OutOfRange),
    #[display(fmt = "{}", _0)]
    IllegalMove(IllegalMove),
}

/// The chess board.
///
/// A freshly constructed board has no ranks at all, it must be initialized with either the
/// [standard][`Board::initialize`] or an [empty][`Board::initialize_empty`] setup before
/// pieces can be looked up or moved.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Board<V = Permissive> {
    ranks: Option<[Rank; 8]>,
    validator: V,
}

impl Board {
    /// Constructs an uninitialized [`Board`] that accepts every move.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: MoveValidator> Board<V> {
    /// Constructs an uninitialized [`Board`] that consults `validator` before moving pieces.
    #[inline(always)]
    pub fn with_validator(validator: V) -> Self {
        Board {
            ranks: None,
            validator,
        }
    }

    /// Replaces every rank with the given [`Setup`].
    #[instrument(level = "debug", skip(self))]
    pub fn setup(&mut self, setup: Setup) {
        self.ranks = Some(setup.ranks());
    }

    /// Places the pieces in their standard starting position.
    #[inline(always)]
    pub fn initialize(&mut self) {
        self.setup(Setup::Standard {})
    }

    /// Fills the board with blank pieces.
    #[inline(always)]
    pub fn initialize_empty(&mut self) {
        self.setup(Setup::Empty {})
    }

    /// Whether this board has been initialized.
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.ranks.is_some()
    }

    /// The ranks of this board, row `0` first.
    ///
    /// Empty if the board has not been initialized.
    #[inline(always)]
    pub fn ranks(&self) -> &[Rank] {
        match &self.ranks {
            Some(ranks) => ranks,
            None => &[],
        }
    }

    /// Counts the pieces on the board, blank pieces excluded.
    pub fn piece_count(&self) -> usize {
        self.ranks()
            .iter()
            .flat_map(Rank::pieces)
            .filter(|p| p.is_white() || p.is_black())
            .count()
    }

    /// Renders one line per rank, row `0` first.
    pub fn show_board(&self) -> String {
        self.to_string()
    }

    /// Writes the [rendered][`Board::show_board`] board to `sink`.
    #[instrument(level = "trace", skip(self, sink), err)]
    pub fn print<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")?;
        sink.flush()
    }

    /// Counts the pieces of the given [`Color`] and [`Role`].
    ///
    /// Only white and black pieces are counted, the count is always `0` for [`Color::Blank`].
    pub fn count_pieces_by_color_and_type(&self, color: Color, role: Role) -> usize {
        match color {
            Color::White | Color::Black => {
                self.ranks().iter().map(|r| r.count(color, role)).sum()
            }

            Color::Blank => 0,
        }
    }

    /// The [`Piece`] at the given [`Position`].
    #[inline(always)]
    pub fn piece_at(&self, pos: Position) -> Result<Piece, OutOfRange> {
        match &self.ranks {
            Some(ranks) => Ok(ranks[pos.row()][pos.col()]),
            None => Err(OutOfRange {
                row: pos.row(),
                col: pos.col(),
            }),
        }
    }

    /// The [`Piece`] at the position in algebraic notation, e.g. `"a8"`.
    #[instrument(level = "trace", skip(self), err)]
    pub fn find_piece(&self, position: &str) -> Result<Piece, BoardError> {
        Ok(self.piece_at(position.parse()?)?)
    }

    /// Overwrites the slot at the given position with `piece`.
    ///
    /// This is a raw placement, no [`MoveValidator`] is consulted.
    #[instrument(level = "trace", skip(self), err)]
    pub fn place(&mut self, position: &str, piece: Piece) -> Result<(), BoardError> {
        let pos: Position = position.parse()?;
        self.rank_mut(pos)?.change_piece(pos.col(), piece);
        debug!(%pos, %piece, "placed piece");
        Ok(())
    }

    /// Relocates the piece at `source` to `destination`, leaving `source` blank.
    ///
    /// Whatever occupied `destination` is overwritten. Both positions are checked and the
    /// move validated before the board is touched.
    #[instrument(level = "trace", skip(self), err)]
    pub fn move_piece(&mut self, source: &str, destination: &str) -> Result<(), BoardError> {
        let from: Position = source.parse()?;
        let to: Position = destination.parse()?;
        let piece = self.piece_at(from)?;
        self.piece_at(to)?;

        self.validator.validate(self.ranks(), piece, from, to)?;

        self.rank_mut(from)?.change_piece(from.col(), Piece::blank());
        self.rank_mut(to)?.change_piece(to.col(), piece);
        debug!(%from, %to, %piece, "moved piece");

        Ok(())
    }

    /// Sums the point value of every piece of the given [`Color`].
    pub fn calculate_point(&self, color: Color) -> f64 {
        Scorer::new().calculate_point(self.ranks(), color)
    }

    /// Every piece of the given [`Color`], sorted by `comparator`.
    pub fn find_all_pieces_sort_by_point<C: PieceComparator>(
        &self,
        color: Color,
        comparator: C,
    ) -> Vec<Piece> {
        Scorer::new().find_all_pieces_sort_by_point(self.ranks(), color, comparator)
    }

    fn rank_mut(&mut self, pos: Position) -> Result<&mut Rank, OutOfRange> {
        match &mut self.ranks {
            Some(ranks) => Ok(&mut ranks[pos.row()]),
            None => Err(OutOfRange {
                row: pos.row(),
                col: pos.col(),
            }),
        }
    }
}

impl<V> fmt::Display for Board<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in self.ranks.iter().flatten() {
            writeln!(f, "{rank}")?;
        }

        Ok(())
    }
}
