use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color, Setup};
use lib::score::PointOrder;
use std::io::{stdout, Write};
use tracing::{info, instrument};

/// Scores the material of both sides.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Score {
    /// The initial placement of pieces.
    #[clap(short, long, default_value_t)]
    setup: Setup,

    /// How pieces are listed.
    #[clap(short, long, default_value_t)]
    order: PointOrder,
}

impl Score {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = Board::new();
        board.setup(self.setup);

        let mut out = stdout().lock();
        for color in Color::SIDES {
            let points = board.calculate_point(color);
            let pieces = board.find_all_pieces_sort_by_point(color, self.order);
            info!(%color, points, count = pieces.len());

            let glyphs: String = pieces.iter().map(|p| p.representation()).collect();
            writeln!(out, "{color}: {points} {glyphs}")?;
        }

        Ok(())
    }
}
