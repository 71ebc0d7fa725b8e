use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Setup};
use std::io::stdout;
use tracing::{info, instrument};

/// Prints the board.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Show {
    /// The initial placement of pieces.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = Board::new();
        board.setup(self.setup);
        info!(pieces = board.piece_count());
        board.print(&mut stdout().lock())?;
        Ok(())
    }
}
