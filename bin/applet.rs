use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod play;
mod score;
mod show;

#[derive(From, Subcommand)]
pub enum Applet {
    Show(show::Show),
    Score(score::Score),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        show::Show::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Show(a) => a.execute(),
            Applet::Score(a) => a.execute(),
            Applet::Play(a) => a.execute(),
        }
    }
}
