use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Inspect, score and rearrange a chessboard.
///
/// Diagnostics are written to stderr, boards and scores to stdout.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of diagnostics.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// What to do, prints the standard board by default.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    pub fn execute(self) -> Result<(), Anyhow> {
        subscribe(self.verbosity);
        self.run()
    }

    #[instrument(level = "trace", skip(self), err)]
    fn run(self) -> Result<(), Anyhow> {
        self.applet.unwrap_or_default().execute()
    }
}

fn subscribe(verbosity: Level) {
    let filter = Targets::new()
        .with_target("cli", verbosity)
        .with_target("lib", verbosity)
        .with_default(min(Level::WARN, verbosity));

    let writer = layer()
        .compact()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stderr);

    registry().with(filter).with(writer).init();
}
