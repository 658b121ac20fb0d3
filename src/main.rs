//! CLI entry point for the raster effect tool

use clap::Parser;
use pixmorph::io::cli::{Cli, EffectRunner};

fn main() -> pixmorph::Result<()> {
    let cli = Cli::parse();
    let runner = EffectRunner::new(cli);
    runner.run()
}
