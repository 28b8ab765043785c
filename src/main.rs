//! CLI entry point for the photo-mosaic generator

use clap::Parser;
use tessella::io::cli::{Cli, MosaicRunner};

fn main() -> tessella::Result<()> {
    let cli = Cli::parse();
    let mut runner = MosaicRunner::new(cli);
    runner.run()
}
