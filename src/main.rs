//! CLI entry point for the constraint-based tile map generator

use clap::Parser;
use terrasolve::io::cli::{Cli, MapRunner};
use terrasolve::io::logging::init_logging;

fn main() -> terrasolve::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let runner = MapRunner::new(cli);
    runner.run()
}
