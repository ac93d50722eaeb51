//! CLI entry point for the dancing links exact cover solver

use clap::Parser;
use dlxcover::io::cli::{Cli, Driver};

fn main() -> dlxcover::Result<()> {
    let cli = Cli::parse();
    let mut driver = Driver::new(cli);
    let mut out = std::io::stdout().lock();
    driver.run(&mut out)
}
