//! CLI entry point for the sliding block puzzle solver

use clap::Parser;
use huarong::io::cli::{Cli, FileProcessor};

fn main() -> huarong::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
