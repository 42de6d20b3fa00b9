use anyhow::Result;
use clap::Parser;
use sportello::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
