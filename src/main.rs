use clap::Parser;
use tagformula::cli::{self, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Edit mode runs the TUI until the user quits; eval prints one result
    cli::run(cli)?;

    Ok(())
}
