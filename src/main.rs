use clap::Parser;
use miette::Result;
use plates::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    plates::cli::convert::run(cli.args)?;
    Ok(())
}
