use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod scripts;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        Some(cli::Commands::Install(args)) => scripts::install(&args),
        Some(cli::Commands::Lint(args)) => scripts::lint::run(&args),
        None => {
            println!("No task given. Run `cargo xtask --help` to list the available tasks.");
            Ok(())
        }
    }
}
