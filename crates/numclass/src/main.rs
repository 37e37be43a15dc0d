use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod fact;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers: primality, perfection, Armstrong-ness, digit sum, and a fun fact"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the fun fact service
    #[clap(
        long,
        env = "NUMCLASS_FACTS_URL",
        global = true,
        default_value = numclass_core::fact::DEFAULT_FACTS_URL
    )]
    facts_url: String,

    /// Seconds to wait for the fun fact service before falling back
    #[clap(long, env = "NUMCLASS_FACT_TIMEOUT", global = true, default_value = "3")]
    fact_timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the HTTP classification server
    Serve(crate::server::ServeOptions),

    /// Classify a single number from the command line
    Classify(crate::classify::ClassifyOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
