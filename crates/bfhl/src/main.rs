use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod identifier;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify string tokens into odd, even, alphabetic and special buckets"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BFHL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the BFHL HTTP API
    Serve(crate::server::ServeOptions),

    /// Classify tokens given on the command line
    Classify(crate::classify::ClassifyOptions),

    /// Generate, validate and parse name_DDMMYYYY identifiers
    Id(crate::identifier::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global),
        SubCommands::Id(sub_app) => crate::identifier::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
