//! Pyro CLI - serve and inspect wood pyrolysis simulation output.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pyro-cli",
    version,
    about = "Wood pyrolysis dynamics dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: pyro_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.command.debug() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("Debug logging enabled");

    pyro_cmd::run(cli.command).await
}
