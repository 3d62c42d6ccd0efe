use clap::Parser;
use std::process;

use taskboard::cli::{self, Cli, Commands, Globals};
use taskboard::logging;

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();
    if let Err(e) = logging::init_tracing(cli_args.verbose, cli_args.quiet) {
        eprintln!("Error: {e}");
    }
    let globals = Globals::from_cli(&cli_args);

    let exit_code = match cli_args.command {
        Commands::Init { timeout } => cli::init::run(timeout, &globals),
        Commands::Task(cmd) => cli::task::run(cmd, &globals).await,
        Commands::Stats { remote } => cli::stats::run(remote, &globals).await,
        Commands::Dashboard => cli::dashboard::run(&globals).await,
        Commands::Weather { id, lat, lon, date } => {
            cli::weather::run(id, lat, lon, date, &globals).await
        }
    };

    process::exit(exit_code);
}
