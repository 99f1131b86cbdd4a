use clap::Parser;
use nfp_cli::cli::{Cli, Commands};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = match &cli.command {
        Some(Commands::Generate {
            sources,
            transits,
            destinations,
            demands,
            out_dir,
            print,
        }) => {
            info!(
                "Generating flow-distribution LP for X={}, Y={}, Z={}",
                sources, transits, destinations
            );
            commands::generate::handle(
                *sources,
                *transits,
                *destinations,
                demands.as_deref(),
                out_dir,
                *print,
            )
        }
        Some(Commands::Completions { shell, out }) => {
            commands::completions::handle(*shell, out.as_deref())
        }
        None => {
            info!("No subcommand provided. Use `nfp-cli --help` for more information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => info!("Flow planning run finished successfully"),
        Err(e) => {
            error!("Flow planning run failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
