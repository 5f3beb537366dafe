mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::builder::build_config;
use crate::config::models::CliOverrides;
use crate::error::{CliError, Result};
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ An unexpected error occurred; see details below.");
        eprintln!("   {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("   caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!(
        "🔬 Grantham Score Calculator v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let overrides = match &cli.command {
        Commands::Score(args) => CliOverrides {
            classify: args.classify,
            ..Default::default()
        },
        Commands::Matrix(args) => CliOverrides {
            matrix_format: args.format,
            ..Default::default()
        },
        Commands::Codes | Commands::Env => CliOverrides::default(),
    };
    let app_config = build_config(cli.config.as_deref(), &cli.set_values, overrides)?;

    let command_result = match cli.command {
        Commands::Score(args) => {
            info!("Dispatching to 'score' command.");
            commands::score::run(args, &app_config)
        }
        Commands::Codes => {
            info!("Dispatching to 'codes' command.");
            commands::codes::run()
        }
        Commands::Matrix(_) => {
            info!("Dispatching to 'matrix' command.");
            commands::matrix::run(&app_config)
        }
        Commands::Env => {
            info!("Dispatching to 'env' command.");
            commands::env::run(&app_config)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
