//! xamlgen CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xamlgen_engine::cli::{Cli, Commands};
use xamlgen_engine::commands::{run_class, run_profile, run_property, CommandContext};
use xamlgen_engine::XamlGenConfig;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> xamlgen_engine::Result<String> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => XamlGenConfig::load_from(path)?,
        None => XamlGenConfig::load()?,
    };

    init_logging(&cli, &config);

    let ctx = CommandContext::from_cli(cli.format, cli.verbose, config);
    match &cli.command {
        Commands::Class(args) => run_class(&ctx, args),
        Commands::Property(args) => run_property(&ctx, args),
        Commands::Profile(args) => run_profile(&ctx, args),
    }
}

/// Logs go to stderr so stdout carries only markup or JSON
fn init_logging(cli: &Cli, config: &XamlGenConfig) {
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("xamlgen_engine={}", level)))
        .unwrap_or_else(|_| EnvFilter::new("xamlgen_engine=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
