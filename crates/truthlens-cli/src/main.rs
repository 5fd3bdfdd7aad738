//! TruthLens CLI - Command-line misinformation detector and educator.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use truthlens_cli::backend::build_analyzer;
use truthlens_cli::commands;
use truthlens_cli::repl;
use truthlens_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    // Log to stderr so report output on stdout stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> truthlens_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Override profile for this run only
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Tips) => commands::execute_tips(&formatter)?,
        Some(Command::Quiz) => commands::execute_quiz(&formatter)?,
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &config_path, &formatter)?
        }
        Some(Command::Analyze(args)) => {
            let analyzer = build_analyzer(&config)?;
            commands::execute_analyze(args, &analyzer, &formatter).await?;
        }
        None | Some(Command::Repl) => {
            let analyzer = build_analyzer(&config)?;
            repl::run_repl(&mut config, &config_path, &analyzer, &formatter).await?;
        }
    }

    Ok(())
}
