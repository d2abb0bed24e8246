//
//  tweet-poster
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tweet_poster::api::PosterError;
use tweet_poster::cli::{Cli, Commands};
use tweet_poster::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TWEET_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps a failure to the CLI exit code
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<PosterError>() {
        Some(PosterError::InvalidVersion(_)) => exit_codes::USAGE,
        Some(PosterError::MissingCredential(_)) => exit_codes::AUTH_ERROR,
        Some(e) if e.is_auth_failure() => exit_codes::AUTH_ERROR,
        Some(e) if e.is_rate_limited() => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Post(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("tweet version {}", tweet_poster::VERSION);
            Ok(())
        }
    }
}
