//
//  tweet-poster
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod post;

pub use config::ConfigCommand;
pub use post::PostCommand;

use clap::{Parser, Subcommand};

/// tweet - Post to Twitter/X from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tweet",
    version,
    about = "Post to Twitter/X from the command line",
    long_about = "tweet posts status updates through the v1.1 or v2 API.\n\n\
                  Credentials are read from flags or TWITTER_* environment variables.",
    propagate_version = true,
    after_help = "Use 'tweet <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a status update
    #[command(visible_alias = "p")]
    Post(PostCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}
