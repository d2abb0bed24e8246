//
//  tweet-poster
//  cli/post.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Post command
//!
//! Builds a [`TweetPoster`] from flags, environment and the config file,
//! then posts a single status update.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::api::{ApiVersion, TweetPoster};
use crate::auth::{
    Credentials, ENV_ACCESS_TOKEN, ENV_ACCESS_TOKEN_SECRET, ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET,
};
use crate::config::Config;

use super::GlobalOptions;

/// Post a status update
#[derive(Args, Debug)]
pub struct PostCommand {
    /// Status text
    pub text: String,

    /// API version to post with (1 or 2); defaults to the configured version
    #[arg(long, short = 'a', value_name = "VERSION")]
    pub api_version: Option<ApiVersion>,

    /// OAuth access token
    #[arg(long, env = ENV_ACCESS_TOKEN, hide_env_values = true)]
    pub access_token: String,

    /// OAuth access token secret
    #[arg(long, env = ENV_ACCESS_TOKEN_SECRET, hide_env_values = true)]
    pub access_token_secret: String,

    /// OAuth consumer key
    #[arg(long, env = ENV_CONSUMER_KEY, hide_env_values = true)]
    pub consumer_key: String,

    /// OAuth consumer secret
    #[arg(long, env = ENV_CONSUMER_SECRET, hide_env_values = true)]
    pub consumer_secret: String,
}

impl PostCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let credentials = Credentials::new(
            &self.access_token,
            &self.access_token_secret,
            &self.consumer_key,
            &self.consumer_secret,
        );

        // The flag wins over the configured version, which is not parsed then
        let mut api = config.api;
        if let Some(version) = self.api_version {
            api.version = version.to_string();
        }

        let poster = TweetPoster::from_config(credentials, &api)
            .context("Failed to set up the API clients")?;

        let payload = poster.post(&self.text).await?;

        if global.json {
            // v1.1 bodies are passed through verbatim and may not be JSON
            match serde_json::from_str::<serde_json::Value>(&payload) {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                Err(_) => println!("{}", payload),
            }
        } else {
            eprintln!(
                "{} Posted via API v{}",
                style("✓").green(),
                style(poster.version()).cyan()
            );
            println!("{}", payload);
        }

        Ok(())
    }
}
