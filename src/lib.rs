//
//  tweet-poster
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Tweet Poster Library
//!
//! Posts status updates to Twitter/X through either the legacy v1.1 API or
//! the v2 API, chosen by a runtime-switchable version selector.
//!
//! ## Features
//!
//! - **Two API generations**: v1.1 `statuses/update.json` and v2 `tweets`
//! - **Runtime switching**: both clients are built once, the selector picks one per post
//! - **OAuth 1.0a**: HMAC-SHA1 signed user-context requests
//! - **Normalized v2 results**: error envelopes become typed errors, success yields `data`
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: The [`TweetPoster`] dispatcher and the v1.1/v2 clients
//! - [`auth`]: Credentials and OAuth 1.0a signing
//! - [`config`]: Configuration file management and endpoint constants
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tweet_poster::{ApiVersion, Credentials, TweetPoster};
//!
//! # async fn example() -> Result<(), tweet_poster::api::PosterError> {
//! let mut poster = TweetPoster::new(Credentials::from_env()?)?;
//! poster.set_version(ApiVersion::V2);
//! let data = poster.post("Hello, world").await?;
//! println!("{}", data);
//! # Ok(())
//! # }
//! ```
//!
//! ## Version Differences
//!
//! | | v1.1 | v2 |
//! |---|------|----|
//! | Request | form `status=...` | JSON `{"text": ...}` |
//! | Result | raw body | serialized `data` |
//! | Error envelope | returned as-is | [`api::PosterError::Api`] |

/// Command-line interface definitions.
pub mod cli;

/// API clients and the version-dispatching poster.
pub mod api;

/// Credentials and OAuth 1.0a request signing.
pub mod auth;

/// Configuration file management.
///
/// - Linux: `~/.config/tweet/config.toml`
/// - macOS: `~/Library/Application Support/tweet/config.toml`
/// - Windows: `%APPDATA%\tweet\config.toml`
pub mod config;

pub use api::{ApiVersion, TweetPoster};
pub use auth::Credentials;
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for the User-Agent and configuration paths.
pub const APP_NAME: &str = "tweet";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// ```rust
/// use tweet_poster::VERSION;
///
/// println!("tweet version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including an unknown API version.
    pub const USAGE: i32 = 2;

    /// Credentials missing or refused by the platform (401/403).
    pub const AUTH_ERROR: i32 = 4;

    /// API rate limit exceeded (429).
    ///
    /// Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
