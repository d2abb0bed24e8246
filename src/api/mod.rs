//
//  tweet-poster
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP clients for the two API generations and the dispatcher that picks
//! between them.
//!
//! ## Supported APIs
//!
//! - **v1.1**: `POST /1.1/statuses/update.json`, form-encoded `status`
//! - **v2**: `POST /2/tweets`, JSON `{"text": ...}`
//!
//! ## Architecture
//!
//! - [`client`]: [`TweetPoster`] and the [`ApiVersion`] selector
//! - [`v1`]: [`LegacyClient`], returns the response body verbatim
//! - [`v2`]: [`TweetsClient`], unwraps the `data` member of the response
//! - [`common`]: [`PosterError`] shared by all of the above
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tweet_poster::api::{ApiVersion, TweetPoster};
//! use tweet_poster::auth::Credentials;
//!
//! # async fn example() -> Result<(), tweet_poster::api::PosterError> {
//! let credentials = Credentials::from_env()?;
//! let mut poster = TweetPoster::new(credentials)?;
//! poster.set_version(ApiVersion::V2);
//!
//! let payload = poster.post("hello from Rust").await?;
//! println!("{}", payload);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors are [`PosterError`] variants:
//!
//! - `InvalidVersion`: a version string outside `1`/`2`
//! - `Api`: the v2 API returned an error envelope
//! - `MissingData`: the v2 API returned neither an error nor `data`
//! - `Transport`: the HTTP request itself failed

/// Dispatcher and version selector.
pub mod client;

/// Common error types.
pub mod common;

/// Legacy v1.1 status update client.
pub mod v1;

/// v2 tweets client and response normalization.
pub mod v2;

pub use client::{ApiVersion, TweetPoster};
pub use common::{PosterError, PosterResult};
pub use v1::LegacyClient;
pub use v2::{normalize, TweetsClient, TweetsResponse};
