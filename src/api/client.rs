//
//  tweet-poster
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Version-dispatching Poster
//!
//! [`TweetPoster`] owns one client per API generation and an [`ApiVersion`]
//! selector. Every [`TweetPoster::post`] goes to the client matching the
//! selector at call time.
//!
//! ## Features
//!
//! - Both clients are built up front so the version can be switched at any
//!   point without rebuilding anything
//! - Selector changes need `&mut self`, posting needs `&self`, so a post can
//!   never observe a half-written selector
//! - [`TweetPoster::post_as`] bypasses the selector for callers that prefer to
//!   pass the version per call

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::common::{PosterError, PosterResult};
use super::v1::LegacyClient;
use super::v2::TweetsClient;
use crate::auth::Credentials;
use crate::config::{normalize_base_url, ApiConfig};

/// API generation used for posting.
///
/// # Variants
///
/// * `V1` - Legacy v1.1 form-encoded `statuses/update.json` (default)
/// * `V2` - JSON `tweets` endpoint
///
/// # Parsing
///
/// Case-insensitive, surrounding whitespace ignored:
///
/// | Input | Version |
/// |-------|---------|
/// | `1`, `v1`, `1.1`, `v1.1` | `V1` |
/// | `2`, `v2` | `V2` |
///
/// # Example
///
/// ```rust
/// use tweet_poster::api::ApiVersion;
///
/// assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
/// assert_eq!(ApiVersion::V1.to_string(), "1");
/// assert!("3".parse::<ApiVersion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Legacy v1.1 API
    #[default]
    V1,
    /// v2 API
    V2,
}

impl FromStr for ApiVersion {
    type Err = PosterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "v1" | "1.1" | "v1.1" => Ok(Self::V1),
            "2" | "v2" => Ok(Self::V2),
            _ => Err(PosterError::InvalidVersion(raw.to_string())),
        }
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = PosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(PosterError::InvalidVersion(other.to_string())),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "1"),
            Self::V2 => write!(f, "2"),
        }
    }
}

/// Posts status updates through whichever API version is selected.
///
/// # Creating a Poster
///
/// ```rust,no_run
/// use tweet_poster::api::{ApiVersion, TweetPoster};
/// use tweet_poster::auth::Credentials;
///
/// let credentials = Credentials::new("token", "token-secret", "key", "secret");
///
/// // Defaults to v1.1
/// let poster = TweetPoster::new(credentials.clone())?;
/// assert_eq!(poster.version(), ApiVersion::V1);
///
/// // Validated from user input
/// let poster = TweetPoster::from_version_str(credentials, "2")?;
/// assert_eq!(poster.version(), ApiVersion::V2);
/// # Ok::<(), tweet_poster::api::PosterError>(())
/// ```
#[derive(Debug)]
pub struct TweetPoster {
    /// v1.1 client, always built
    legacy: LegacyClient,
    /// v2 client, always built
    tweets: TweetsClient,
    /// The active selector
    version: ApiVersion,
}

impl TweetPoster {
    /// Creates a poster against the public endpoints, selecting v1.1.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Transport`] if an HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> PosterResult<Self> {
        Self::with_version(credentials, ApiVersion::default())
    }

    /// Creates a poster against the public endpoints with an explicit
    /// initial version.
    pub fn with_version(credentials: Credentials, version: ApiVersion) -> PosterResult<Self> {
        Self::build(credentials, &ApiConfig::default(), version)
    }

    /// Creates a poster from a textual version.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::InvalidVersion`] if `raw` is not a known version.
    pub fn from_version_str(credentials: Credentials, raw: &str) -> PosterResult<Self> {
        let version = raw.parse()?;
        Self::with_version(credentials, version)
    }

    /// Creates a poster whose endpoints, timeout and initial version come
    /// from configuration.
    ///
    /// # Errors
    ///
    /// - [`PosterError::InvalidVersion`] for a bad `version`
    /// - [`PosterError::InvalidEndpoint`] for a bad base URL
    /// - [`PosterError::Transport`] if an HTTP client cannot be built
    pub fn from_config(credentials: Credentials, config: &ApiConfig) -> PosterResult<Self> {
        let version = config.version.parse()?;
        Self::build(credentials, config, version)
    }

    fn build(credentials: Credentials, config: &ApiConfig, version: ApiVersion) -> PosterResult<Self> {
        let timeout = config.timeout();
        let legacy_base = normalize_base_url(&config.legacy_base_url)?;
        let tweets_base = normalize_base_url(&config.tweets_base_url)?;

        Ok(Self {
            legacy: LegacyClient::new(&credentials, &legacy_base, timeout)?,
            tweets: TweetsClient::new(&credentials, &tweets_base, timeout)?,
            version,
        })
    }

    /// Returns the active version.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Replaces the active version.
    pub fn set_version(&mut self, version: ApiVersion) {
        self.version = version;
    }

    /// Parses and replaces the active version.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::InvalidVersion`] and leaves the active version
    /// untouched if `raw` is not a known version.
    pub fn set_version_str(&mut self, raw: &str) -> PosterResult<ApiVersion> {
        let version = raw.parse()?;
        self.version = version;
        Ok(version)
    }

    /// Posts `status` with the active version.
    ///
    /// # Returns
    ///
    /// - v1.1: the raw response body, unmodified
    /// - v2: the serialized `data` member of the response
    pub async fn post(&self, status: &str) -> PosterResult<String> {
        self.post_as(self.version, status).await
    }

    /// Posts `status` with an explicit version, ignoring the selector.
    pub async fn post_as(&self, version: ApiVersion, status: &str) -> PosterResult<String> {
        debug!(%version, "Dispatching status update");

        match version {
            ApiVersion::V1 => self.legacy.update_status(status).await,
            ApiVersion::V2 => self.tweets.create_tweet(status).await,
        }
    }

    /// The v1.1 client.
    pub fn legacy(&self) -> &LegacyClient {
        &self.legacy
    }

    /// The v2 client.
    pub fn tweets(&self) -> &TweetsClient {
        &self.tweets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::{json, Value};
    use tokio_test::{assert_err, assert_ok};

    fn credentials() -> Credentials {
        Credentials::new("access-token", "access-secret", "consumer-key", "consumer-secret")
    }

    fn poster_for(server: &ServerGuard, version: ApiVersion) -> TweetPoster {
        let config = ApiConfig {
            version: version.to_string(),
            legacy_base_url: format!("{}/1.1", server.url()),
            tweets_base_url: format!("{}/2", server.url()),
            timeout_secs: 5,
        };
        TweetPoster::from_config(credentials(), &config).unwrap()
    }

    #[test]
    fn test_parse_versions() {
        for raw in ["1", "v1", "V1", " 1.1 ", "v1.1"] {
            assert_eq!(raw.parse::<ApiVersion>().unwrap(), ApiVersion::V1, "{raw}");
        }
        for raw in ["2", "v2", "V2", "2 "] {
            assert_eq!(raw.parse::<ApiVersion>().unwrap(), ApiVersion::V2, "{raw}");
        }
        for raw in ["", "0", "3", "v3", "2.0", "one"] {
            assert!(matches!(
                raw.parse::<ApiVersion>(),
                Err(PosterError::InvalidVersion(_))
            ));
        }
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(ApiVersion::try_from(1).unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::try_from(2).unwrap(), ApiVersion::V2);
        assert!(ApiVersion::try_from(0).is_err());
    }

    #[test]
    fn test_construct_defaults_to_v1() {
        let poster = TweetPoster::new(credentials()).unwrap();
        assert_eq!(poster.version(), ApiVersion::V1);
        assert_eq!(
            poster.legacy().url(),
            "https://api.twitter.com/1.1/statuses/update.json"
        );
        assert_eq!(poster.tweets().url(), "https://api.twitter.com/2/tweets");
    }

    #[test]
    fn test_construct_from_version_str() {
        let poster = TweetPoster::from_version_str(credentials(), "2").unwrap();
        assert_eq!(poster.version(), ApiVersion::V2);

        let poster = TweetPoster::from_version_str(credentials(), "1").unwrap();
        assert_eq!(poster.version(), ApiVersion::V1);

        let err = assert_err!(TweetPoster::from_version_str(credentials(), "3"));
        assert!(matches!(err, PosterError::InvalidVersion(raw) if raw == "3"));
    }

    #[test]
    fn test_construct_from_config_rejects_bad_values() {
        let config = ApiConfig {
            version: "9".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TweetPoster::from_config(credentials(), &config),
            Err(PosterError::InvalidVersion(_))
        ));

        let config = ApiConfig {
            tweets_base_url: "::nope::".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TweetPoster::from_config(credentials(), &config),
            Err(PosterError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_set_version_last_write_wins() {
        let mut poster = TweetPoster::new(credentials()).unwrap();
        poster.set_version(ApiVersion::V1);
        poster.set_version(ApiVersion::V2);
        assert_eq!(poster.version(), ApiVersion::V2);
    }

    #[test]
    fn test_set_version_str_rejection_keeps_previous() {
        let mut poster = TweetPoster::with_version(credentials(), ApiVersion::V2).unwrap();

        let err = poster.set_version_str("7").unwrap_err();
        assert!(matches!(err, PosterError::InvalidVersion(_)));
        assert_eq!(poster.version(), ApiVersion::V2);

        assert_eq!(assert_ok!(poster.set_version_str("v1")), ApiVersion::V1);
        assert_eq!(poster.version(), ApiVersion::V1);
    }

    #[tokio::test]
    async fn test_v1_posts_form_and_returns_body_verbatim() {
        let mut server = Server::new_async().await;
        let body = r#"{"id_str":"42","text":"hello","user":{"screen_name":"someone"}}"#;
        let mock = server
            .mock("POST", "/1.1/statuses/update.json")
            .match_header("authorization", Matcher::Regex("^OAuth .*oauth_signature=".to_string()))
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::Exact("status=hello".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V1);
        let result = poster.post("hello").await.unwrap();

        assert_eq!(result, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_v1_error_bodies_are_not_normalized() {
        let mut server = Server::new_async().await;
        let body = r#"{"errors":[{"code":187,"message":"Status is a duplicate."}]}"#;
        let mock = server
            .mock("POST", "/1.1/statuses/update.json")
            .with_status(403)
            .with_body(body)
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V1);
        assert_eq!(poster.post("again").await.unwrap(), body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_v2_posts_json_and_unwraps_data() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/2/tweets")
            .match_header("authorization", Matcher::Regex("^OAuth ".to_string()))
            .match_body(Matcher::Json(json!({"text": "hello"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"id":"123","text":"hello"}}"#)
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V2);
        let result = poster.post("hello").await.unwrap();

        let parsed: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, json!({"id": "123", "text": "hello"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_v2_rate_limit_envelope() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/2/tweets")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":429,"title":"Too Many Requests","detail":"rate limited"}"#)
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V2);
        let err = poster.post("hello").await.unwrap_err();

        assert!(err.is_rate_limited());
        assert_eq!(err.to_string(), "API Too Many Requests error 429 : rate limited");
    }

    #[tokio::test]
    async fn test_v2_envelope_without_title() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/2/tweets")
            .with_status(403)
            .with_body(r#"{"status":403,"detail":"forbidden"}"#)
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V2);
        let err = poster.post("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "API error 403 : forbidden");
    }

    #[tokio::test]
    async fn test_v2_empty_envelope_is_missing_data() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/2/tweets")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V2);
        let err = poster.post("hello").await.unwrap_err();

        assert!(matches!(&err, PosterError::MissingData(body) if body == "{}"));
        assert!(err.to_string().contains("Response: {}"));
    }

    #[tokio::test]
    async fn test_v2_non_json_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/2/tweets")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let poster = poster_for(&server, ApiVersion::V2);
        let err = poster.post("hello").await.unwrap_err();
        assert!(matches!(err, PosterError::Decode { body, .. } if body.contains("Bad Gateway")));
    }

    #[tokio::test]
    async fn test_dispatch_follows_selector_at_call_time() {
        let mut server = Server::new_async().await;
        let v1 = server
            .mock("POST", "/1.1/statuses/update.json")
            .with_body("v1-body")
            .expect(1)
            .create_async()
            .await;
        let v2 = server
            .mock("POST", "/2/tweets")
            .with_body(r#"{"data":{"id":"7"}}"#)
            .expect(2)
            .create_async()
            .await;

        let mut poster = poster_for(&server, ApiVersion::V1);
        assert_eq!(poster.post("a").await.unwrap(), "v1-body");

        poster.set_version(ApiVersion::V2);
        assert_eq!(poster.post("b").await.unwrap(), r#"{"id":"7"}"#);

        // Explicit per-call version leaves the selector alone
        poster.set_version(ApiVersion::V1);
        assert_eq!(poster.post_as(ApiVersion::V2, "c").await.unwrap(), r#"{"id":"7"}"#);
        assert_eq!(poster.version(), ApiVersion::V1);

        v1.assert_async().await;
        v2.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let config = ApiConfig {
            legacy_base_url: "http://127.0.0.1:1/1.1".to_string(),
            timeout_secs: 2,
            ..Default::default()
        };
        let poster = assert_ok!(TweetPoster::from_config(credentials(), &config));

        let err = assert_err!(poster.post("hello").await);
        assert!(matches!(err, PosterError::Transport(_)));
    }
}
