//
//  tweet-poster
//  api/v1.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy v1.1 status update client.
//!
//! The v1.1 endpoint takes a single form-encoded `status` field. The response
//! body is handed back exactly as the server sent it, whatever the HTTP
//! status, so callers see the platform's own error payloads untouched.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::debug;

use super::common::PosterResult;
use crate::auth::{Credentials, OAuthSigner};
use crate::config::{endpoint_url, STATUS_UPDATE_PATH};

/// Client for `POST statuses/update.json`.
#[derive(Debug)]
pub struct LegacyClient {
    http: Client,
    url: String,
    signer: OAuthSigner,
}

impl LegacyClient {
    /// Creates a client for the v1.1 API rooted at `base_url`.
    ///
    /// # Parameters
    ///
    /// * `credentials` - OAuth 1.0a credentials used to sign every request
    /// * `base_url` - Normalized base URL, e.g. `https://api.twitter.com/1.1`
    /// * `timeout` - Whole-request timeout
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Transport`](super::PosterError::Transport) if the
    /// HTTP client cannot be built.
    pub fn new(credentials: &Credentials, base_url: &str, timeout: Duration) -> PosterResult<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .timeout(timeout)
                .build()?,
            url: endpoint_url(base_url, STATUS_UPDATE_PATH),
            signer: OAuthSigner::new(credentials),
        })
    }

    /// The full endpoint URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `status` and returns the raw response body.
    ///
    /// The form field is part of the OAuth signature, as the v1.1 API
    /// requires for form-encoded bodies.
    pub async fn update_status(&self, status: &str) -> PosterResult<String> {
        let params = vec![("status".to_string(), status.to_string())];
        let authorization = self.signer.sign("POST", &self.url, &params)?;

        debug!(url = %self.url, chars = status.chars().count(), "Posting v1.1 status update");

        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, authorization)
            .form(&params)
            .send()
            .await?;

        debug!(status = %response.status(), "v1.1 status update answered");

        Ok(response.text().await?)
    }
}
