//
//  tweet-poster
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth 1.0a Request Signing
//!
//! Both API versions authenticate user-context writes with an OAuth 1.0a
//! `Authorization` header signed with HMAC-SHA1.
//!
//! ## Signature Steps
//!
//! 1. Collect the six `oauth_*` protocol parameters plus any form-encoded body
//!    fields (JSON bodies are never signed)
//! 2. Percent-encode every key and value (RFC 3986), sort, and join as
//!    `k=v&k=v`
//! 3. Build the base string `METHOD&enc(url)&enc(params)`
//! 4. Sign it with the key `enc(consumer_secret)&enc(access_token_secret)`
//! 5. Emit `OAuth k="v", ...` including `oauth_signature`
//!
//! ## Example
//!
//! ```rust
//! use tweet_poster::auth::{Credentials, OAuthSigner};
//!
//! let signer = OAuthSigner::new(&Credentials::new("t", "ts", "ck", "cs"));
//! let params = vec![("status".to_string(), "hello".to_string())];
//! let header = signer
//!     .sign("POST", "https://api.twitter.com/1.1/statuses/update.json", &params)
//!     .unwrap();
//! assert!(header.contains("oauth_signature="));
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rand::RngCore;
use sha1::Sha1;
use url::Url;

use super::Credentials;
use crate::api::common::{PosterError, PosterResult};

/// Everything except the RFC 3986 unreserved set (`ALPHA DIGIT - . _ ~`).
const OAUTH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// OAuth 1.0a signer holding a copy of the user credentials.
///
/// Each API client owns one signer; the signer never outlives the client and
/// is never rebuilt.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: Credentials,
}

impl OAuthSigner {
    /// Creates a signer for the given credentials.
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            credentials: credentials.clone(),
        }
    }

    /// Generates the `Authorization` header value for a request.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP method, e.g. `POST`
    /// * `url` - The request URL without query string
    /// * `params` - Query and form-encoded body parameters to sign
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::OAuth`] if the URL does not parse or the HMAC
    /// key cannot be built.
    pub fn sign(&self, method: &str, url: &str, params: &[(String, String)]) -> PosterResult<String> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.sign_with(method, url, params, &generate_nonce(), &timestamp)
    }

    /// Deterministic core of [`OAuthSigner::sign`] with caller-supplied nonce
    /// and timestamp.
    pub fn sign_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> PosterResult<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];

        let signature = self.signature(method, url, &oauth_params, params)?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", header))
    }

    fn signature(
        &self,
        method: &str,
        url: &str,
        oauth_params: &[(String, String)],
        params: &[(String, String)],
    ) -> PosterResult<String> {
        // Sorting happens on the encoded pairs
        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(&base_string_uri(url)?),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_token_secret)
        );

        hmac_sha1(&signing_key, &base_string)
    }
}

/// Reduces a request URL to the form the signature base string uses:
/// lowercase scheme and host, no default port, no query or fragment.
///
/// ```rust
/// use tweet_poster::auth::base_string_uri;
///
/// assert_eq!(
///     base_string_uri("HTTPS://API.Twitter.com:443/1.1/statuses/update.json").unwrap(),
///     "https://api.twitter.com/1.1/statuses/update.json"
/// );
/// ```
pub fn base_string_uri(raw: &str) -> PosterResult<String> {
    let url = Url::parse(raw).map_err(|e| PosterError::OAuth(format!("'{}': {}", raw, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| PosterError::OAuth(format!("'{}': URL has no host", raw)))?;

    // Url drops the port when it is the scheme's default
    let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();
    Ok(format!("{}://{}{}{}", url.scheme(), host, port, url.path()))
}

/// Percent-encodes a string according to RFC 3986.
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Generates a 32 character hex nonce.
fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hmac_sha1(key: &str, data: &str) -> PosterResult<String> {
    type HmacSha1 = Hmac<Sha1>;

    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| PosterError::OAuth(e.to_string()))?;
    mac.update(data.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
