use crate::config::ClientCredentials;
use crate::error::{ManagementError, ManagementResult};
use chrono::{DateTime, Utc};
use metrics::counter;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Tokens are refreshed this long before Auth0 says they expire.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Client-credentials token source for the Management API.
///
/// Nothing is fetched until the first call to [`TokenSource::token`]; the
/// token is then cached until shortly before it expires.
pub(crate) struct TokenSource {
    token_url: Url,
    audience: String,
    credentials: ClientCredentials,
    cached: RwLock<Option<CachedToken>>
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>
}

#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
    expires_in: u64
}

impl TokenSource {
    pub(crate) fn new(base_url: &Url, api_url: &Url, credentials: ClientCredentials) -> ManagementResult<Self> {
        let token_url = base_url
            .join("oauth/token")
            .map_err(|e| ManagementError::InvalidDomain {
                domain: base_url.to_string(),
                reason: e.to_string()
            })?;

        Ok(Self {
            token_url,
            audience: api_url.to_string(),
            credentials,
            cached: RwLock::new(None)
        })
    }

    pub(crate) fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub(crate) async fn token(&self, http: &Client) -> ManagementResult<String> {
        {
            let cached = self.cached.read().await;
            if let Some(ref token) = *cached {
                if token.expires_at > Utc::now() + chrono::Duration::seconds(EXPIRY_MARGIN_SECONDS) {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;
        // another caller may have refreshed while we waited for the lock
        if let Some(ref token) = *cached {
            if token.expires_at > Utc::now() + chrono::Duration::seconds(EXPIRY_MARGIN_SECONDS) {
                return Ok(token.token.clone());
            }
        }

        debug!(url = %self.token_url, client_id = %self.credentials.client_id, "Requesting Auth0 management token");

        let body = format!(
            "grant_type=client_credentials&client_id={}&client_secret={}&audience={}",
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(self.credentials.client_secret()),
            urlencoding::encode(&self.audience)
        );

        let response = http
            .post(self.token_url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(ManagementError::HttpError)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body = response.text().await.unwrap_or_default();
            return Err(ManagementError::OAuthError(format!(
                "Token request failed: {} - {}",
                status, error_body
            )));
        }

        let token_response: OAuthTokenResponse = response.json().await.map_err(|e| {
            ManagementError::OAuthError(format!("Failed to parse token response: {}", e))
        })?;

        let expires_at = expiry_after(Utc::now(), token_response.expires_in)?;
        counter!("auth0_management_token_refresh_total").increment(1);

        *cached = Some(CachedToken {
            token: token_response.access_token.clone(),
            expires_at
        });

        Ok(token_response.access_token)
    }

    pub(crate) async fn invalidate(&self) {
        let mut cached = self.cached.write().await;
        *cached = None;
    }

    pub(crate) async fn is_cached(&self) -> bool {
        self.cached.read().await.is_some()
    }
}

/// Absolute expiry for a token issued at `now` with the given lifetime.
///
/// Lifetimes that do not fit a timestamp are rejected rather than wrapped.
fn expiry_after(now: DateTime<Utc>, expires_in: u64) -> ManagementResult<DateTime<Utc>> {
    i64::try_from(expires_in)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| ManagementError::OAuthError(format!("invalid expires_in: {expires_in}")))
}
