use crate::config::{ClientCredentials, RetryConfig};
use crate::error::{ManagementError, ManagementResult};
use crate::token::TokenSource;
use backoff::ExponentialBackoffBuilder;
use backoff::backoff::Backoff;
use chrono::Utc;
use metrics::counter;
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const API_BASE_PATH: &str = "api/v2/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Builder for [`ManagementClient`].
///
/// `build` only assembles the transport; no request is made until the
/// first API call.
#[derive(Debug, Clone)]
pub struct ManagementClientBuilder {
    domain: String,
    credentials: Option<ClientCredentials>,
    debug: bool,
    user_agent: Option<String>,
    timeout: Duration,
    retry: RetryConfig
}

impl ManagementClientBuilder {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            credentials: None,
            debug: false,
            user_agent: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            retry: RetryConfig::default()
        }
    }

    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>
    ) -> Self {
        self.credentials = Some(ClientCredentials::new(client_id, client_secret));
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> ManagementResult<ManagementClient> {
        let base_url = parse_base_url(&self.domain)?;
        let api_url = base_url
            .join(API_BASE_PATH)
            .map_err(|e| ManagementError::InvalidDomain {
                domain: self.domain.clone(),
                reason: e.to_string()
            })?;

        let credentials = self.credentials.ok_or_else(|| {
            ManagementError::MissingCredentials("client credentials were not provided".to_string())
        })?;
        if !credentials.is_complete() {
            return Err(ManagementError::MissingCredentials(
                "client_id and client_secret must both be non-empty".to_string()
            ));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("Rust-Auth0-Management/{}", crate::VERSION));

        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent.clone())
            .build()
            .map_err(ManagementError::TransportError)?;

        let tokens = TokenSource::new(&base_url, &api_url, credentials)?;

        debug!(
            base_url = %base_url,
            debug = self.debug,
            user_agent = %user_agent,
            "Built Auth0 management client"
        );

        Ok(ManagementClient {
            http,
            base_url,
            api_url,
            user_agent,
            debug: self.debug,
            retry: self.retry,
            tokens
        })
    }
}

/// Authenticated handle to one tenant's Management API.
///
/// Safe to share between tasks; the only interior state is the cached
/// access token.
pub struct ManagementClient {
    http: Client,
    base_url: Url,
    api_url: Url,
    user_agent: String,
    debug: bool,
    retry: RetryConfig,
    tokens: TokenSource
}

impl std::fmt::Debug for ManagementClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementClient")
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.tokens.client_id())
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ManagementClient {
    pub fn builder(domain: impl Into<String>) -> ManagementClientBuilder {
        ManagementClientBuilder::new(domain)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn client_id(&self) -> &str {
        self.tokens.client_id()
    }

    /// Returns a valid access token, exchanging the client credentials if
    /// none is cached.
    pub async fn access_token(&self) -> ManagementResult<String> {
        self.tokens.token(&self.http).await
    }

    pub async fn has_cached_token(&self) -> bool {
        self.tokens.is_cached().await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ManagementResult<T> {
        let response = self.send(Method::GET, path, None).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ManagementResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, Some(&body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ManagementResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PATCH, path, Some(&body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ManagementResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PUT, path, Some(&body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete(&self, path: &str) -> ManagementResult<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> ManagementResult<Url> {
        self.api_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ManagementError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string()
            })
    }

    fn backoff_policy(&self) -> backoff::ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(self.retry.initial_backoff())
            .with_max_interval(self.retry.max_backoff())
            .with_max_elapsed_time(None)
            .build()
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ManagementResult<Response> {
        let url = self.endpoint(path)?;
        let mut policy = self.backoff_policy();
        let mut attempt = 0u32;

        loop {
            let token = self.access_token().await?;
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .bearer_auth(&token)
                .header(ACCEPT, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }

            if self.debug {
                debug!(method = %method, url = %url, attempt, "Auth0 management request");
            }
            let started = Instant::now();
            let response = request.send().await?;
            let status = response.status();

            counter!(
                "auth0_management_requests_total",
                "method" => method.to_string(),
                "status" => status.as_u16().to_string()
            )
            .increment(1);

            if self.debug {
                debug!(
                    method = %method,
                    url = %url,
                    status = status.as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Auth0 management response"
                );
            }

            match status {
                s if s.is_success() => return Ok(response),
                StatusCode::TOO_MANY_REQUESTS => {
                    let hinted = rate_limit_wait(response.headers());
                    if attempt >= self.retry.max_retries {
                        return Err(ManagementError::RateLimited {
                            retry_after_seconds: hinted.map(|d| d.as_secs()).unwrap_or(60)
                        });
                    }
                    attempt += 1;

                    let wait = hinted
                        .or_else(|| policy.next_backoff())
                        .unwrap_or(self.retry.max_backoff())
                        .min(self.retry.max_backoff());
                    warn!(
                        url = %url,
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "Auth0 rate limit hit, retrying"
                    );
                    tokio::time::sleep(wait).await;
                }
                StatusCode::UNAUTHORIZED => {
                    self.tokens.invalidate().await;
                    return Err(ManagementError::AuthenticationError(
                        "Auth0 rejected the management token".to_string()
                    ));
                }
                StatusCode::NOT_FOUND => return Err(ManagementError::NotFound(path.to_string())),
                status => {
                    let body = response.text().await.unwrap_or_default();
                    return Err(ManagementError::ApiError {
                        status: status.as_u16(),
                        message: body
                    });
                }
            }
        }
    }
}

/// Accepts a bare host (`example.auth0.com`) or a URL with an http(s)
/// scheme; bare hosts default to https.
fn parse_base_url(domain: &str) -> ManagementResult<Url> {
    let invalid = |reason: String| ManagementError::InvalidDomain {
        domain: domain.to_string(),
        reason
    };

    let candidate = if domain.contains("://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };

    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Wait suggested by Auth0's `x-ratelimit-reset` header (epoch seconds).
fn rate_limit_wait(headers: &HeaderMap) -> Option<Duration> {
    let reset = headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())?;
    let seconds = (reset - Utc::now().timestamp()).max(0);
    Some(Duration::from_secs(seconds as u64))
}
