use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_cookie_store::CookieStoreMutex;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use crate::config::{self, RecorderConfig};

pub struct HttpClient {
    pub client: ClientWithMiddleware,
    pub cookies: Arc<CookieStoreMutex>,
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("reqwest middleware error: {0}")]
    ReqwestMiddlewareError(#[from] reqwest_middleware::Error),
}

impl HttpClient {
    /// Wraps a `reqwest::Client` with a retry middleware for transient
    /// errors. All requests go through the configured proxy, carry the
    /// browser User-Agent and time out after `cfg.probe_timeout`.
    pub fn new(cfg: &RecorderConfig) -> reqwest::Result<HttpClient> {
        let cookies = Arc::new(CookieStoreMutex::default());
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));

        let client = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .default_headers(headers)
            .timeout(cfg.probe_timeout)
            .proxy(reqwest::Proxy::all(&cfg.proxy)?)
            .build()?;

        let client = reqwest_middleware::ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(HttpClient { client, cookies })
    }

    /// Fetch `url` and return the response body, treating a non-2xx status
    /// as an error.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().await?;
        let resp = resp.error_for_status()?;
        resp.text().await.map_err(|e| e.into())
    }
}
