use crate::{config::RecorderConfig, util};

/// Marker Chzzk embeds in the page markup whenever a broadcast is running.
const LIVE_MARKER: &str = "live";

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("could not fetch live page: {0}")]
    FetchError(#[from] util::FetchError),
}

/// Checks the live page for a running broadcast.
pub struct Prober {
    http: util::HttpClient,
    live_url: String,
}

fn body_indicates_live(body: &str) -> bool {
    body.contains(LIVE_MARKER)
}

impl Prober {
    pub fn new(cfg: &RecorderConfig) -> reqwest::Result<Self> {
        Ok(Self {
            http: util::HttpClient::new(cfg)?,
            live_url: cfg.live_url.clone(),
        })
    }

    /// True iff the page fetch succeeds and the body contains the live
    /// marker. Any network or HTTP error is logged and counts as offline,
    /// so a flaky proxy never aborts the polling loop.
    pub async fn is_live(&self) -> bool {
        match self.fetch_live_page().await {
            Ok(body) => body_indicates_live(&body),
            Err(e) => {
                warn!("Live status check failed: {}", e);
                false
            }
        }
    }

    async fn fetch_live_page(&self) -> Result<String, ProbeError> {
        self.http
            .fetch_text(&self.live_url)
            .await
            .map_err(ProbeError::FetchError)
    }
}
