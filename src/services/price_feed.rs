// src/services/price_feed.rs
// DOCUMENTATION: Polling client for the public price listing
// PURPOSE: Keep a live copy of /api/prices with de-duplication and timeouts

use crate::models::{Price, PriceListResponse};
use anyhow::{bail, Context};
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Timing knobs for the feed
#[derive(Debug, Clone, Copy)]
pub struct PriceFeedOptions {
    /// Time between background refreshes
    pub refresh_interval: Duration,
    /// Abort a fetch after this long
    pub request_timeout: Duration,
    /// Refreshes started within this window of the last one are dropped
    pub dedupe_window: Duration,
    /// Extra attempts after a failed background refresh
    pub error_retry_count: u32,
    pub error_retry_interval: Duration,
}

impl Default for PriceFeedOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(60),
            request_timeout: Duration::from_secs(10),
            dedupe_window: Duration::from_secs(2),
            error_retry_count: 3,
            error_retry_interval: Duration::from_secs(5),
        }
    }
}

/// What the price table should show
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Error(String),
    Empty,
    Ready(Vec<Price>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Fetched,
    Failed,
    /// Another request was in flight or finished too recently
    Deduplicated,
}

/// Where prices come from
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<Price>>;
}

/// Fetches prices from a running server
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    /// `base_url` is the site root, e.g. http://127.0.0.1:3000
    pub fn new(base_url: &str, category_id: Option<i32>) -> Self {
        let mut url = format!("{}/api/prices", base_url.trim_end_matches('/'));
        if let Some(id) = category_id {
            url.push_str(&format!("?categoryId={}", id));
        }

        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self) -> anyhow::Result<Vec<Price>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.url))?;

        if !response.status().is_success() {
            bail!("Price API returned {}", response.status());
        }

        let body: PriceListResponse = response
            .json()
            .await
            .context("Failed to parse price listing")?;

        Ok(body.data)
    }
}

#[derive(Debug, Default)]
struct RequestGate {
    in_flight: bool,
    last_started: Option<Instant>,
}

/// Shared, self-refreshing price state
pub struct PriceFeed {
    source: Arc<dyn PriceSource>,
    options: PriceFeedOptions,
    state: RwLock<FeedState>,
    gate: Mutex<RequestGate>,
}

impl PriceFeed {
    pub fn new(source: Arc<dyn PriceSource>, options: PriceFeedOptions) -> Self {
        Self {
            source,
            options,
            state: RwLock::new(FeedState::Loading),
            gate: Mutex::new(RequestGate::default()),
        }
    }

    pub fn options(&self) -> PriceFeedOptions {
        self.options
    }

    pub async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Claim the right to fetch; false when de-duplicated
    fn try_start(&self) -> bool {
        let mut gate = match self.gate.lock() {
            Ok(gate) => gate,
            Err(poisoned) => poisoned.into_inner(),
        };

        let recent = gate
            .last_started
            .map(|started| started.elapsed() < self.options.dedupe_window)
            .unwrap_or(false);

        if gate.in_flight || recent {
            return false;
        }

        gate.in_flight = true;
        gate.last_started = Some(Instant::now());
        true
    }

    fn finish(&self) {
        match self.gate.lock() {
            Ok(mut gate) => gate.in_flight = false,
            Err(poisoned) => poisoned.into_inner().in_flight = false,
        }
    }

    /// Fetch once, also used for the user-triggered "retry"
    pub async fn refresh(&self) -> RefreshOutcome {
        if !self.try_start() {
            log::debug!("Price refresh deduplicated");
            return RefreshOutcome::Deduplicated;
        }

        let result =
            tokio::time::timeout(self.options.request_timeout, self.source.fetch()).await;
        self.finish();

        let (next, outcome) = match result {
            Ok(Ok(prices)) if prices.is_empty() => (FeedState::Empty, RefreshOutcome::Fetched),
            Ok(Ok(prices)) => {
                log::debug!("Price feed refreshed: {} tiers", prices.len());
                (FeedState::Ready(prices), RefreshOutcome::Fetched)
            }
            Ok(Err(e)) => {
                log::warn!("Price refresh failed: {:#}", e);
                (FeedState::Error(format!("{:#}", e)), RefreshOutcome::Failed)
            }
            Err(_) => {
                log::warn!(
                    "Price refresh timed out after {}s",
                    self.options.request_timeout.as_secs()
                );
                (
                    FeedState::Error("Request timed out".to_string()),
                    RefreshOutcome::Failed,
                )
            }
        };

        *self.state.write().await = next;
        outcome
    }

    /// Refresh, retrying failures a bounded number of times
    pub async fn refresh_with_retry(&self) -> RefreshOutcome {
        let mut outcome = self.refresh().await;
        let mut attempts = 0;

        while outcome == RefreshOutcome::Failed && attempts < self.options.error_retry_count {
            attempts += 1;
            tokio::time::sleep(self.options.error_retry_interval).await;
            log::info!("Retrying price refresh ({}/{})", attempts, self.options.error_retry_count);
            outcome = self.refresh().await;
        }

        outcome
    }
}

/// Start background polling
/// DOCUMENTATION: First tick fires immediately; runs until the handle is aborted
pub fn start_polling(feed: Arc<PriceFeed>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(feed.options().refresh_interval);

        loop {
            interval.tick().await;
            feed.refresh_with_retry().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceCategory;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Prices(Vec<Price>),
        Fail,
        Hang,
    }

    struct ScriptedSource {
        replies: Mutex<VecDeque<Reply>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(replies: Vec<Reply>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl PriceSource for ScriptedSource {
        async fn fetch(&self) -> anyhow::Result<Vec<Price>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Prices(prices)) => Ok(prices),
                Some(Reply::Fail) | None => bail!("boom"),
                Some(Reply::Hang) => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(Vec::new())
                }
            }
        }
    }

    fn tier() -> Price {
        Price {
            id: 1,
            label: None,
            hourly_hours: 3,
            rate_cents: 90000,
            category: PriceCategory {
                id: 1,
                title: "Deluxe".into(),
                specs: None,
            },
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_is_deduplicated_inside_window() {
        let source = ScriptedSource::new(vec![
            Reply::Prices(vec![tier()]),
            Reply::Prices(vec![]),
        ]);
        let feed = PriceFeed::new(source.clone(), PriceFeedOptions::default());
        assert_eq!(feed.state().await, FeedState::Loading);

        assert_eq!(feed.refresh().await, RefreshOutcome::Fetched);
        assert_eq!(feed.refresh().await, RefreshOutcome::Deduplicated);
        assert_eq!(source.calls(), 1);
        assert_eq!(feed.state().await, FeedState::Ready(vec![tier()]));

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(feed.refresh().await, RefreshOutcome::Fetched);
        assert_eq!(source.calls(), 2);
        assert_eq!(feed.state().await, FeedState::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_error_state() {
        let source = ScriptedSource::new(vec![Reply::Hang]);
        let feed = PriceFeed::new(source, PriceFeedOptions::default());

        assert_eq!(feed.refresh().await, RefreshOutcome::Failed);
        assert_eq!(
            feed.state().await,
            FeedState::Error("Request timed out".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_recovers_after_failures() {
        let source = ScriptedSource::new(vec![
            Reply::Fail,
            Reply::Fail,
            Reply::Prices(vec![tier()]),
        ]);
        let feed = PriceFeed::new(source.clone(), PriceFeedOptions::default());

        assert_eq!(feed.refresh_with_retry().await, RefreshOutcome::Fetched);
        assert_eq!(source.calls(), 3);
        assert_eq!(feed.state().await, FeedState::Ready(vec![tier()]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up() {
        let source = ScriptedSource::new(vec![]);
        let feed = PriceFeed::new(source.clone(), PriceFeedOptions::default());

        assert_eq!(feed.refresh_with_retry().await, RefreshOutcome::Failed);
        assert_eq!(source.calls(), 4);
        assert!(matches!(feed.state().await, FeedState::Error(_)));
    }

    #[test]
    fn test_http_source_url() {
        assert_eq!(
            HttpPriceSource::new("http://localhost:3000/", Some(4)).url(),
            "http://localhost:3000/api/prices?categoryId=4"
        );
        assert_eq!(
            HttpPriceSource::new("http://localhost:3000", None).url(),
            "http://localhost:3000/api/prices"
        );
    }
}
