use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.bilibili.com/x/space/arc/search";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_DELAY_SECS: f64 = 0.5;

/// Settings for one `PaginatedFetcher`. Not shared; the fetcher takes it by
/// value and never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub owner_id: u64,
    pub page_size: u32,
    pub inter_page_delay: f64,
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    pub fn new(owner_id: u64) -> Self {
        Self {
            owner_id,
            page_size: DEFAULT_PAGE_SIZE,
            inter_page_delay: DEFAULT_DELAY_SECS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_delay_secs(mut self, secs: f64) -> Self {
        self.inter_page_delay = secs;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page size must be greater than 0".into()));
        }

        if !self.inter_page_delay.is_finite() || self.inter_page_delay < 0.0 {
            return Err(Error::Config(format!(
                "inter-page delay must be a non-negative number of seconds, got {}",
                self.inter_page_delay
            )));
        }

        let url = url::Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::Config(format!(
                "{}: unsupported endpoint scheme",
                other
            ))),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.inter_page_delay)
    }
}
