use crate::error::Result;
use crate::record::{AggregateResult, PageResult};

use async_trait::async_trait;

#[async_trait]
pub trait Fetcher {
    /// Fetches one page, numbered from 1.
    async fn fetch_page(&self, page: u32) -> Result<PageResult>;

    /// Fetches every page until the first empty one. Either the whole catalog
    /// or the first error is returned, never a partial list.
    async fn fetch_all(&self) -> Result<AggregateResult>;
}
