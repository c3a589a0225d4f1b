use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::record::{AggregateResult, PageResult, Record};
use crate::wrapper::http::{Client, Header, HeaderKey, Response};

use super::Fetcher;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const SPACE_URL_BASE: &str = "https://space.bilibili.com/";

// Publish-date order keeps page boundaries stable across requests.
const ORDER_PUBDATE: &str = "pubdate";

#[derive(Debug)]
pub struct PaginatedFetcher {
    cfg: FetchConfig,
    cli: Client,
}

impl PaginatedFetcher {
    pub fn new(cfg: FetchConfig) -> Result<Self> {
        cfg.validate()?;
        let mut cli = Client::with_timeout(cfg.timeout)?;
        cli.set_default_headers(vec![Header::new(
            HeaderKey::UserAgent,
            USER_AGENT.to_string(),
        )]);

        Ok(Self { cfg, cli })
    }

    /// Uses `cli` as the session instead of building one.
    pub fn with_client(cfg: FetchConfig, cli: Client) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg, cli })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.cfg
    }

    fn query(&self, page: u32) -> [(&'static str, String); 4] {
        [
            ("mid", self.cfg.owner_id.to_string()),
            ("ps", self.cfg.page_size.to_string()),
            ("pn", page.to_string()),
            ("order", ORDER_PUBDATE.to_string()),
        ]
    }

    pub async fn fetch_page(&self, page: u32) -> Result<PageResult> {
        if page == 0 {
            return Err(Error::Config("page numbers start at 1".into()));
        }

        debug!(
            "fetching page {} of owner {} (page size {})",
            page, self.cfg.owner_id, self.cfg.page_size
        );

        let referer = Header::new(
            HeaderKey::Referer,
            format!("{}{}", SPACE_URL_BASE, self.cfg.owner_id),
        );
        let resp = self
            .cli
            .get(&self.cfg.endpoint, &self.query(page), Some(vec![referer]))
            .await?;

        let records = if resp.is_success() {
            parse_page(&resp.body)
        } else {
            Err(status_error(resp))
        }
        .inspect_err(|e| {
            warn!("page {} of owner {} rejected: {}", page, self.cfg.owner_id, e);
        })?;

        debug!("page {} returned {} records", page, records.len());
        Ok(records)
    }

    pub async fn fetch_all(&self) -> Result<AggregateResult> {
        let mut records = AggregateResult::new();
        let mut page = 1;

        loop {
            let vlist = self.fetch_page(page).await?;
            if vlist.is_empty() {
                break;
            }

            records.extend(vlist);
            page += 1;
            tokio::time::sleep(self.cfg.delay()).await;
        }

        info!(
            "owner {}: {} records over {} pages",
            self.cfg.owner_id,
            records.len(),
            page - 1
        );
        Ok(records)
    }
}

#[async_trait]
impl Fetcher for PaginatedFetcher {
    async fn fetch_page(&self, page: u32) -> Result<PageResult> {
        self.fetch_page(page).await
    }

    async fn fetch_all(&self) -> Result<AggregateResult> {
        self.fetch_all().await
    }
}

////////////////////////////////////////////////////////////
// Response envelope
////////////////////////////////////////////////////////////
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    list: Option<EnvelopeList>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeList {
    vlist: Option<Vec<Record>>,
}

/// Decodes one listing response body.
///
/// A non-zero `code` is an `Error::Api` carrying the whole decoded body, even
/// when the rest of the document looks usable. With `code == 0` every level
/// of `data.list.vlist` has to be present; a missing level is
/// `Error::MalformedResponse`, never an empty page.
pub fn parse_page(body: &str) -> Result<PageResult> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    let code = json
        .get("code")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| Error::MalformedResponse("missing integer field `code`".into()))?;
    if code != 0 {
        return Err(Error::Api { code, body: json });
    }

    let envelope: Envelope = serde_json::from_value(json)?;
    envelope
        .data
        .ok_or_else(|| Error::MalformedResponse("missing field `data`".into()))?
        .list
        .ok_or_else(|| Error::MalformedResponse("missing field `data.list`".into()))?
        .vlist
        .ok_or_else(|| Error::MalformedResponse("missing field `data.list.vlist`".into()))
}

/// Error for a non-2xx response. The endpoint reports rejections such as
/// risk control (HTTP 412) with a JSON envelope; when the body carries a
/// non-zero `code` that envelope is kept as `Error::Api`.
fn status_error(resp: Response) -> Error {
    match parse_page(&resp.body) {
        Err(e @ Error::Api { .. }) => e,
        _ => Error::HttpStatus(resp.status),
    }
}
