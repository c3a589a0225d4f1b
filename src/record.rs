use serde::Deserialize;
use serde::Serialize;

pub const VIDEO_URL_BASE: &str = "https://www.bilibili.com/video/av";

////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////

/// One catalog item as returned by the listing endpoint.
///
/// Only `aid` and `title` are required. Everything else the endpoint sends,
/// explicit nulls included, is kept untouched in `extra` and written back out
/// on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub aid: u64,
    pub title: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Publish time, unix seconds.
    pub fn created(&self) -> Option<i64> {
        self.extra.get("created").and_then(serde_json::Value::as_i64)
    }

    pub fn bvid(&self) -> Option<&str> {
        self.extra.get("bvid").and_then(serde_json::Value::as_str)
    }

    pub fn video_url(&self) -> String {
        format!("{}{}", VIDEO_URL_BASE, self.aid)
    }
}

/// Records of one requested page, in the order the endpoint listed them.
pub type PageResult = Vec<Record>;

/// Pages 1..N-1 concatenated, N being the first empty page.
pub type AggregateResult = Vec<Record>;
