use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use bili_catalog::config::FetchConfig;
use bili_catalog::error::Error;
use bili_catalog::error::Result;

////////////////////////////////////////////////////////////
// Yaml config
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cfg {
    #[serde(default)]
    pub uid: Option<u64>,

    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub delay: Option<f64>,

    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<f64>,
}

impl Cfg {
    /// Values set in `over` win over the ones read from the file.
    pub fn merge(self, over: Cfg) -> Cfg {
        Cfg {
            uid: over.uid.or(self.uid),
            page_size: over.page_size.or(self.page_size),
            delay: over.delay.or(self.delay),
            endpoint: over.endpoint.or(self.endpoint),
            timeout: over.timeout.or(self.timeout),
        }
    }

    pub fn into_fetch_config(self) -> Result<FetchConfig> {
        let uid = self
            .uid
            .ok_or_else(|| Error::Config("uid is required".into()))?;

        let mut cfg = FetchConfig::new(uid);
        if let Some(page_size) = self.page_size {
            cfg = cfg.with_page_size(page_size);
        }
        if let Some(delay) = self.delay {
            cfg = cfg.with_delay_secs(delay);
        }
        if let Some(endpoint) = self.endpoint {
            cfg = cfg.with_endpoint(endpoint);
        }
        if let Some(timeout) = self.timeout {
            let timeout = Duration::try_from_secs_f64(timeout)
                .map_err(|e| Error::Config(format!("invalid timeout {}: {}", timeout, e)))?;
            cfg = cfg.with_timeout(timeout);
        }

        Ok(cfg)
    }
}

pub struct Parser;

impl Parser {
    pub fn parse_yaml<P: AsRef<Path>>(path: P) -> Result<Cfg> {
        let reader = Self::file_reader(path)?;
        let config: Cfg = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
        let f = std::fs::File::open(path)?;
        Ok(BufReader::new(f))
    }
}

////////////////////////////////////////////////////////////
// Unit test
////////////////////////////////////////////////////////////
#[cfg(test)]
#[path = "config_test.rs"]
mod test;
