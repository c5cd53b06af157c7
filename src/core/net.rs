// src/core/net.rs
// Blocking HTTPS GET: one request, fixed headers, fixed timeout, no retry.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// Anything that can turn a URL into document text.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (k, v) in &cfg.headers {
            let name = HeaderName::from_bytes(k.as_bytes()).map_err(|_| Error::Header(k.clone()))?;
            let value = HeaderValue::from_str(v).map_err(|_| Error::Header(k.clone()))?;
            headers.insert(name, value);
        }
        let client = Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let http = |source| Error::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status });
        }
        resp.text().map_err(http)
    }
}
