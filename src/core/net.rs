// src/core/net.rs

// Blocking HTTP GET. One request at a time; no retry, no custom timeout.

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::FetchError;

/// Anything that can turn a page URL into an HTML body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain functions and closures fetch too (fixtures, tests).
impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let http = |source| FetchError::Http { url: url.to_string(), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        debug!(%url, %status, "response");
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(http)
    }
}
