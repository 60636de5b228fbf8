use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::NewsError;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

/// Retrieves raw feed documents over HTTP with a bounded timeout.
#[derive(Clone)]
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(timeout: Duration) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// One GET; any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, NewsError> {
        debug!(%url, "fetching feed");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}
