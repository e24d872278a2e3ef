//! HTTP retrieval of logo source images.

use crate::types::{LogoError, LogoResult};

/// Downloads raw logo bytes over HTTP(S), following redirects.
pub struct LogoFetcher {
    client: reqwest::Client,
}

impl LogoFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the body at `url`. A non-2xx response is an error carrying the
    /// status and URL. No retries; the caller decides what a failure means
    /// for the rest of the run.
    pub async fn fetch(&self, url: &str) -> LogoResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::Download {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for LogoFetcher {
    fn default() -> Self {
        Self::new()
    }
}
