//! Name list served over HTTP(S), e.g. a static asset next to a web front end.

use std::future::Future;
use std::time::Duration;

use super::source::{NameError, NameSource};

/// A name list fetched with a GET request on every draw.
#[derive(Debug, Clone)]
pub struct HttpNames {
    client: reqwest::Client,
    url: String,
}

impl HttpNames {
    /// Build a source for `url` with a 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Network` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, NameError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NameError::Network(e.to_string()))?;
        Ok(Self::with_client(client, url))
    }

    /// Reuse an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl NameSource for HttpNames {
    fn fetch(&self) -> impl Future<Output = Result<String, NameError>> + Send {
        async move {
            let resp = self
                .client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| NameError::Network(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(NameError::Status(format!("HTTP {status} from {}", self.url)));
            }

            resp.text()
                .await
                .map_err(|e| NameError::Network(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_url() {
        let names = HttpNames::new("https://example.com/karnataka_driver_names.txt").unwrap();
        assert_eq!(names.url(), "https://example.com/karnataka_driver_names.txt");
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let names = HttpNames::new("http://127.0.0.1:9/names.txt").unwrap();
        let err = names.fetch().await.unwrap_err();
        assert!(matches!(err, NameError::Network(_)));
    }
}
