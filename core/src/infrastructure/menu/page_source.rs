use std::time::Duration;

use reqwest::Client;

use crate::domain::{common::entities::app_errors::CoreError, menu::ports::MenuPageSource};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Plain HTTP implementation of the page collaborator. Sufficient for pages
/// that ship their menu markup server-side; a headless-browser adapter can
/// replace it behind the same port. Connections are released when the client
/// is dropped, on every exit path.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(fetch_timeout_secs: u64) -> Result<Self, CoreError> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(fetch_timeout_secs))
            .build()
            .map_err(|e| CoreError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl MenuPageSource for HttpPageSource {
    async fn fetch_rendered(&self, url: &str) -> Result<String, CoreError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("menu page request failed: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "menu page returned status {}",
                response.status()
            )));
        }

        response.text().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("failed to read menu page body: {e}"))
        })
    }
}
