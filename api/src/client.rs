use std::fmt;

use medium_core::{ApiFailure, MediumError, Reply, Result};
use reqwest::{header::USER_AGENT, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::request::Request;

pub const API_BASE_URL: &str = "https://medium2.p.rapidapi.com";
pub const API_HOST: &str = "medium2.p.rapidapi.com";

const KEY_HEADER: &str = "x-rapidapi-key";
const HOST_HEADER: &str = "x-rapidapi-host";
const CLIENT_AGENT: &str = concat!("medium-api/", env!("CARGO_PKG_VERSION"));

/// Client for the Medium data API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MediumClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for MediumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediumClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl MediumClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Point the client at another host, e.g. a local stub server
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key, base_url)
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one GET and return the decoded JSON body.
    ///
    /// Non-2xx statuses come back as `Reply::Failed`; only transport and
    /// decode problems are errors.
    pub async fn dispatch(&self, request: &Request) -> Result<Reply> {
        let url = request.url(&self.base_url)?;
        debug!(endpoint = request.path(), params = ?request.param_names(), "dispatching request");

        let response = self
            .client
            .get(url)
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, API_HOST)
            .header(USER_AGENT, CLIENT_AGENT)
            .send()
            .await
            .map_err(|e| MediumError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            let failure = ApiFailure::new(request.path(), status.as_u16(), &status.to_string(), body);
            warn!(endpoint = %failure.endpoint, status = failure.status, "upstream returned an error status");
            return Ok(Reply::Failed(failure));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MediumError::Parse(e.to_string()))?;

        Ok(Reply::Data(body))
    }

    pub(crate) async fn get(&self, request: Request) -> Result<Reply> {
        self.dispatch(&request).await
    }

    /// Dispatch, then keep only one string field of the body
    pub(crate) async fn get_field(&self, request: Request, field: &str) -> Result<Reply<String>> {
        self.dispatch(&request).await?.project(field, request.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_rapidapi() {
        let client = MediumClient::new("key");
        assert_eq!(client.base_url(), API_BASE_URL);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = MediumClient::with_base_url("key", "http://127.0.0.1:9000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = MediumClient::new("super-secret");
        let printed = format!("{:?}", client);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
