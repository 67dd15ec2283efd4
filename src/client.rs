//! PocketBase Client

use crate::client_response_error::ClientResponseError;
use crate::services::RecordService;
use std::sync::Arc;

/// PocketBase Client for making API requests.
pub struct Client {
    /// The base PocketBase backend URL address.
    base_url: String,

    /// HTTP client for making requests.
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a new PocketBase client.
    pub fn new(base_url: &str) -> Arc<Self> {
        Arc::new(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a full client URL by safely concatenating the provided path.
    pub fn build_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        if !path.is_empty() {
            if !url.ends_with('/') {
                url.push('/');
            }
            if let Some(stripped) = path.strip_prefix('/') {
                url.push_str(stripped);
            } else {
                url.push_str(path);
            }
        }

        url
    }

    /// Returns the RecordService for the specified collection.
    pub fn collection(self: &Arc<Self>, name: &str) -> RecordService {
        RecordService::new(Arc::clone(self), name)
    }

    /// Issues a GET request and returns the parsed JSON response body.
    ///
    /// Anything other than a 200 response is an error.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientResponseError> {
        let response = self.http_client.get(self.build_url(path)).send().await?;
        Self::into_json(response, &[200]).await
    }

    /// Issues a POST request with a JSON body and returns the parsed
    /// JSON response body.
    ///
    /// PocketBase answers record creation with 200 or 201; both are accepted.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientResponseError> {
        let response = self
            .http_client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await?;
        Self::into_json(response, &[200, 201]).await
    }

    async fn into_json(
        response: reqwest::Response,
        accepted: &[u16],
    ) -> Result<serde_json::Value, ClientResponseError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await.unwrap_or_default();

        if !accepted.contains(&status) {
            return Err(ClientResponseError::new(&url, status, &text));
        }

        // Handle empty response bodies (e.g. 204 No Content)
        if text.is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&text).map_err(ClientResponseError::from)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = Client::new("http://localhost:8090");
        assert_eq!(
            client.build_url("/api/collections/users/records"),
            "http://localhost:8090/api/collections/users/records"
        );
        assert_eq!(
            client.build_url("api/collections/users/records"),
            "http://localhost:8090/api/collections/users/records"
        );
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = Client::new("http://localhost:8090/");
        assert_eq!(client.base_url(), "http://localhost:8090");
    }
}
