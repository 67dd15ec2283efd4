//! Record Service

use crate::client_response_error::ClientResponseError;
use crate::Client;
use std::sync::Arc;

/// Service for the record endpoints of a single collection.
pub struct RecordService {
    client: Arc<Client>,
    collection_name: String,
}

impl RecordService {
    /// Creates a new RecordService for the specified collection.
    pub fn new(client: Arc<Client>, collection_name: &str) -> Self {
        Self {
            client,
            collection_name: collection_name.to_string(),
        }
    }

    /// Returns the records endpoint path for the collection.
    pub fn base_crud_path(&self) -> String {
        format!(
            "/api/collections/{}/records",
            encode_uri_component(&self.collection_name)
        )
    }

    /// Fetches the collection's record list response.
    ///
    /// The body is returned as raw JSON so an export can write it to disk
    /// verbatim; only the `items` field is ever interpreted downstream.
    pub async fn list(&self) -> Result<serde_json::Value, ClientResponseError> {
        self.client.get_json(&self.base_crud_path()).await
    }

    /// Creates a new record in the collection.
    pub async fn create(
        &self,
        record: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientResponseError> {
        self.client.post_json(&self.base_crud_path(), record).await
    }
}

/// Helper function to encode URL path segments.
pub fn encode_uri_component(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => {
                result.push(c);
            }
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
