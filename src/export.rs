//! Collection export

use crate::client_response_error::ClientResponseError;
use crate::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Collections exported when no explicit list is given.
pub const DEFAULT_COLLECTIONS: [&str; 5] = ["users", "posts", "comments", "products", "orders"];

/// Default output directory for export files.
pub const DEFAULT_OUTPUT_DIR: &str = "pocketbase_export";

/// Outcome counters for an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Collections whose file was written.
    pub succeeded: usize,

    /// Collections attempted.
    pub total: usize,
}

/// Why a single collection failed to export.
#[derive(Debug, Error)]
enum ExportFailure {
    #[error("{}", .0.summary())]
    Request(#[from] ClientResponseError),

    #[error("{0}")]
    Write(#[from] io::Error),
}

/// Exports every collection in `collections` to `{output_dir}/{name}.json`.
///
/// Individual collection failures are reported and counted; the loop always
/// visits every name. Only output directory creation can fail the whole run.
pub async fn export_all(
    client: &Arc<Client>,
    collections: &[&str],
    output_dir: &Path,
) -> io::Result<ExportSummary> {
    fs::create_dir_all(output_dir)?;

    println!(
        "Exporting from {} to {}/",
        client.base_url(),
        output_dir.display()
    );
    println!("{}", "-".repeat(50));

    let mut succeeded = 0;
    for name in collections {
        match export_collection(client, name, output_dir).await {
            Ok(count) => {
                println!("✓ Exported {}: {} records", name, count);
                succeeded += 1;
            }
            Err(e) => println!("✗ Failed to export {}: {}", name, e),
        }
    }

    println!("{}", "-".repeat(50));
    println!(
        "Export complete: {}/{} collections exported",
        succeeded,
        collections.len()
    );
    println!("Output saved to: {}/", output_dir.display());

    Ok(ExportSummary {
        succeeded,
        total: collections.len(),
    })
}

/// Exports a single collection. Returns the number of items written.
async fn export_collection(
    client: &Arc<Client>,
    name: &str,
    output_dir: &Path,
) -> Result<usize, ExportFailure> {
    let body = client.collection(name).list().await?;

    let pretty = serde_json::to_string_pretty(&body).map_err(ClientResponseError::from)?;
    fs::write(output_dir.join(format!("{}.json", name)), pretty)?;

    Ok(item_count(&body))
}

/// Number of entries in the response's `items` array (missing counts as zero).
fn item_count(body: &serde_json::Value) -> usize {
    body.get("items")
        .and_then(|v| v.as_array())
        .map_or(0, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(&json!({"items": [1, 2, 3]})), 3);
        assert_eq!(item_count(&json!({"items": []})), 0);
        assert_eq!(item_count(&json!({"totalItems": 5})), 0);
    }

    #[tokio::test]
    async fn test_single_collection_exported_others_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/collections/users/records"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": "a", "name": "x"}]
            })))
            .mount(&server)
            .await;

        let client = Client::new(&server.uri());
        let dir = tempfile::tempdir().unwrap();
        let summary = export_all(&client, &DEFAULT_COLLECTIONS, dir.path())
            .await
            .unwrap();

        assert_eq!(
            summary,
            ExportSummary {
                succeeded: 1,
                total: 5
            }
        );

        let text = fs::read_to_string(dir.path().join("users.json")).unwrap();
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        // 2-space pretty indentation
        assert!(text.contains("\n  \"items\""));

        // failed collections leave no file behind
        assert!(!dir.path().join("posts.json").exists());
    }

    #[tokio::test]
    async fn test_missing_items_written_as_zero_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/collections/orders/records"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalItems": 0})))
            .mount(&server)
            .await;

        let client = Client::new(&server.uri());
        let dir = tempfile::tempdir().unwrap();
        let summary = export_all(&client, &["orders"], dir.path()).await.unwrap();

        assert_eq!(summary.succeeded, 1);
        assert!(dir.path().join("orders.json").exists());
    }

    #[tokio::test]
    async fn test_output_dir_created_if_absent() {
        let server = MockServer::start().await;
        let client = Client::new(&server.uri());
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("backups").join("latest");

        let summary = export_all(&client, &["users"], &nested).await.unwrap();

        // all collections 404, but the directory exists and the run completed
        assert_eq!(summary.succeeded, 0);
        assert!(nested.is_dir());
    }
}
