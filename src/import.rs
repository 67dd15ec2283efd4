//! Collection import

use crate::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Record fields assigned by the backend and never resent on creation.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "created", "updated"];

/// Outcome counters for an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Collections whose records were all created.
    pub succeeded: usize,

    /// Collection files attempted.
    pub total: usize,
}

/// Fatal importer errors. Any of these aborts the run before work begins.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The import directory does not exist.
    #[error("Directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// The import directory contains no `*.json` files.
    #[error("No JSON files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    /// The import directory could not be listed.
    #[error("failed to list {}: {}", .dir.display(), .source)]
    Unreadable {
        dir: PathBuf,
        source: std::io::Error,
    },
}

/// Removes backend-assigned system fields from a record so the server can
/// assign fresh ones on creation. Missing keys are not an error.
pub fn strip_system_fields(mut record: Map<String, Value>) -> Map<String, Value> {
    for field in SYSTEM_FIELDS {
        record.remove(field);
    }
    record
}

/// Imports every `*.json` file in `import_dir`, in file-name order.
///
/// The collection name is the file stem. A missing directory or one without
/// JSON files is fatal; everything past that point is counted and reported
/// rather than aborting the run.
pub async fn import_all(
    client: &Arc<Client>,
    import_dir: &Path,
) -> Result<ImportSummary, ImportError> {
    let files = discover_files(import_dir)?;

    println!(
        "Importing to {} from {}/",
        client.base_url(),
        import_dir.display()
    );
    println!("{}", "-".repeat(50));

    let mut succeeded = 0;
    for file in &files {
        let name = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if import_collection(client, name, file).await {
            succeeded += 1;
        }
    }

    println!("{}", "-".repeat(50));
    println!(
        "Import complete: {}/{} collections imported",
        succeeded,
        files.len()
    );

    Ok(ImportSummary {
        succeeded,
        total: files.len(),
    })
}

/// Finds `*.json` files in `dir`, sorted lexicographically by name.
fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::MissingDirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ImportError::Unreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    if files.is_empty() {
        return Err(ImportError::NoInputFiles(dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Imports every record from one export file into its collection.
///
/// Returns true only when every record was created successfully. A file
/// without records is a success and issues no requests.
async fn import_collection(client: &Arc<Client>, name: &str, file: &Path) -> bool {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            println!("  ✗ Failed to read {}: {}", file.display(), e);
            return false;
        }
    };

    let data: Value = match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(e) => {
            println!("  ✗ Failed to parse {}: {}", file.display(), e);
            return false;
        }
    };

    let items = match data.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items.clone(),
        _ => {
            println!("  No records found in {}", name);
            return true;
        }
    };

    let service = client.collection(name);
    let total = items.len();
    let mut succeeded = 0;

    for record in items {
        let body = match record {
            Value::Object(map) => Value::Object(strip_system_fields(map)),
            other => other,
        };

        match service.create(&body).await {
            Ok(_) => succeeded += 1,
            Err(e) => println!("  ✗ Failed to import record: {}", e),
        }
    }

    println!("  ✓ Imported {}/{} records to {}", succeeded, total, name);
    succeeded == total
}
