//! PocketBase backup tools
//!
//! Export and import of PocketBase collection records via the REST API,
//! serialized as one JSON file per collection. The `export_data` and
//! `import_data` binaries are thin wrappers over this library.

pub mod cli;
pub mod client;
pub mod client_response_error;
pub mod export;
pub mod import;
pub mod services;

pub use cli::{ExportArgs, ImportArgs};
pub use client::Client;
pub use client_response_error::ClientResponseError;
pub use export::{export_all, ExportSummary, DEFAULT_COLLECTIONS, DEFAULT_OUTPUT_DIR};
pub use import::{import_all, strip_system_fields, ImportError, ImportSummary, SYSTEM_FIELDS};
pub use services::RecordService;
