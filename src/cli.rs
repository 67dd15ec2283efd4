//! Command-line argument definitions

use crate::export::DEFAULT_OUTPUT_DIR;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `export_data` binary.
#[derive(Debug, Parser)]
#[command(
    name = "export_data",
    about = "Export PocketBase collections to JSON files"
)]
pub struct ExportArgs {
    /// Base URL of the PocketBase instance, e.g. http://127.0.0.1:8090
    pub base_url: String,

    /// Directory the export files are written to
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

/// Arguments for the `import_data` binary.
#[derive(Debug, Parser)]
#[command(
    name = "import_data",
    about = "Import JSON export files into PocketBase"
)]
pub struct ImportArgs {
    /// Base URL of the PocketBase instance, e.g. http://127.0.0.1:8090
    pub base_url: String,

    /// Directory containing `{collection}.json` export files
    pub import_dir: PathBuf,
}
