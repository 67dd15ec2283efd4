use clap::Parser;
use pocketbase_backup::{export_all, Client, ExportArgs, DEFAULT_COLLECTIONS};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Partial per-collection failures still exit 0; only a missing base_url
    // or an unusable output directory is fatal.
    let args = match ExportArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let client = Client::new(&args.base_url);

    match export_all(&client, &DEFAULT_COLLECTIONS, &args.output_dir).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}
