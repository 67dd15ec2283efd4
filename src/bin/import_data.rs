use clap::Parser;
use pocketbase_backup::{import_all, Client, ImportArgs};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Partial per-record failures still exit 0; missing arguments, a missing
    // directory, or a directory without JSON files are fatal.
    let args = match ImportArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let client = Client::new(&args.base_url);

    match import_all(&client, &args.import_dir).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}
