use anyhow::Result;
use clap::Parser;

mod auth;
mod client;
mod config;
mod printer;
mod report;
mod types;

use client::ReportingClient;
use config::Config;

/// gar - fetch one Google Analytics report and print it as padded text
#[derive(Parser)]
#[command(name = "gar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch a Google Analytics report and print it as a padded table", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    Cli::parse();

    let config = Config::from_env();
    run(&config).await
}

/// Three stages in order: build the client, fetch the report, print it.
///
/// A stage failure is printed to stdout and the run carries on, handing the
/// printer whatever the fetch produced. The process exits 0 either way.
async fn run(config: &Config) -> Result<()> {
    let client = match ReportingClient::new(config) {
        Ok(client) => Some(client),
        Err(err) => {
            println!("error creating client: {err}");
            None
        }
    };

    let request = report::build_report_request();

    let mut response = None;
    if let Some(client) = &client {
        match client.batch_get(&request).await {
            Ok(body) => response = Some(body),
            Err(err) => println!("error fetching report: {err}"),
        }
    }

    printer::print(response.as_ref());

    Ok(())
}
