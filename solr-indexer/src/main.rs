use std::env;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use solr_indexer::{commands, AdminError, Cli, Dependencies, Settings};

/// Logs go to stderr so command output on stdout stays clean.
/// `RUST_LOG` sets the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<String, AdminError> {
    let settings = Settings::from_cli(&cli)?;
    let deps = Dependencies::new(&settings)?;
    commands::execute(&cli.command, &settings.collection, &deps).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so it can supply argument defaults.
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    info!(command = ?cli.command, "Starting");

    match run(cli).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
