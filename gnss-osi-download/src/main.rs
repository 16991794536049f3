use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gnss_osi_download::cli::{Action, Cli, RunError};
use gnss_osi_download::rinex::RinexFetcher;
use gnss_osi_download::stations::StationDirectory;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), RunError> {
    let config = cli.portal_config();

    match cli.action()? {
        Action::ListStations => {
            let stations = StationDirectory::new(&config)?.fetch_all().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stations)?);
            } else {
                for station in &stations {
                    println!("{station}");
                }
            }
        }
        Action::Download(request) => {
            let archive = RinexFetcher::new(&config)?
                .fetch(&request, &cli.output_dir)
                .await?;
            println!(
                "Data successfully downloaded and saved as {}",
                archive.path.display()
            );
        }
    }

    Ok(())
}
