use std::process::ExitCode;

use clap::{Parser, Subcommand};
use maintainer_portal::client::PortalClient;
use maintainer_portal::config::AppConfig;
use maintainer_portal::error::AppError;
use maintainer_portal::telemetry;
use tracing::debug;

use crate::commands::{self, ApplyArgs, CompaniesArgs, StatusArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Maintainer Application Portal",
    about = "Apply to the device-maintainer program and check application status from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a maintainer application draft and submit it
    Apply(ApplyArgs),
    /// Check the status of an existing application by id
    Status(StatusArgs),
    /// Print the company directory used for autocomplete suggestions
    Companies(CompaniesArgs),
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let client = PortalClient::new(&config.api)?;
    debug!(base_url = client.base_url(), "maintainer portal client ready");

    match cli.command {
        Command::Apply(args) => commands::apply(&client, args).await,
        Command::Status(args) => commands::status(&client, args).await,
        Command::Companies(args) => commands::companies(&client, args).await,
    }
}
