mod cli;
mod commands;

use std::process::ExitCode;

use maintainer_portal::error::AppError;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
