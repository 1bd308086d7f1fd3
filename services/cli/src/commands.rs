use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use maintainer_portal::client::PortalClient;
use maintainer_portal::error::AppError;
use maintainer_portal::flows::apply::{
    prepare, ApplicationDraft, FieldError, FormSession, SubmitOutcome,
};
use maintainer_portal::flows::status::{StatusLookup, StatusView};

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Path to a JSON application draft
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Validate and print the wire payload without submitting
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatusArgs {
    /// Application identifier to look up
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct CompaniesArgs {
    /// Only print companies matching this text
    #[arg(long)]
    pub(crate) filter: Option<String>,
}

pub(crate) async fn apply(client: &PortalClient, args: ApplyArgs) -> Result<ExitCode, AppError> {
    let draft = load_draft(&args.file)?;

    if args.dry_run {
        return match prepare(&draft) {
            Ok(payload) => {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(errors) => {
                render_field_errors(&errors);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let mut session = FormSession::with_draft(draft);
    match session.submit(client).await {
        SubmitOutcome::Accepted { message } => {
            println!("{message}");
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected { message } | SubmitOutcome::Failed { message } => {
            println!("{message}");
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Invalid { errors } => {
            render_field_errors(&errors);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub(crate) async fn status(client: &PortalClient, args: StatusArgs) -> Result<ExitCode, AppError> {
    let mut lookup = StatusLookup::new();
    match lookup.lookup(client, &args.id).await {
        StatusView::Resolved { status, review } => {
            println!("Status: {status}");
            if !review.is_empty() {
                println!("Review: {review}");
            }
            Ok(ExitCode::SUCCESS)
        }
        StatusView::NotFound { message } => {
            println!("{message}");
            Ok(ExitCode::FAILURE)
        }
        // A blank identifier is refused before any request is issued.
        StatusView::Idle | StatusView::Loading => {
            println!("An application id is required");
            Ok(ExitCode::FAILURE)
        }
    }
}

pub(crate) async fn companies(
    client: &PortalClient,
    args: CompaniesArgs,
) -> Result<ExitCode, AppError> {
    let mut session = FormSession::new();
    session.load_companies(client).await;

    let matches = session.suggestions(args.filter.as_deref().unwrap_or(""));
    if matches.is_empty() {
        println!("No companies available");
    } else {
        for company in matches {
            println!("{company}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_draft(path: &Path) -> Result<ApplicationDraft, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_field_errors(errors: &[FieldError]) {
    println!("Application draft is invalid:");
    for error in errors {
        println!("  - {}: {}", error.field.label(), error.violation);
    }
}
