//! docdate CLI - print a LaTeX \date{} line for a git repository
//!
//! Usage: docdate [--repo <DIR>] [--backend <git|libgit2>] [--utc] [--output <FORMAT>]

mod cli;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use cli::{Command, RunOptions};
use docdate::{
    generate_execution_id, output_json, resolve_date_and_version_in, Backend,
    DateVersionResponse, ErrorResponse, GitCli, JsonResponse, OutputFormat,
    RepositoryQueryError,
};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(options: &RunOptions) -> Result<()> {
    if options.backend == Backend::GitCli && !GitCli::new().is_available() {
        tracing::warn!(
            "{} backend selected but git not found on PATH; --backend {} does not need it",
            Backend::GitCli.as_str(),
            Backend::Libgit2.as_str()
        );
    }
    tracing::debug!(
        backend = options.backend.as_str(),
        repo = %options.repo,
        "resolving date and version"
    );

    let vcs = options.backend.create();
    let result = if options.utc {
        resolve_date_and_version_in(vcs.as_ref(), &options.repo, &Utc)
    } else {
        resolve_date_and_version_in(vcs.as_ref(), &options.repo, &Local)
    };
    let resolved = result
        .with_context(|| format!("cannot read date and version from {}", options.repo))?;

    match options.output_format {
        OutputFormat::Human => println!("{}", resolved),
        OutputFormat::Json => {
            let response = JsonResponse::new(
                DateVersionResponse::from(&resolved),
                &generate_execution_id(),
            );
            output_json(&response)?;
        }
    }
    Ok(())
}

fn report_error(err: &anyhow::Error, output_format: OutputFormat) {
    if output_format == OutputFormat::Json {
        if let Some(query_err) = err.downcast_ref::<RepositoryQueryError>() {
            let response = JsonResponse::new(ErrorResponse::from(query_err), &generate_execution_id());
            if let Ok(json) = serde_json::to_string_pretty(&response) {
                eprintln!("{}", json);
                return;
            }
        }
    }
    eprintln!("Error: {:?}", err);
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::parse_args(&args) {
        Ok(Command::Help) => {
            cli::print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{}", docdate::version::version());
            ExitCode::SUCCESS
        }
        Ok(Command::Run(options)) => {
            if let Err(e) = run(&options) {
                report_error(&e, options.output_format);
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            cli::print_usage();
            ExitCode::from(1)
        }
    }
}
