//! Formwright - render and submit declarative forms
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use formwright::{create_form, BlockConfig, Extensions, ReqwestClient, SubmitOutcome};
use formwright_core::prelude::*;

/// Formwright - render and submit declarative forms
#[derive(Parser, Debug)]
#[command(name = "formwright")]
#[command(about = "Render a form from a field-definition document", long_about = None)]
struct Args {
    /// URL of the field-definition document (JSON with a `data` array)
    #[arg(value_name = "URL")]
    source: String,

    /// Write the rendered HTML to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Block configuration entry applied as a data attribute (repeatable)
    #[arg(long = "config", value_name = "KEY=VALUE")]
    config: Vec<String>,

    /// Submit the rendered form and report the outcome
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    formwright_core::logging::init()?;

    let mut config = BlockConfig::new();
    for pair in &args.config {
        match BlockConfig::parse_pair(pair) {
            Some((key, value)) => config.set(key, value),
            None => {
                eprintln!("Ignoring malformed --config entry: {pair}");
            }
        }
    }

    let http = ReqwestClient::new();
    let extensions = Extensions::none();
    let form = create_form(&http, &args.source, &extensions, &config).await?;
    info!(source = %args.source, fields = form.definitions().len(), "form constructed");

    let html = form.html();
    match &args.out {
        Some(path) => std::fs::write(path, &html)?,
        None => println!("{html}"),
    }

    if args.submit {
        match form.submit(&http, &extensions.transformers).await? {
            SubmitOutcome::Redirected(target) => {
                info!(redirect = %target, "submission accepted");
                eprintln!("Submission accepted, redirect: {target}");
            }
            SubmitOutcome::Failed { message } => {
                error!(message = %message, "submission failed");
                eprintln!("Submission failed: {message}");
                std::process::exit(1);
            }
            SubmitOutcome::InFlight => {
                // Single-shot flow, cannot happen
                eprintln!("Submission already in flight.");
            }
        }
    }

    Ok(())
}
