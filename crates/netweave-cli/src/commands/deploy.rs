//! Deploy command: load the persisted document, run the executor, report.

use super::EndpointArgs;
use crate::error::{CliError, CliResult};
use crate::output::{print_success, print_warning, OutputFormat};
use clap::Args;
use netweave_deploy::{deploy_with_options, render, to_record, DeployOptions};
use netweave_intent::parse_xml;
use netweave_types::{ConfigDocument, EndpointConfig, OutcomeStatus};
use std::path::{Path, PathBuf};

/// Arguments for `netweave deploy`
#[derive(Args, Debug)]
pub struct DeployArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Persisted configuration document to deploy
    #[arg(long, default_value = "generated_config.xml")]
    pub config: PathBuf,

    /// Fail instead of simulating when the live session cannot be established
    #[arg(long, env = "NETWEAVE_STRICT")]
    pub strict: bool,
}

pub async fn execute(args: DeployArgs, format: OutputFormat) -> CliResult<()> {
    let doc = load_document(&args.config)?;
    run_deployment(&doc, &args.endpoint.to_config(), args.strict, format).await
}

/// Load and strictly re-validate the persisted configuration document.
pub fn load_document(path: &Path) -> CliResult<ConfigDocument> {
    if !path.exists() {
        return Err(CliError::DocumentMissing {
            path: path.to_path_buf(),
        });
    }
    let source = std::fs::read_to_string(path)?;
    parse_xml(&source).map_err(|source| CliError::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Run one deployment attempt and report its outcome. Shared with `apply`.
pub async fn run_deployment(
    doc: &ConfigDocument,
    endpoint: &EndpointConfig,
    strict: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let options = DeployOptions { strict };
    let outcome = deploy_with_options(doc, endpoint, &options).await;

    match format {
        OutputFormat::Json => crate::output::print_single(&to_record(&outcome)),
        OutputFormat::Table => {
            print!("{}", render(&outcome));
            if outcome.fallback_reason.is_some() && outcome.is_success() {
                print_warning("device unreachable, changes were simulated, not applied");
            }
        }
    }

    match &outcome.status {
        OutcomeStatus::Succeeded => {
            print_success(&format!("deployment completed via {} path", outcome.path));
            Ok(())
        }
        OutcomeStatus::Failed { reason } => Err(CliError::DeploymentFailed {
            reason: reason.clone(),
        }),
    }
}
