//! Apply command: translate and deploy in one run.
//!
//! The document is still persisted between the two steps, so the file on
//! disk always matches what was handed to the executor.

use super::{deploy::run_deployment, EndpointArgs};
use crate::error::CliResult;
use crate::output::{print_info, print_success, OutputFormat};
use clap::Args;
use netweave_intent::{parse_intent, to_xml_document, translate};
use std::path::PathBuf;

/// Arguments for `netweave apply`
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Intent file to translate
    #[arg(long, default_value = "intents/campus_policy.json")]
    pub intent: PathBuf,

    /// Where to persist the configuration document
    #[arg(long, default_value = "generated_config.xml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Fail instead of simulating when the live session cannot be established
    #[arg(long, env = "NETWEAVE_STRICT")]
    pub strict: bool,
}

pub async fn execute(args: ApplyArgs, format: OutputFormat) -> CliResult<()> {
    let source = std::fs::read_to_string(&args.intent)?;
    let intent = parse_intent(&source)?;
    let doc = translate(&intent)?;

    std::fs::write(&args.config, to_xml_document(&doc))?;
    print_success(&format!(
        "configuration document written to {}",
        args.config.display()
    ));
    print_info(&format!("{} segment(s) translated", doc.len()));

    run_deployment(&doc, &args.endpoint.to_config(), args.strict, format).await
}
