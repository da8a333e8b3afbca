//! Translate command: intent file in, configuration document out.

use crate::error::CliResult;
use crate::output::{print_info, print_success};
use clap::Args;
use netweave_intent::{parse_intent, to_xml_document, translate};
use std::path::PathBuf;

/// Arguments for `netweave translate`
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Intent file to translate
    #[arg(long, default_value = "intents/campus_policy.json")]
    pub intent: PathBuf,

    /// Where to persist the configuration document
    #[arg(long, default_value = "generated_config.xml")]
    pub out: PathBuf,

    /// Print the document to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

pub fn execute(args: TranslateArgs) -> CliResult<()> {
    let source = std::fs::read_to_string(&args.intent)?;
    let intent = parse_intent(&source)?;
    let doc = translate(&intent)?;
    let xml = to_xml_document(&doc);

    if args.stdout {
        print!("{}", xml);
    } else {
        std::fs::write(&args.out, &xml)?;
        print_success(&format!(
            "configuration document written to {}",
            args.out.display()
        ));
    }
    print_info(&format!("{} segment(s) translated", doc.len()));
    Ok(())
}
