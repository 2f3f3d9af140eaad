//! Read-file command - print a project file

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the read-file command
#[derive(Args, Debug)]
pub struct ReadFileArgs {
    /// Path relative to the project root
    pub path: String,
}

/// Execute the read-file command
///
/// Human output is the raw file text so it can be piped.
pub async fn execute(
    args: ReadFileArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = services.explorer.get_file_content(&args.path)?;

    match format {
        OutputFormat::Human => {
            print!("{}", file.content);
            if !file.content.is_empty() && !file.content.ends_with('\n') {
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
    }

    Ok(())
}
