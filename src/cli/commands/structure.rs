//! Structure command - show the project directory tree

use crate::cli::output::{colors, format_tree};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-project-structure command
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// Levels below the root to expand (default from config)
    #[arg(long, short = 'd')]
    pub max_depth: Option<usize>,
}

/// Execute the get-project-structure command
pub async fn execute(
    args: StructureArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = services.explorer.get_project_structure(args.max_depth);

    match format {
        OutputFormat::Human => {
            print!("{}", format_tree(&tree));
            println!(
                "\n{} files shown",
                colors::number(&tree.file_count().to_string())
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }

    Ok(())
}
