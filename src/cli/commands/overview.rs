//! Overview command - summarize the codebase

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::qa::model::StructureEntry;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-codebase-overview command
#[derive(Args, Debug)]
pub struct OverviewArgs {}

/// Execute the get-codebase-overview command
pub async fn execute(
    _args: OverviewArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.qa.current();
    let overview = index.overview();

    match format {
        OutputFormat::Human => {
            println!("{}\n", colors::label(&overview.project));

            if !overview.technologies.is_empty() {
                println!("{}", colors::label("Technologies:"));
                for (area, aspects) in &overview.technologies {
                    println!("  {}", colors::category(area));
                    for (aspect, value) in aspects {
                        println!("    {aspect}: {value}");
                    }
                }
                println!();
            }

            if !overview.structure.is_empty() {
                println!("{}", colors::label("Structure:"));
                for (path, entry) in &overview.structure {
                    match entry {
                        StructureEntry::Description(text) => {
                            println!("  {} {}", colors::file_path(path), colors::dim(text));
                        }
                        StructureEntry::Section(items) => {
                            println!("  {}", colors::file_path(path));
                            for (sub, text) in items {
                                println!("    {} {}", colors::file_path(sub), colors::dim(text));
                            }
                        }
                    }
                }
                println!();
            }

            println!("{}", colors::label("Services:"));
            if overview.services.is_empty() {
                println!("  {}", colors::dim("none documented"));
            }
            for service in &overview.services {
                println!("  {} {}", service.name, colors::dim(&service.description));
            }

            println!("\n{}", colors::label("Knowledge base:"));
            for category in &overview.categories {
                println!(
                    "  {}: {}",
                    category.name,
                    colors::number(&category.entries.to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(overview)?);
        }
    }

    Ok(())
}
