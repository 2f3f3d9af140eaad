//! Service command - describe a documented backend service

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-service-info command
#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Service key or part of its name
    pub name: String,
}

/// Execute the get-service-info command
///
/// A miss is reported, not treated as a failure.
pub async fn execute(
    args: ServiceArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = services.qa.current().get_service_info(&args.name);

    match format {
        OutputFormat::Human => match (&lookup.key, &lookup.service) {
            (Some(key), Some(service)) => {
                println!(
                    "{} {}",
                    colors::label(service.display_name(key)),
                    colors::dim(&format!("({key})"))
                );
                if !service.description.is_empty() {
                    println!("{}", service.description);
                }
                if !service.capabilities.is_empty() {
                    println!("\n{}", colors::label("Capabilities:"));
                    for capability in &service.capabilities {
                        if capability.description.is_empty() {
                            println!("  - {}", capability.name);
                        } else {
                            println!(
                                "  - {}: {}",
                                capability.name,
                                colors::dim(&capability.description)
                            );
                        }
                    }
                }
                if !service.qa.is_empty() {
                    println!("\n{}", colors::label("Q&A:"));
                    for pair in &service.qa {
                        println!("  {} {}", colors::category("Q:"), pair.question);
                        println!("     {}", colors::dim(&pair.answer));
                    }
                }
            }
            _ => {
                println!(
                    "{}",
                    colors::warning(lookup.error.as_deref().unwrap_or("Service not found"))
                );
                if !lookup.available_services.is_empty() {
                    println!("Available services:");
                    for name in &lookup.available_services {
                        println!("  {}", colors::file_path(name));
                    }
                }
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&lookup)?);
        }
    }

    Ok(())
}
