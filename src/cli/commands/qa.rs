//! Q&A commands - browse and search the knowledge base

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::qa::QaCategory;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-qa command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this category (e.g. backend, api)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Only print questions
    #[arg(long, short = 'q')]
    pub questions_only: bool,
}

/// Arguments for the search-qa command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in questions and answers
    pub query: String,
}

/// Execute the list-qa command
pub async fn execute_list(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.qa.current();
    let all = index.get_all_qa();

    let selected: Vec<&QaCategory> = match args.category.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => {
            let key = key.to_lowercase();
            match all.get(&key) {
                Some(category) => vec![category],
                None => {
                    let known: Vec<&str> = all.0.iter().map(|c| c.key.as_str()).collect();
                    return Err(format!(
                        "Unknown category '{key}'. Available: {}",
                        known.join(", ")
                    )
                    .into());
                }
            }
        }
        _ => all.0.iter().collect(),
    };

    match format {
        OutputFormat::Human => {
            for category in selected {
                println!(
                    "{} {}",
                    colors::label(&category.name),
                    colors::dim(&format!("({} entries)", category.entries.len()))
                );
                for entry in &category.entries {
                    println!("  {} {}", colors::category("Q:"), entry.question);
                    if !args.questions_only {
                        for line in entry.answer.lines() {
                            println!("     {}", colors::dim(line));
                        }
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            if selected.len() == 1 && args.category.is_some() {
                println!("{}", serde_json::to_string_pretty(selected[0])?);
            } else {
                println!("{}", serde_json::to_string_pretty(&all)?);
            }
        }
    }

    Ok(())
}

/// Execute the search-qa command
pub async fn execute_search(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = services.qa.current().search(&args.query)?;

    match format {
        OutputFormat::Human => {
            if result.results.is_empty() {
                println!("No entries found for '{}'", colors::label(&args.query));
                return Ok(());
            }

            println!(
                "Found {} entries for '{}':\n",
                colors::number(&result.total_results.to_string()),
                colors::label(&args.query)
            );
            for hit in &result.results {
                let tag = match &hit.origin {
                    Some(origin) => format!("[{} | {}]", hit.category, origin),
                    None => format!("[{}]", hit.category),
                };
                println!("{} {}", colors::category(&tag), colors::label(&hit.question));
                for line in hit.answer.lines() {
                    println!("    {line}");
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
