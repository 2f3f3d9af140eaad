//! Search command - regex search over the source tree

use crate::cli::output::{colors, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{LineMatch, SearchQuery, SearchResult};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Regular expression matched against each line
    pub pattern: String,

    /// Match case exactly
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,

    /// Regex on the relative file path (always case-insensitive)
    #[arg(long, short = 'f', value_name = "REGEX")]
    pub file_filter: Option<String>,

    /// Maximum number of matching lines
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,

    /// Context lines before and after each match
    #[arg(long, short = 'C')]
    pub context: Option<usize>,

    /// Only show file paths (no content)
    #[arg(long)]
    pub files_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = &services.config.search;

    let mut query = SearchQuery::new(args.pattern)
        .case_sensitive(args.case_sensitive)
        .max_results(args.max_results.unwrap_or(defaults.default_max_results))
        .context_lines(args.context.unwrap_or(defaults.default_context_lines));
    if let Some(filter) = args.file_filter {
        query = query.file_filter(filter);
    }

    let result = services.explorer.search(&query);

    match format {
        OutputFormat::Human => {
            if let Some(error) = &result.error {
                return Err(error.clone().into());
            }
            print_human(&result, args.files_only);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn print_human(result: &SearchResult, files_only: bool) {
    if result.matches.is_empty() {
        println!(
            "No matches for '{}' ({} files searched)",
            colors::label(&result.pattern),
            colors::number(&result.files_searched.to_string())
        );
        return;
    }

    for file in &result.matches {
        if files_only {
            println!("{}", colors::file_path(&file.file));
            continue;
        }

        println!(
            "{} {}",
            colors::file_path(&file.file),
            colors::dim(&format!("({} matches)", file.matches.len()))
        );
        for (i, line_match) in file.matches.iter().enumerate() {
            if i > 0 {
                println!("{}", colors::dim("  --"));
            }
            print_window(line_match);
        }
        println!();
    }

    println!(
        "Found {} matches in {} of {} files",
        colors::number(&result.total_matches.to_string()),
        colors::number(&result.files_matched.to_string()),
        colors::number(&result.files_searched.to_string())
    );

    if result.truncated {
        print_warning(&format!(
            "stopped at {} matches; narrow the pattern or use --file-filter",
            result.max_results
        ));
    }
}

fn print_window(line_match: &LineMatch) {
    let width = line_match
        .context
        .last()
        .map(|c| c.line_number.to_string().len())
        .unwrap_or(1);

    for line in &line_match.context {
        let number = format!("{:>width$}", line.line_number, width = width);
        if line.is_match {
            println!(
                "  {}: {}",
                colors::line_number(&number),
                colors::matched(&line.content)
            );
        } else {
            println!("  {}- {}", colors::dim(&number), colors::dim(&line.content));
        }
    }
}
