//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list extensions, special files and excluded directories
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    match format {
        OutputFormat::Human => {
            let xdg = XdgDirs::new();
            print_header("Configuration:");
            println!("  config_file: {}", xdg.config_file().display());
            println!("  project:");
            println!("    root: {}", config.project.root.display());
            println!("  search:");
            println!(
                "    default_max_results: {} (cap {})",
                config.search.default_max_results, config.search.max_results_cap
            );
            println!(
                "    default_context_lines: {} (cap {})",
                config.search.default_context_lines, config.search.max_context_lines
            );
            println!(
                "    max_pattern_length: {}",
                config.search.max_pattern_length
            );
            println!("    max_file_size_mb: {}", config.search.max_file_size_mb);
            println!("  tree:");
            println!(
                "    default_max_depth: {} (cap {})",
                config.tree.default_max_depth, config.tree.max_depth_cap
            );
            println!("  qa:");
            println!("    services_doc: {}", config.qa.services_doc.display());
            println!(
                "    narrative_dir: {} (enabled: {})",
                config.qa.narrative_dir.display(),
                config.qa.narrative_enabled
            );
            if args.all {
                println!("  walker:");
                println!("    extensions: {:?}", config.walker.extensions);
                println!("    special_files: {:?}", config.walker.special_files);
                println!("    excluded_dirs: {:?}", config.walker.excluded_dirs);
                println!("    exclude_patterns: {:?}", config.walker.exclude_patterns);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&**config)?);
        }
    }

    Ok(())
}
