//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::core::types::{NodeType, ProjectNode};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for directories in the project tree
    pub fn directory(s: &str) -> ColoredString {
        s.blue().bold()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for line numbers in the search gutter
    pub fn line_number(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for the matched line of a context window
    pub fn matched(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for category names
    pub fn category(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format bytes into human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let gb_val = bytes as f64 / GB as f64;
    let mb_val = bytes as f64 / MB as f64;
    let kb_val = bytes as f64 / KB as f64;

    if bytes >= GB {
        format!("{gb_val:.1} GB")
    } else if bytes >= MB {
        format!("{mb_val:.1} MB")
    } else if bytes >= KB {
        format!("{kb_val:.1} KB")
    } else {
        format!("{bytes} B")
    }
}

/// Render a project tree with box-drawing branches
pub fn format_tree(root: &ProjectNode) -> String {
    let mut out = format!("{}\n", colors::directory(&format!("{}/", root.name)));
    if let Some(children) = &root.children {
        format_tree_children(children, "", &mut out);
    }
    out
}

fn format_tree_children(children: &[ProjectNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };

        let label = match child.node_type {
            NodeType::Directory => colors::directory(&format!("{}/", child.name)).to_string(),
            NodeType::File => format!(
                "{} {}",
                child.name,
                colors::dim(&format!("({})", format_bytes(child.size.unwrap_or(0))))
            ),
            NodeType::Truncated => colors::dim(&child.name).to_string(),
        };
        out.push_str(&format!("{prefix}{branch}{label}\n"));

        if let Some(grandchildren) = &child.children {
            let next = format!("{prefix}{}", if last { "    " } else { "│   " });
            format_tree_children(grandchildren, &next, out);
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
