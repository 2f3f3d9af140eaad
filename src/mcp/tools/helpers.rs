//! Helper functions for MCP tools

use crate::core::types::{LineMatch, NodeType, ProjectNode};

/// Format bytes as human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Detect the code fence language from a file name
pub fn detect_language(file_path: &str) -> &str {
    let name = file_path.rsplit('/').next().unwrap_or(file_path);
    match name {
        "Dockerfile" => return "dockerfile",
        "Makefile" => return "makefile",
        _ => {}
    }

    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("rs") => "rust",
        Some("py") => "python",
        Some("js") | Some("jsx") => "javascript",
        Some("ts") | Some("tsx") => "typescript",
        Some("sh") | Some("bash") => "bash",
        Some("sql") => "sql",
        Some("md") => "markdown",
        Some("json") => "json",
        Some("yaml") | Some("yml") => "yaml",
        Some("toml") => "toml",
        Some("html") | Some("htm") => "html",
        Some("css") => "css",
        Some("scss") | Some("sass") => "scss",
        _ => "",
    }
}

/// Truncate text to `max_chars` characters, noting how much was cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!(
        "{}...\n\n[Truncated {} chars]",
        truncated,
        total - max_chars
    )
}

/// Render one match with its context window as numbered lines
///
/// The matched line is marked with `>`.
pub fn format_context_window(line_match: &LineMatch) -> String {
    let width = line_match
        .context
        .last()
        .map(|c| c.line_number.to_string().len())
        .unwrap_or(1);

    line_match
        .context
        .iter()
        .map(|line| {
            let marker = if line.is_match { '>' } else { ' ' };
            format!(
                "{marker} {:>width$} | {}",
                line.line_number,
                line.content,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a project tree as indented text
pub fn render_tree(root: &ProjectNode) -> String {
    let mut out = format!("{}/\n", root.name);
    if let Some(children) = &root.children {
        render_children(children, "", &mut out);
    }
    out
}

fn render_children(children: &[ProjectNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };

        let label = match child.node_type {
            NodeType::Directory => format!("{}/", child.name),
            NodeType::File => format!("{} ({})", child.name, format_bytes(child.size.unwrap_or(0))),
            NodeType::Truncated => child.name.clone(),
        };
        out.push_str(&format!("{prefix}{branch}{label}\n"));

        if let Some(grandchildren) = &child.children {
            let next = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_children(grandchildren, &next, out);
        }
    }
}
