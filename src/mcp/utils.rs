//! MCP utility functions for token limit management and formatting
//!
//! This module provides constants and helper functions for keeping
//! tool output under the MCP response limit and building the
//! warnings shown when output is cut.

/// MCP protocol token limit (25,000 tokens)
///
/// This is the maximum number of tokens that can be returned in a single MCP response.
pub const MCP_TOKEN_LIMIT: usize = 25_000;

/// Maximum characters for read_file (20k chars = ~5k tokens)
pub const READ_FILE_MAX_CHARS: usize = 20_000;

/// Maximum characters of rendered search_code output
pub const SEARCH_OUTPUT_MAX_CHARS: usize = 60_000;

/// Maximum Q&A hits rendered by search_qa
pub const QA_RESULTS_MAX: usize = 50;

/// Build truncation warning message for read_file
///
/// # Arguments
/// * `shown_chars` - Number of characters actually displayed
/// * `total_chars` - Total number of characters in the file
/// * `estimated_lines` - Approximate number of lines shown
/// * `file_path` - Relative path of the file
///
/// # Returns
/// Formatted markdown warning message
pub fn build_read_file_warning(
    shown_chars: usize,
    total_chars: usize,
    estimated_lines: usize,
    file_path: &str,
) -> String {
    let not_shown = total_chars.saturating_sub(shown_chars);
    let percent = if total_chars > 0 {
        (shown_chars as f64 / total_chars as f64) * 100.0
    } else {
        0.0
    };

    format!(
        "⚠️ FILE TRUNCATED - SHOWING FIRST {READ_FILE_MAX_CHARS} CHARACTERS\n\n\
         Showing: Characters 1-{shown_chars} of {total_chars} total ({percent:.1}%)\n\
         Reason: Maximum display limit is {READ_FILE_MAX_CHARS} characters (MCP 25k token limit)\n\
         Not shown: {not_shown} characters\n\n\
         💡 SUGGESTIONS:\n\
         - Use `search_code` with file_filter=\"{file_path}\" to find specific content in this file\n\
         - Use the `sonar read-file {file_path}` CLI command for the full text\n\n\
         ---\n\n\
         **File:** `{file_path}`\n\
         **Showing:** First {shown_chars} characters (~{estimated_lines} lines)\n\n"
    )
}

/// Build the note appended when search_qa output is capped
pub fn build_qa_truncation_note(shown: usize, total: usize) -> String {
    format!(
        "\n---\n\n⚠️ Showing {shown} of {total} matching entries. \
         Refine the query or use `list_qa` to browse by category.\n"
    )
}
