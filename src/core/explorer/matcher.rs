//! Regex search across candidate files.
//!
//! Scanning is strictly sequential in walk order. Each matching line
//! gets its own context window, clipped to the file, and the global
//! result cap stops the scan the moment it is reached, even in the
//! middle of a file. The returned matches are therefore always a
//! scan-order prefix of what an uncapped search would return, and
//! `truncated` is only set when that uncapped search has more.

use regex::{Regex, RegexBuilder};
use std::path::Path;

use super::decode::{Decoded, Decoder};
use super::walker::{Candidate, FileWalker};
use crate::core::config::SearchConfig;
use crate::core::error::{Result, SonarError};
use crate::core::types::{ContextLine, FileMatch, LineMatch, SearchQuery, SearchResult};

/// Compiles queries and scans the tree
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    walker: FileWalker,
    decoder: Decoder,
    max_results_cap: usize,
    max_context_lines: usize,
    max_pattern_length: usize,
}

/// Compiled form of a validated query
struct CompiledQuery {
    pattern: Regex,
    file_filter: Option<Regex>,
    max_results: usize,
    context_lines: usize,
}

impl SearchOrchestrator {
    pub fn new(walker: FileWalker, config: &SearchConfig) -> Self {
        Self {
            walker,
            decoder: Decoder::new(config.max_file_size_mb),
            max_results_cap: config.max_results_cap,
            max_context_lines: config.max_context_lines,
            max_pattern_length: config.max_pattern_length,
        }
    }

    /// Run `query` against the tree under `root`
    ///
    /// Rejected queries come back as a result with `error` set and all
    /// counters at zero; nothing on disk is touched in that case.
    pub fn search(&self, root: &Path, query: &SearchQuery) -> SearchResult {
        let compiled = match self.compile(query) {
            Ok(compiled) => compiled,
            Err(e) => {
                tracing::debug!("Rejected search query: {}", e);
                let mut result = SearchResult::empty(query);
                result.error = Some(e.message());
                return result;
            }
        };

        let mut result = SearchResult::empty(query);
        result.max_results = compiled.max_results;
        self.scan(root, &compiled, &mut result);

        tracing::debug!(
            "Search '{}' finished: {} matches in {} files ({} searched)",
            query.pattern,
            result.total_matches,
            result.files_matched,
            result.files_searched
        );

        result
    }

    /// Validate parameters, then compile pattern and filter, in that order
    fn compile(&self, query: &SearchQuery) -> Result<CompiledQuery> {
        if query.pattern.is_empty() {
            return Err(SonarError::InvalidParameter(
                "pattern cannot be empty".to_string(),
            ));
        }

        if query.pattern.len() > self.max_pattern_length {
            return Err(SonarError::InvalidParameter(format!(
                "pattern exceeds {} bytes",
                self.max_pattern_length
            )));
        }

        if query.max_results == 0 {
            return Err(SonarError::InvalidParameter(
                "max_results must be greater than 0".to_string(),
            ));
        }

        let pattern = compile_regex(&query.pattern, !query.case_sensitive)
            .map_err(|e| SonarError::InvalidPattern(format!("search pattern: {e}")))?;

        // The file filter always ignores case
        let file_filter = match query.file_filter.as_deref() {
            Some(filter) if !filter.is_empty() => Some(
                compile_regex(filter, true)
                    .map_err(|e| SonarError::InvalidPattern(format!("file_filter: {e}")))?,
            ),
            _ => None,
        };

        Ok(CompiledQuery {
            pattern,
            file_filter,
            max_results: query.max_results.min(self.max_results_cap),
            context_lines: query.context_lines.min(self.max_context_lines),
        })
    }

    fn scan(&self, root: &Path, query: &CompiledQuery, result: &mut SearchResult) {
        let mut candidates = self.walker.candidates(root);
        let mut filled = false;

        for candidate in candidates.by_ref() {
            if !query.accepts(&candidate.relative) {
                continue;
            }

            result.files_searched += 1;

            let Some(text) = self.read(&candidate) else {
                continue;
            };

            // One match past the budget tells a dropped match from an exact fit
            let budget = query.max_results - result.total_matches;
            let mut matches = scan_lines(&text, &query.pattern, query.context_lines, budget + 1);
            let overflow = matches.len() > budget;
            matches.truncate(budget);

            if !matches.is_empty() {
                result.total_matches += matches.len();
                result.files_matched += 1;
                result.matches.push(FileMatch {
                    file: candidate.relative,
                    matches,
                });
            }

            if overflow {
                result.truncated = true;
                break;
            }

            if result.total_matches >= query.max_results {
                filled = true;
                break;
            }
        }

        if filled {
            result.truncated = self.any_match(candidates, query);
        }
    }

    /// Whether any remaining candidate has a matching line
    ///
    /// Files looked at here are not counted in `files_searched`.
    fn any_match(&self, candidates: impl Iterator<Item = Candidate>, query: &CompiledQuery) -> bool {
        candidates
            .filter(|candidate| query.accepts(&candidate.relative))
            .filter_map(|candidate| self.read(&candidate))
            .any(|text| text.lines().any(|line| query.pattern.is_match(line)))
    }

    fn read(&self, candidate: &Candidate) -> Option<String> {
        match self.decoder.decode(&candidate.path) {
            Decoded::Text(text) => Some(text),
            Decoded::Skipped(reason) => {
                tracing::debug!("Skipping {}: {}", candidate.relative, reason);
                None
            }
        }
    }
}

impl CompiledQuery {
    fn accepts(&self, relative: &str) -> bool {
        self.file_filter
            .as_ref()
            .map_or(true, |filter| filter.is_match(relative))
    }
}

/// Compile with the linear-time engine; no input can backtrack catastrophically
pub fn compile_regex(pattern: &str, case_insensitive: bool) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
}

/// Collect up to `budget` matching lines of `text`, each with its window
///
/// Windows of nearby matches overlap and are duplicated, one per match.
pub fn scan_lines(text: &str, pattern: &Regex, context_lines: usize, budget: usize) -> Vec<LineMatch> {
    let lines: Vec<&str> = text.lines().collect();
    let mut matches = Vec::new();

    if budget == 0 {
        return matches;
    }

    for (i, line) in lines.iter().enumerate() {
        if !pattern.is_match(line) {
            continue;
        }

        let start = i.saturating_sub(context_lines);
        let end = (i + context_lines).min(lines.len() - 1);

        let context = (start..=end)
            .map(|j| ContextLine {
                line_number: j + 1,
                content: lines[j].to_string(),
                is_match: j == i,
            })
            .collect();

        matches.push(LineMatch {
            line_number: i + 1,
            content: line.to_string(),
            context,
        });

        if matches.len() >= budget {
            break;
        }
    }

    matches
}
