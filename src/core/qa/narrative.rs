//! Heading-based Q&A extraction from narrative Markdown.
//!
//! Each line is classified first, then fed to a small state machine:
//!
//! ```text
//! Idle --(question heading)--> Collecting --(body)--> Collecting
//!   ^                              |
//!   +---(other heading / EOF)------+  emits the entry if it has a body
//! ```
//!
//! Level-1 and level-2 headings, and any heading phrased as a
//! question, open an entry. The body lines that follow, up to a
//! limit, become its answer.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::QaPair;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s{0,3}(#{1,6})\s+(.*?)\s*#*\s*$").expect("heading regex is valid")
});

/// What a single line is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    Fence,
    Blank,
    Body(&'a str),
}

/// Classify one line outside a code fence
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
        return LineKind::Fence;
    }
    if let Some(caps) = HEADING.captures(line) {
        let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1);
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if !text.is_empty() {
            return LineKind::Heading { level, text };
        }
    }
    LineKind::Body(trimmed)
}

enum State {
    Idle,
    Collecting { question: String, answer: Vec<String> },
}

/// Extracts bounded Q&A lists from Markdown text
#[derive(Debug, Clone, Copy)]
pub struct NarrativeExtractor {
    max_answer_lines: usize,
    max_entries: usize,
}

impl NarrativeExtractor {
    pub fn new(max_answer_lines: usize, max_entries: usize) -> Self {
        Self {
            max_answer_lines,
            max_entries,
        }
    }

    pub fn extract(&self, text: &str) -> Vec<QaPair> {
        let mut entries = Vec::new();
        let mut state = State::Idle;
        let mut in_fence = false;

        for line in text.lines() {
            if entries.len() >= self.max_entries {
                break;
            }

            let kind = if in_fence {
                match classify(line) {
                    LineKind::Fence => LineKind::Fence,
                    _ => LineKind::Body(line.trim()),
                }
            } else {
                classify(line)
            };

            state = match (state, kind) {
                (state, LineKind::Fence) => {
                    in_fence = !in_fence;
                    state
                }
                (state, LineKind::Blank) => state,
                (state, LineKind::Heading { level, text }) => {
                    self.flush(state, &mut entries);
                    if level <= 2 || text.ends_with('?') {
                        State::Collecting {
                            question: text.to_string(),
                            answer: Vec::new(),
                        }
                    } else {
                        State::Idle
                    }
                }
                (State::Collecting { question, mut answer }, LineKind::Body(body)) => {
                    if answer.len() < self.max_answer_lines && !body.is_empty() {
                        answer.push(body.to_string());
                    }
                    State::Collecting { question, answer }
                }
                (State::Idle, LineKind::Body(_)) => State::Idle,
            };
        }

        self.flush(state, &mut entries);
        entries
    }

    fn flush(&self, state: State, entries: &mut Vec<QaPair>) {
        if let State::Collecting { question, answer } = state {
            if !answer.is_empty() && entries.len() < self.max_entries {
                entries.push(QaPair {
                    question,
                    answer: answer.join("\n"),
                });
            }
        }
    }
}
