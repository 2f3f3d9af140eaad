//! Best-effort text decoding for candidate files.
//!
//! Reading a file either yields text or a reason it was skipped.
//! Invalid UTF-8 sequences are replaced rather than rejected, so only
//! I/O failures and the size guard cause a skip.

use std::fmt;
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Why a file contributed nothing to a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File exceeds the configured size guard
    TooLarge { size: u64, limit: u64 },

    /// Open or read failed (permissions, vanished file, ...)
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge { size, limit } => {
                write!(f, "file too large ({size} bytes, limit {limit})")
            }
            SkipReason::Unreadable(reason) => write!(f, "unreadable: {reason}"),
        }
    }
}

/// Result of decoding one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Skipped(SkipReason),
}

impl Decoded {
    pub fn into_text(self) -> Option<String> {
        match self {
            Decoded::Text(text) => Some(text),
            Decoded::Skipped(_) => None,
        }
    }
}

/// Decoder with a per-file size guard
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    max_bytes: u64,
}

impl Decoder {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self {
            max_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Decode the file at `path`
    pub fn decode(&self, path: &Path) -> Decoded {
        match fs::metadata(path) {
            Ok(metadata) if metadata.len() > self.max_bytes => {
                return Decoded::Skipped(SkipReason::TooLarge {
                    size: metadata.len(),
                    limit: self.max_bytes,
                });
            }
            Ok(_) => {}
            Err(e) => return Decoded::Skipped(SkipReason::Unreadable(e.kind().to_string())),
        }

        match fs::read(path) {
            Ok(bytes) => Decoded::Text(decode_bytes(&bytes)),
            Err(e) => Decoded::Skipped(SkipReason::Unreadable(e.kind().to_string())),
        }
    }
}

/// Lossy UTF-8 decode with the byte-order mark stripped
pub fn decode_bytes(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
