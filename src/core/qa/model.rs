//! Q&A data model.
//!
//! Two halves: the typed shape of the structured services document
//! (every field defaults, so partial documents load fine) and the
//! categorized entries the index serves.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BACKEND: &str = "backend";
pub const FRONTEND: &str = "frontend";
pub const DATABASE: &str = "database";
pub const API: &str = "api";
pub const GENERAL: &str = "general";

/// Fixed categories in display order: (key, display name, description)
pub const CATEGORIES: [(&str, &str, &str); 5] = [
    (
        BACKEND,
        "Backend",
        "Questions about the backend architecture and services",
    ),
    (
        FRONTEND,
        "Frontend",
        "Questions about the frontend implementation",
    ),
    (
        DATABASE,
        "Database",
        "Questions about the database and Supabase",
    ),
    (API, "API", "Questions about the API endpoints"),
    (GENERAL, "General", "General questions about the project"),
];

// ---------------------------------------------------------------------
// Structured documentation source
// ---------------------------------------------------------------------

/// Root of the structured services document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServicesDocument {
    #[serde(default)]
    pub services: BTreeMap<String, ServiceDoc>,

    #[serde(default)]
    pub general_qa: Vec<QaPair>,

    /// Endpoint lists keyed by group name
    #[serde(default)]
    pub api_endpoints: BTreeMap<String, Vec<EndpointDoc>>,

    #[serde(default)]
    pub overview: Option<OverviewDoc>,
}

/// One backend service
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServiceDoc {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub capabilities: Vec<Capability>,

    #[serde(default)]
    pub qa: Vec<QaPair>,
}

impl ServiceDoc {
    /// Display name, falling back to the document key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        if self.name.is_empty() {
            key
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Capability {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QaPair {
    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EndpointDoc {
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub description: String,
}

/// Project overview section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OverviewDoc {
    #[serde(default)]
    pub project: Option<String>,

    /// area -> aspect -> value, e.g. backend -> framework -> FastAPI
    #[serde(default)]
    pub technologies: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(default)]
    pub structure: BTreeMap<String, StructureEntry>,
}

/// A structure table value: a description or a nested path table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StructureEntry {
    Description(String),
    Section(BTreeMap<String, String>),
}

// ---------------------------------------------------------------------
// Index entries
// ---------------------------------------------------------------------

/// A single question/answer pair in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Service display name or narrative file the entry came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: None,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Case-insensitive substring test over question and answer
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

impl From<QaPair> for QaEntry {
    fn from(pair: QaPair) -> Self {
        QaEntry::new(pair.question, pair.answer)
    }
}

/// A bucket of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaCategory {
    pub key: String,
    pub name: String,
    pub description: String,
    pub entries: Vec<QaEntry>,
}

impl QaCategory {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, mut entry: QaEntry) {
        entry.category = Some(self.key.clone());
        self.entries.push(entry);
    }
}

/// All categories, serialized as a map in display order
#[derive(Debug, Clone, PartialEq)]
pub struct AllQa(pub Vec<QaCategory>);

impl AllQa {
    pub fn get(&self, key: &str) -> Option<&QaCategory> {
        self.0.iter().find(|c| c.key == key)
    }

    pub fn total_entries(&self) -> usize {
        self.0.iter().map(|c| c.entries.len()).sum()
    }
}

impl Serialize for AllQa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.key, category)?;
        }
        map.end()
    }
}

/// Search hit tagged with its category display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEntry {
    pub category: String,
    pub question: String,
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaSearchResult {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<TaggedEntry>,
}

/// Outcome of a service lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLookup {
    pub found: bool,

    /// Document key of the matched service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceDoc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub key: String,
    pub name: String,
    pub entries: usize,
}

/// High-level description of the codebase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodebaseOverview {
    pub project: String,
    pub technologies: BTreeMap<String, BTreeMap<String, String>>,
    pub structure: BTreeMap<String, StructureEntry>,
    pub services: Vec<ServiceSummary>,
    pub categories: Vec<CategoryCount>,
}
