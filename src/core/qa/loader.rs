//! Assembles the Q&A index from its documentation sources.
//!
//! Sources are read once. A missing or malformed source contributes
//! nothing; building the index never fails.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::curated::CURATED;
use super::engine::QaIndex;
use super::model::{
    QaCategory, QaEntry, ServicesDocument, API, BACKEND, CATEGORIES, GENERAL,
};
use super::narrative::NarrativeExtractor;
use crate::core::config::Config;
use crate::core::explorer::decode::decode_bytes;

const NARRATIVE_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// Build a fresh index from the sources named in `config`
pub fn build_index(config: &Config) -> QaIndex {
    let document = load_document(&config.resolve(&config.qa.services_doc)).unwrap_or_default();

    let mut categories: Vec<QaCategory> = CATEGORIES
        .iter()
        .map(|(key, name, description)| QaCategory::new(*key, *name, *description))
        .collect();

    add_structured(&mut categories, &document);
    add_curated(&mut categories);

    if config.qa.narrative_enabled {
        let extractor =
            NarrativeExtractor::new(config.qa.max_answer_lines, config.qa.max_entries_per_document);
        add_narrative(
            &mut categories,
            &config.resolve(&config.qa.narrative_dir),
            &extractor,
        );
    }

    let total: usize = categories.iter().map(|c| c.entries.len()).sum();
    tracing::info!(
        "Q&A index built: {} entries in {} categories, {} services",
        total,
        categories.len(),
        document.services.len()
    );

    QaIndex::new(categories, document, project_dir_name(&config.project.root))
}

/// Read the structured document, or None if absent or malformed
pub fn load_document(path: &Path) -> Option<ServicesDocument> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No services document at {:?}", path);
            return None;
        }
        Err(e) => {
            tracing::warn!("Cannot read services document {:?}: {}", path, e);
            return None;
        }
    };

    match serde_json::from_str(&decode_bytes(&bytes)) {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::warn!("Ignoring malformed services document {:?}: {}", path, e);
            None
        }
    }
}

fn category_mut<'a>(categories: &'a mut [QaCategory], key: &str) -> Option<&'a mut QaCategory> {
    categories.iter_mut().find(|c| c.key == key)
}

/// Service Q&A, capability entries, general Q&A and endpoint entries
fn add_structured(categories: &mut [QaCategory], document: &ServicesDocument) {
    if let Some(backend) = category_mut(categories, BACKEND) {
        for (key, service) in &document.services {
            let origin = service.display_name(key);

            for pair in &service.qa {
                backend.push(QaEntry::from(pair.clone()).with_origin(origin));
            }

            for capability in &service.capabilities {
                if capability.name.is_empty() {
                    continue;
                }
                let answer = if capability.description.is_empty() {
                    format!("{} is provided by {}.", capability.name, origin)
                } else {
                    capability.description.clone()
                };
                backend.push(
                    QaEntry::new(
                        format!("What does {} do for {}?", origin, capability.name),
                        answer,
                    )
                    .with_origin(origin),
                );
            }
        }
    }

    if let Some(general) = category_mut(categories, GENERAL) {
        for pair in &document.general_qa {
            general.push(QaEntry::from(pair.clone()));
        }
    }

    if let Some(api) = category_mut(categories, API) {
        for endpoints in document.api_endpoints.values() {
            for endpoint in endpoints {
                let method = endpoint.method.to_uppercase();
                api.push(QaEntry::new(
                    format!("How does `{} {}` work?", method, endpoint.path),
                    format!("{}. Method: {}", endpoint.description, method),
                ));
            }
        }
    }
}

fn add_curated(categories: &mut [QaCategory]) {
    for entry in CURATED {
        if let Some(category) = category_mut(categories, entry.category) {
            category.push(QaEntry::new(entry.question, entry.answer));
        }
    }
}

/// Extract entries from every narrative file under `dir`
///
/// Files directly under `dir` land in `general`; files below a
/// subdirectory land in the category named after it.
fn add_narrative(categories: &mut Vec<QaCategory>, dir: &Path, extractor: &NarrativeExtractor) {
    if !dir.is_dir() {
        tracing::debug!("No narrative directory at {:?}", dir);
        return;
    }

    let files = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_narrative(entry.path()));

    for entry in files {
        let relative = match entry.path().strip_prefix(dir) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };

        let text = match fs::read(entry.path()) {
            Ok(bytes) => decode_bytes(&bytes),
            Err(e) => {
                tracing::warn!("Cannot read narrative file {:?}: {}", entry.path(), e);
                continue;
            }
        };

        let key = narrative_category(&relative);
        if category_mut(categories, &key).is_none() {
            let name = title_case(&key);
            let description = format!("Questions from the {name} documentation");
            categories.push(QaCategory::new(key.clone(), name, description));
        }

        let origin = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if let Some(category) = category_mut(categories, &key) {
            for pair in extractor.extract(&text) {
                category.push(QaEntry::from(pair).with_origin(origin.as_str()));
            }
        }
    }
}

fn is_narrative(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| NARRATIVE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Category key for a file path relative to the narrative directory
fn narrative_category(relative: &Path) -> String {
    let mut components = relative.components();
    match (components.next(), components.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().to_lowercase(),
        _ => GENERAL.to_string(),
    }
}

/// `deployment_notes` -> `Deployment Notes`
fn title_case(key: &str) -> String {
    key.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last path component of the absolute root, used as the project name
fn project_dir_name(root: &Path) -> String {
    let absolute: PathBuf = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    absolute
        .components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|name| !name.is_empty() && name != "/")
        .unwrap_or_else(|| "project".to_string())
}
