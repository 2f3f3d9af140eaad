//! Queries over an assembled Q&A index.
//!
//! A `QaIndex` is immutable once built; every method is a pure read.

use std::collections::BTreeMap;

use super::curated::default_overview;
use super::model::{
    AllQa, CategoryCount, CodebaseOverview, QaCategory, QaSearchResult, ServiceDoc, ServiceLookup,
    ServiceSummary, ServicesDocument, TaggedEntry,
};
use crate::core::error::{Result, SonarError};

/// Immutable, fully assembled Q&A index
#[derive(Debug, Clone)]
pub struct QaIndex {
    categories: Vec<QaCategory>,
    services: BTreeMap<String, ServiceDoc>,
    overview: CodebaseOverview,
}

impl QaIndex {
    pub fn new(categories: Vec<QaCategory>, document: ServicesDocument, dir_name: String) -> Self {
        let source = document.overview.clone().unwrap_or_else(default_overview);

        let overview = CodebaseOverview {
            project: source.project.clone().unwrap_or(dir_name),
            technologies: source.technologies,
            structure: source.structure,
            services: document
                .services
                .iter()
                .map(|(key, service)| ServiceSummary {
                    name: service.display_name(key).to_string(),
                    description: service.description.clone(),
                })
                .collect(),
            categories: categories
                .iter()
                .map(|c| CategoryCount {
                    key: c.key.clone(),
                    name: c.name.clone(),
                    entries: c.entries.len(),
                })
                .collect(),
        };

        Self {
            categories,
            services: document.services,
            overview,
        }
    }

    /// Every category with its entries, in display order
    pub fn get_all_qa(&self) -> AllQa {
        AllQa(self.categories.clone())
    }

    pub fn categories(&self) -> &[QaCategory] {
        &self.categories
    }

    /// Case-insensitive substring search over questions and answers
    ///
    /// Hits come back in category order, then insertion order.
    pub fn search(&self, query: &str) -> Result<QaSearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SonarError::InvalidParameter(
                "query cannot be empty".to_string(),
            ));
        }

        let results: Vec<TaggedEntry> = self
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .entries
                    .iter()
                    .filter(|entry| entry.matches(&needle))
                    .map(|entry| TaggedEntry {
                        category: category.name.clone(),
                        question: entry.question.clone(),
                        answer: entry.answer.clone(),
                        origin: entry.origin.clone(),
                    })
            })
            .collect();

        Ok(QaSearchResult {
            query: query.to_string(),
            total_results: results.len(),
            results,
        })
    }

    /// Look a service up by key
    ///
    /// An exact key wins; otherwise the first service (in key order)
    /// whose key or display name contains `name`, ignoring case.
    pub fn get_service_info(&self, name: &str) -> ServiceLookup {
        let trimmed = name.trim();

        if !trimmed.is_empty() {
            if let Some(service) = self.services.get(trimmed) {
                return found(trimmed, service);
            }

            let needle = trimmed.to_lowercase();
            let partial = self.services.iter().find(|(key, service)| {
                key.to_lowercase().contains(&needle)
                    || service.name.to_lowercase().contains(&needle)
            });
            if let Some((key, service)) = partial {
                return found(key, service);
            }
        }

        ServiceLookup {
            found: false,
            key: None,
            service: None,
            error: Some(format!("Service '{trimmed}' not found")),
            available_services: self.service_keys(),
        }
    }

    pub fn service_keys(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    pub fn overview(&self) -> &CodebaseOverview {
        &self.overview
    }

    pub fn total_entries(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

fn found(key: &str, service: &ServiceDoc) -> ServiceLookup {
    ServiceLookup {
        found: true,
        key: Some(key.to_string()),
        service: Some(service.clone()),
        error: None,
        available_services: Vec::new(),
    }
}
