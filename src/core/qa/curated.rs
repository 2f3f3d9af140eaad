//! Hand-maintained Q&A entries and the fallback project overview.
//!
//! These fill the categories the structured document does not cover
//! (frontend, database) and give every category a baseline.

use std::collections::BTreeMap;

use super::model::{OverviewDoc, StructureEntry, API, BACKEND, DATABASE, FRONTEND, GENERAL};

pub struct CuratedEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const CURATED: &[CuratedEntry] = &[
    CuratedEntry {
        category: BACKEND,
        question: "What framework does the backend use?",
        answer: "The backend is a FastAPI application on Python 3.11+. Business logic lives in \
                 app/services, routes in app/api and request/response models in app/schemas.",
    },
    CuratedEntry {
        category: BACKEND,
        question: "How is rate limiting done?",
        answer: "Rate limiting is applied per route with SlowAPI, configured in app/core.",
    },
    CuratedEntry {
        category: FRONTEND,
        question: "What framework does the frontend use?",
        answer: "The frontend is a Next.js 14 application written in TypeScript and styled with \
                 Tailwind CSS.",
    },
    CuratedEntry {
        category: FRONTEND,
        question: "How is state managed in the frontend?",
        answer: "State is kept in React hooks and shared through React contexts under \
                 app/contexts.",
    },
    CuratedEntry {
        category: FRONTEND,
        question: "Where are the UI components?",
        answer: "Reusable React components live in frontend/app/components; custom hooks are in \
                 frontend/app/hooks.",
    },
    CuratedEntry {
        category: DATABASE,
        question: "Which database does the project use?",
        answer: "Supabase, a hosted PostgreSQL. The backend talks to it through the Supabase \
                 client.",
    },
    CuratedEntry {
        category: DATABASE,
        question: "How are users authenticated?",
        answer: "Authentication is delegated to Supabase Auth; the backend verifies the session \
                 token on protected routes.",
    },
    CuratedEntry {
        category: DATABASE,
        question: "Where are uploaded audio files stored?",
        answer: "Song files and cover images are stored in Supabase Storage buckets.",
    },
    CuratedEntry {
        category: API,
        question: "Where are the API routes defined?",
        answer: "Each resource has a router module in backend/app/api that delegates to a \
                 service in backend/app/services.",
    },
    CuratedEntry {
        category: GENERAL,
        question: "How is the project deployed?",
        answer: "Both backend and frontend ship as Docker containers.",
    },
    CuratedEntry {
        category: GENERAL,
        question: "Where is the project documentation?",
        answer: "Narrative documentation lives under docs/, one subdirectory per area; the \
                 structured service reference is backend/docs/backend_services_documentation.json.",
    },
];

/// Overview used when the structured document has none
pub fn default_overview() -> OverviewDoc {
    let technologies = [
        (
            "frontend",
            &[
                ("framework", "Next.js 14"),
                ("language", "TypeScript"),
                ("styling", "Tailwind CSS"),
                ("state_management", "React Hooks"),
            ][..],
        ),
        (
            "backend",
            &[
                ("framework", "FastAPI"),
                ("language", "Python 3.11+"),
                ("rate_limiting", "SlowAPI"),
            ][..],
        ),
        (
            "database",
            &[
                ("system", "Supabase (PostgreSQL)"),
                ("auth", "Supabase Auth"),
                ("storage", "Supabase Storage"),
            ][..],
        ),
        ("deployment", &[("container", "Docker")][..]),
    ]
    .iter()
    .map(|(area, aspects)| (area.to_string(), table(aspects)))
    .collect();

    let mut structure = BTreeMap::new();
    structure.insert(
        "backend".to_string(),
        StructureEntry::Section(table(&[
            ("app/api", "API routes and endpoints"),
            ("app/services", "Business logic services"),
            ("app/core", "Configuration and utilities"),
            ("app/schemas", "Pydantic models"),
            ("app/middleware", "Custom middleware"),
        ])),
    );
    structure.insert(
        "frontend".to_string(),
        StructureEntry::Section(table(&[
            ("app/components", "React components"),
            ("app/pages", "Next.js pages"),
            ("app/hooks", "Custom React hooks"),
            ("app/contexts", "React contexts"),
        ])),
    );
    structure.insert(
        "docs".to_string(),
        StructureEntry::Description("Project documentation".to_string()),
    );

    OverviewDoc {
        project: None,
        technologies,
        structure,
    }
}

fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
