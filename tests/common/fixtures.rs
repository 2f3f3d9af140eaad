// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Structured services document used by the music app fixture
#[allow(dead_code)] // Used in integration tests
pub const SERVICES_DOC: &str = r#"{
    "services": {
        "auth_service": {
            "name": "Authentication Service",
            "description": "Issues and validates session tokens",
            "capabilities": [
                {"name": "login", "description": "Email and password login"},
                {"name": "refresh"}
            ],
            "qa": [
                {"question": "Where are tokens stored?", "answer": "In httpOnly cookies"}
            ]
        },
        "playlist_service": {
            "name": "Playlist Service",
            "description": "CRUD for user playlists",
            "capabilities": [{"name": "reorder", "description": "Moves a track within a playlist"}]
        }
    },
    "general_qa": [
        {"question": "How do I run the stack locally?", "answer": "docker compose up"}
    ],
    "api_endpoints": {
        "songs": [
            {"path": "/api/songs", "method": "get", "description": "Lists songs"}
        ]
    }
}"#;

/// Test repository fixture for creating synthetic test data
#[allow(dead_code)] // Used in integration tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// Small music-streaming app layout with documentation sources
    #[allow(dead_code)] // Used in integration tests
    pub fn music_app() -> Self {
        Self::with_files(&[
            (
                "backend/app/api/songs.py",
                "from fastapi import APIRouter\n\nrouter = APIRouter()\n\n\
                 @router.get(\"/songs\")\ndef list_songs():\n    return db.songs()\n\n\
                 @router.get(\"/songs/{song_id}\")\ndef get_song(song_id: int):\n    return db.song(song_id)\n",
            ),
            (
                "backend/app/main.py",
                "import os\nfrom fastapi import FastAPI\n\napp = FastAPI()\n",
            ),
            (
                "backend/docs/backend_services_documentation.json",
                SERVICES_DOC,
            ),
            ("backend/Dockerfile", "FROM python:3.12\nCOPY . /app\n"),
            (
                "frontend/app/page.tsx",
                "export default function Page() {\n  return <SongList />;\n}\n",
            ),
            ("frontend/package.json", "{\"name\": \"frontend\"}\n"),
            (
                "frontend/node_modules/react/index.js",
                "function list_songs() {}\n",
            ),
            (
                "docs/setup.md",
                "# Setup\n\nInstall Docker first.\n\n## How do I seed the database?\n\nRun make seed.\n",
            ),
            (
                "docs/mobile/offline.md",
                "# How does offline mode work?\n\nSongs are cached on device.\n",
            ),
            ("README.md", "# Music App\n\nlist_songs is the main endpoint.\n"),
            (".env.example", "DATABASE_URL=\n"),
            (".secret", "token\n"),
            ("assets/logo.png", "not really a png"),
        ])
    }

    /// Create with custom files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Write raw bytes (for encoding tests)
    #[allow(dead_code)] // Used in integration tests
    pub fn write_bytes(&self, relative: &str, bytes: &[u8]) {
        let full_path = self.dir.path().join(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, bytes).unwrap();
    }

    /// Get repository path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
