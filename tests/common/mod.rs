//! Helpers for integration tests.

use std::io::Write;

use pushkind_news::repository::CatalogRepository;
use pushkind_news::seed::default_catalog;
use tempfile::NamedTempFile;

/// Repository over the catalog bundled with the crate.
#[allow(dead_code)]
pub fn bundled_repository() -> CatalogRepository {
    CatalogRepository::new(default_catalog().expect("bundled catalog should be valid"))
}

/// Seed document on disk, removed when dropped.
#[allow(dead_code)]
pub struct SeedFile {
    file: NamedTempFile,
}

#[allow(dead_code)]
impl SeedFile {
    pub fn new(document: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(document.as_bytes())
            .expect("Failed to write seed document");
        SeedFile { file }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

/// Minimal `[1: Tech, 2: Sports, 3: Tech]` catalog document.
#[allow(dead_code)]
pub const SCENARIO_DOCUMENT: &str = r##"{
  "categories": [
    { "id": "t", "name": "Tech", "color": "#7C3AED", "icon": "smartphone", "articleCount": 2 },
    { "id": "s", "name": "Sports", "color": "#059669", "icon": "trophy", "articleCount": 1 }
  ],
  "articles": [
    { "id": "1", "title": "Chips get faster", "excerpt": "New silicon.", "content": "A.\n\nB.",
      "imageUrl": "https://images.example.com/1.jpeg", "category": "Tech", "author": "Ann",
      "publishedAt": "2024-01-15T10:30:00Z", "readTime": 3 },
    { "id": "2", "title": "Sports Update", "excerpt": "Scores.", "content": "A.",
      "imageUrl": "https://images.example.com/2.jpeg", "category": "Sports", "author": "Bob",
      "publishedAt": "2024-01-14T10:30:00Z", "readTime": 2, "isBookmarked": true },
    { "id": "3", "title": "Phones fold again", "excerpt": "Hinges.", "content": "A.",
      "imageUrl": "https://images.example.com/3.jpeg", "category": "Tech", "author": "Cy",
      "publishedAt": "2024-01-13T10:30:00Z", "readTime": 4 }
  ]
}"##;
