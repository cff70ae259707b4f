//! Shared test utilities for the chakana-rebelde test suite.
//!
//! Builders for photo and project documents plus snapshot assembly,
//! so unit tests can state their intent in one line instead of filling
//! in serde structs field by field.

use crate::config::SiteConfig;
use crate::types::{PhotoItem, ProjectRecord, ReportageDetails, Snapshot};

// =========================================================================
// Document builders
// =========================================================================

/// A displayable photo with a derived URL and title.
pub fn photo(id: &str) -> PhotoItem {
    PhotoItem {
        id: id.to_string(),
        title: Some(format!("Foto {id}")),
        image_url: format!("https://cdn.example.com/images/{id}.jpg"),
        caption: None,
        chapter: None,
    }
}

/// A photo with an explicit (possibly blank) URL and no other metadata.
pub fn untitled_photo(id: &str, url: &str) -> PhotoItem {
    PhotoItem {
        id: id.to_string(),
        title: None,
        image_url: url.to_string(),
        caption: None,
        chapter: None,
    }
}

/// A displayable photo tagged with a chapter.
pub fn photo_in_chapter(id: &str, chapter: &str) -> PhotoItem {
    PhotoItem {
        chapter: Some(chapter.to_string()),
        ..photo(id)
    }
}

/// A published project record. `style` fills the reportage metadata's
/// narrative style; `None` leaves the metadata present but style-less.
pub fn project_with_style(style: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        id: "project-chakana".to_string(),
        title: "Chakana Rebelde".to_string(),
        reportage_details: Some(ReportageDetails {
            total_photos: None,
            narrative_style: style.map(str::to_string),
        }),
        updated_at: "2024-06-13T12:00:00Z".to_string(),
    }
}

// =========================================================================
// Snapshot builders
// =========================================================================

/// A snapshot with the given photos, a styled project, and stock config.
pub fn snapshot_with_photos(photos: Vec<PhotoItem>) -> Snapshot {
    Snapshot {
        project: Some(project_with_style(Some("Documental"))),
        photos,
        config: SiteConfig::default(),
    }
}

/// A snapshot with no project record.
pub fn snapshot_without_project(photos: Vec<PhotoItem>) -> Snapshot {
    Snapshot {
        project: None,
        photos,
        config: SiteConfig::default(),
    }
}
