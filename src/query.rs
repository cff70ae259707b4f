//! The gallery query and its result shape.
//!
//! One fixed, parameterless composite query fetches everything a build
//! needs in a single round trip: the project record and every photo item
//! with a resolved image asset, in creation order. Combining the two
//! result sets avoids a partial-state race where the project metadata and
//! the photo list come from different snapshots of the dataset.
//!
//! Zero matching photos is a valid result (empty gallery), not an error.

use serde::Deserialize;

use crate::types::{PhotoItem, ProjectRecord};

/// Title the project query filters on.
pub const PROJECT_TITLE: &str = "Chakana Rebelde";

/// The composite gallery query.
///
/// - `project`: first `creativeProject` whose title matches exactly.
/// - `photos`: all `photoItem` documents with a defined asset URL,
///   ordered by creation time ascending. The `defined()` guard keeps
///   drafts mid-upload out of the result; the assembler re-checks the
///   non-blank invariant on top.
pub fn gallery_query() -> String {
    format!(
        r#"{{
  "project": *[_type == "creativeProject" && title == "{PROJECT_TITLE}"][0]{{
    _id,
    title,
    photoReportageDetails,
    _updatedAt
  }},
  "photos": *[_type == "photoItem" && defined(image.asset->url)] | order(_createdAt){{
    _id,
    title,
    "imageUrl": image.asset->url,
    caption,
    chapter
  }}
}}"#
    )
}

/// Dual result set returned by [`gallery_query`].
#[derive(Debug, Deserialize)]
pub struct RawResult {
    /// `null` when the project record is not yet published — valid, the
    /// renderer degrades to fallbacks.
    #[serde(default)]
    pub project: Option<ProjectRecord>,
    /// Empty when no photo has a resolved asset yet — valid, the
    /// renderer shows the placeholder state.
    #[serde(default)]
    pub photos: Vec<PhotoItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_targets_both_document_types() {
        let q = gallery_query();
        assert!(q.contains(r#"_type == "creativeProject""#));
        assert!(q.contains(r#"_type == "photoItem""#));
    }

    #[test]
    fn query_filters_on_project_title() {
        let q = gallery_query();
        assert!(q.contains(r#"title == "Chakana Rebelde""#));
    }

    #[test]
    fn query_orders_photos_by_creation() {
        let q = gallery_query();
        assert!(q.contains("order(_createdAt)"));
    }

    #[test]
    fn query_requires_defined_asset_url() {
        let q = gallery_query();
        assert!(q.contains("defined(image.asset->url)"));
    }

    #[test]
    fn raw_result_parses_full_payload() {
        let json = r#"{
            "project": {
                "_id": "project-1",
                "title": "Chakana Rebelde",
                "photoReportageDetails": { "totalPhotos": 2, "narrativeStyle": "Documental" },
                "_updatedAt": "2024-06-13T12:00:00Z"
            },
            "photos": [
                { "_id": "p1", "imageUrl": "https://cdn.example.com/1.jpg" },
                { "_id": "p2", "imageUrl": "https://cdn.example.com/2.jpg" }
            ]
        }"#;
        let raw: RawResult = serde_json::from_str(json).unwrap();
        assert!(raw.project.is_some());
        assert_eq!(raw.photos.len(), 2);
    }

    #[test]
    fn raw_result_tolerates_null_project_and_empty_photos() {
        let json = r#"{ "project": null, "photos": [] }"#;
        let raw: RawResult = serde_json::from_str(json).unwrap();
        assert!(raw.project.is_none());
        assert!(raw.photos.is_empty());
    }
}
