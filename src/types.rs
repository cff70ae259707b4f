//! Shared document shapes used across both pipeline stages.
//!
//! These types mirror what the content repository actually sends over the
//! wire: Sanity-style system fields (`_id`, `_updatedAt`) and camelCase
//! user fields. They are serialized to `snapshot.json` between the fetch
//! and generate stages and must be identical in both.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// The one `creativeProject` document describing the reportage.
///
/// May be absent entirely (project not yet published) — every consumer
/// treats the record as optional and degrades to fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Opaque document id assigned by the content service.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name; also the key the gallery query filters on.
    pub title: String,
    /// Curated reportage metadata. Editors fill this in late, so it is
    /// optional even on a published project.
    #[serde(
        rename = "photoReportageDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reportage_details: Option<ReportageDetails>,
    /// Last-modified timestamp from the content service. Informational
    /// only — shown in the hero, never used for ordering.
    #[serde(rename = "_updatedAt")]
    pub updated_at: String,
}

/// Structured metadata attached to the project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportageDetails {
    /// Editor-declared photo count. The site derives its own count from
    /// the display set; this one is the curation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_photos: Option<u32>,
    /// Free-text descriptor of the storytelling approach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_style: Option<String>,
}

/// A single `photoItem` document.
///
/// Fetch-time ordering is creation order (`_createdAt` ascending in the
/// query); items carry no intrinsic sort key beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoItem {
    /// Opaque document id, stable across fetches.
    #[serde(rename = "_id")]
    pub id: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Resolved absolute URL of the image asset. The query only returns
    /// items with a defined asset URL, but the assembler still enforces
    /// the non-blank invariant — deserialization tolerates an absent
    /// value rather than deciding displayability.
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    /// Optional descriptive text shown in the hover overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Optional free-form grouping tag for narrative sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
}

/// Output of the fetch stage, consumed by generate.
///
/// Embeds the resolved site config so the generate stage works from the
/// snapshot alone.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRecord>,
    pub photos: Vec<PhotoItem>,
    pub config: SiteConfig,
}
