//! Display-set assembly.
//!
//! Turns the raw query result into the exact ordered sequence of photos
//! the page renders, plus the derived stats shown alongside it. Pure
//! functions throughout: same input, same output, no hidden state — the
//! generate stage can re-run assembly on a saved snapshot and get an
//! identical page.
//!
//! ## Pipeline
//!
//! 1. Validity filter: keep photos whose trimmed image URL is non-empty.
//!    The query already excludes undefined asset URLs, but a blank or
//!    whitespace URL would render a broken tile, so it is enforced here
//!    regardless of what the service returned.
//! 2. Chapter filter: when configured, keep only photos tagged with the
//!    chapter. Unset keeps everything.
//! 3. Cap: truncate to the first `max_photos` items when the cap is set.
//!    The curated reportage edit pins this to its exact photo count; the
//!    default is unlimited.
//!
//! All three steps are stable — relative order of surviving photos is
//! creation order, exactly as fetched.

use crate::config::GalleryConfig;
use crate::types::{PhotoItem, ProjectRecord};

/// The filtered, ordered sequence of photos actually rendered, with its
/// derived stats. Recomputed on every generate run, never persisted.
#[derive(Debug)]
pub struct DisplaySet {
    /// Photos in display order.
    pub photos: Vec<PhotoItem>,
    /// Narrative style from the project record, or the configured
    /// fallback when the record or its metadata is absent.
    pub narrative_style: String,
}

impl DisplaySet {
    /// Number of photos on display.
    pub fn count(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Whether a photo can be displayed at all: its image URL must be
/// non-empty after trimming whitespace.
pub fn is_displayable(photo: &PhotoItem) -> bool {
    !photo.image_url.trim().is_empty()
}

/// Photos belonging to the given chapter.
///
/// `None` means no chapter filter — all photos pass.
pub fn in_chapter(photo: &PhotoItem, chapter: Option<&str>) -> bool {
    match chapter {
        None => true,
        Some(c) => photo.chapter.as_deref() == Some(c),
    }
}

/// Assemble the display set from a raw fetch result.
///
/// Order-preserving and deterministic: surviving photos keep their
/// relative creation order, and re-running on the same input yields an
/// identical set.
pub fn assemble(
    project: Option<&ProjectRecord>,
    photos: Vec<PhotoItem>,
    gallery: &GalleryConfig,
) -> DisplaySet {
    let chapter = gallery.chapter.as_deref();
    let mut display: Vec<PhotoItem> = photos
        .into_iter()
        .filter(is_displayable)
        .filter(|p| in_chapter(p, chapter))
        .collect();

    if gallery.max_photos > 0 {
        display.truncate(gallery.max_photos);
    }

    let narrative_style = project
        .and_then(|p| p.reportage_details.as_ref())
        .and_then(|d| d.narrative_style.as_deref())
        .unwrap_or(&gallery.narrative_fallback)
        .to_string();

    DisplaySet {
        photos: display,
        narrative_style,
    }
}
