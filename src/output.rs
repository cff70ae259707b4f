//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not transport-centric**. The primary
//! display for every entity is its semantic identity — title and
//! positional index — with wire details (asset host, chapter tag) shown
//! as secondary context via indented lines. The fetch inventory reads as
//! a content listing, not an HTTP log.
//!
//! # Output Format
//!
//! ## Fetch / Check
//!
//! ```text
//! Project
//! 001 Chakana Rebelde (Documental)
//!     Updated: 2024-06-13
//!
//! Photos (12 total, 11 displayable)
//! 001 Amanecer
//!     Source: cdn.sanity.io
//!     Chapter: capitulo-1
//! 002 (02.jpg)
//!     Source: cdn.sanity.io
//! ```
//!
//! ## Generate
//!
//! ```text
//! Gallery → dist/index.html (11 tiles: 8 eager, 3 lazy)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use std::path::Path;

use crate::assemble;
use crate::generate::{GenerateReport, PageOutcome};
use crate::types::{PhotoItem, Snapshot};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a photo line: titled photos show the title, untitled show the
/// asset's filename in parens — the filename IS the identity.
fn photo_line(index: usize, photo: &PhotoItem) -> String {
    match photo.title.as_deref() {
        Some(t) if !t.is_empty() => format!("{} {}", format_index(index), t),
        _ => format!("{} ({})", format_index(index), asset_name(&photo.image_url)),
    }
}

/// Last path segment of an asset URL, or the whole URL if it has none.
fn asset_name(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

/// Host portion of an asset URL.
fn asset_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split('/').next().unwrap_or(rest)
}

// ============================================================================
// Fetch stage
// ============================================================================

/// Format the content inventory of a fetch snapshot.
pub fn format_fetch_output(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Project".to_string());
    match &snapshot.project {
        Some(project) => {
            let style = project
                .reportage_details
                .as_ref()
                .and_then(|d| d.narrative_style.as_deref());
            let header = match style {
                Some(style) => format!("{} {} ({})", format_index(1), project.title, style),
                None => format!("{} {}", format_index(1), project.title),
            };
            lines.push(header);
            let date = project
                .updated_at
                .split('T')
                .next()
                .unwrap_or(&project.updated_at);
            lines.push(format!("    Updated: {date}"));
        }
        None => {
            lines.push("    (not published — fallbacks will be used)".to_string());
        }
    }

    let displayable = snapshot
        .photos
        .iter()
        .filter(|p| assemble::is_displayable(p))
        .count();
    lines.push(String::new());
    lines.push(format!(
        "Photos ({} total, {} displayable)",
        snapshot.photos.len(),
        displayable
    ));
    for (i, photo) in snapshot.photos.iter().enumerate() {
        lines.push(photo_line(i + 1, photo));
        if assemble::is_displayable(photo) {
            lines.push(format!("    Source: {}", asset_host(&photo.image_url)));
        } else {
            lines.push("    Source: (no image URL — will be filtered)".to_string());
        }
        if let Some(chapter) = &photo.chapter {
            lines.push(format!("    Chapter: {chapter}"));
        }
    }

    lines
}

/// Print the fetch inventory to stdout.
pub fn print_fetch_output(snapshot: &Snapshot) {
    for line in format_fetch_output(snapshot) {
        println!("{line}");
    }
}

// ============================================================================
// Generate stage
// ============================================================================

/// Format the outcome line of a generate run.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let page = output_dir.join("index.html");
    let line = match report.outcome {
        PageOutcome::Gallery => format!(
            "Gallery → {} ({} tiles: {} eager, {} lazy)",
            page.display(),
            report.tiles,
            report.eager,
            report.lazy
        ),
        PageOutcome::Placeholder => {
            format!("Placeholder → {} (no photos yet)", page.display())
        }
        PageOutcome::ErrorPage => format!("Error page → {}", page.display()),
    };
    vec![line]
}

/// Print the generate outcome to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        photo, photo_in_chapter, snapshot_with_photos, snapshot_without_project, untitled_photo,
    };
    use std::path::PathBuf;

    #[test]
    fn index_is_three_digit_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(26), "026");
        assert_eq!(format_index(120), "120");
    }

    #[test]
    fn photo_line_prefers_title() {
        let p = photo("p1");
        assert_eq!(photo_line(1, &p), "001 Foto p1");
    }

    #[test]
    fn photo_line_falls_back_to_asset_name() {
        let p = untitled_photo("p1", "https://cdn.example.com/images/02.jpg");
        assert_eq!(photo_line(2, &p), "002 (02.jpg)");
    }

    #[test]
    fn asset_host_strips_scheme_and_path() {
        assert_eq!(
            asset_host("https://cdn.sanity.io/images/iawu5ctn/production/x.jpg"),
            "cdn.sanity.io"
        );
    }

    #[test]
    fn fetch_output_lists_project_and_photos() {
        let snapshot = snapshot_with_photos(vec![photo("p1"), photo_in_chapter("p2", "capitulo-1")]);
        let lines = format_fetch_output(&snapshot);
        assert!(lines.contains(&"001 Chakana Rebelde (Documental)".to_string()));
        assert!(lines.contains(&"Photos (2 total, 2 displayable)".to_string()));
        assert!(lines.contains(&"    Chapter: capitulo-1".to_string()));
    }

    #[test]
    fn fetch_output_marks_missing_project() {
        let snapshot = snapshot_without_project(vec![photo("p1")]);
        let lines = format_fetch_output(&snapshot);
        assert!(lines.contains(&"    (not published — fallbacks will be used)".to_string()));
    }

    #[test]
    fn fetch_output_counts_displayable_separately() {
        let snapshot = snapshot_with_photos(vec![photo("p1"), untitled_photo("p2", "  ")]);
        let lines = format_fetch_output(&snapshot);
        assert!(lines.contains(&"Photos (2 total, 1 displayable)".to_string()));
    }

    #[test]
    fn generate_output_reports_eager_lazy_split() {
        let report = GenerateReport {
            outcome: PageOutcome::Gallery,
            tiles: 11,
            eager: 8,
            lazy: 3,
        };
        let lines = format_generate_output(&report, &PathBuf::from("dist"));
        assert_eq!(
            lines,
            vec!["Gallery → dist/index.html (11 tiles: 8 eager, 3 lazy)".to_string()]
        );
    }

    #[test]
    fn generate_output_reports_placeholder() {
        let report = GenerateReport {
            outcome: PageOutcome::Placeholder,
            tiles: 0,
            eager: 0,
            lazy: 0,
        };
        let lines = format_generate_output(&report, &PathBuf::from("dist"));
        assert_eq!(
            lines,
            vec!["Placeholder → dist/index.html (no photos yet)".to_string()]
        );
    }
}
